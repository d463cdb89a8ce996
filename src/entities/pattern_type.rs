use crate::domain::model::{Identifier, RawData};

/// Garment or object type of a pattern (`pattern_type`), e.g. "Socks".
#[derive(Debug, Clone, PartialEq)]
pub struct PatternType {
    id: Option<Identifier>,
    data: RawData,
}

impl_entity!(PatternType);

impl PatternType {
    pub fn id(&self) -> Option<u64> {
        self.data.u64("id")
    }

    pub fn name(&self) -> Option<&str> {
        self.data.str("name")
    }

    pub fn permalink(&self) -> Option<&str> {
        self.data.str("permalink")
    }

    pub fn is_clothing(&self) -> Option<bool> {
        self.data.bool("clothing")
    }
}
