use crate::domain::model::{Identifier, RawData};

/// Designer credited on a pattern (`pattern_author`).
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    id: Option<Identifier>,
    data: RawData,
}

impl_entity!(Author);

impl Author {
    pub fn id(&self) -> Option<u64> {
        self.data.u64("id")
    }

    pub fn name(&self) -> Option<&str> {
        self.data.str("name")
    }

    pub fn permalink(&self) -> Option<&str> {
        self.data.str("permalink")
    }

    pub fn favorites_count(&self) -> Option<i64> {
        self.data.i64("favorites_count")
    }

    pub fn patterns_count(&self) -> Option<i64> {
        self.data.i64("patterns_count")
    }
}
