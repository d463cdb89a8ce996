use crate::domain::model::{Identifier, RawData};

#[derive(Debug, Clone, PartialEq)]
pub struct Craft {
    id: Option<Identifier>,
    data: RawData,
}

impl_entity!(Craft);

impl Craft {
    pub fn id(&self) -> Option<u64> {
        self.data.u64("id")
    }

    pub fn name(&self) -> Option<&str> {
        self.data.str("name")
    }

    pub fn permalink(&self) -> Option<&str> {
        self.data.str("permalink")
    }
}
