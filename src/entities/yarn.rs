use crate::domain::model::{Identifier, RawData};

#[derive(Debug, Clone, PartialEq)]
pub struct Yarn {
    id: Option<Identifier>,
    data: RawData,
}

impl_entity!(Yarn);

impl Yarn {
    pub fn id(&self) -> Option<u64> {
        self.data.u64("id")
    }

    pub fn name(&self) -> Option<&str> {
        self.data.str("name")
    }

    pub fn permalink(&self) -> Option<&str> {
        self.data.str("permalink")
    }

    pub fn yarn_company_id(&self) -> Option<u64> {
        self.data.u64("yarn_company_id")
    }

    pub fn yarn_company_name(&self) -> Option<&str> {
        self.data.str("yarn_company_name")
    }
}
