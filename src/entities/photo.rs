use crate::domain::model::{Identifier, RawData};

#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    id: Option<Identifier>,
    data: RawData,
}

impl_entity!(Photo);

impl Photo {
    pub fn id(&self) -> Option<u64> {
        self.data.u64("id")
    }

    pub fn sort_order(&self) -> Option<i64> {
        self.data.i64("sort_order")
    }

    pub fn x_offset(&self) -> Option<i64> {
        self.data.i64("x_offset")
    }

    pub fn y_offset(&self) -> Option<i64> {
        self.data.i64("y_offset")
    }

    pub fn caption(&self) -> Option<&str> {
        self.data.str("caption")
    }

    pub fn caption_html(&self) -> Option<&str> {
        self.data.str("caption_html")
    }

    pub fn copyright_holder(&self) -> Option<&str> {
        self.data.str("copyright_holder")
    }

    pub fn square_url(&self) -> Option<&str> {
        self.data.str("square_url")
    }

    pub fn small_url(&self) -> Option<&str> {
        self.data.str("small_url")
    }

    pub fn small2_url(&self) -> Option<&str> {
        self.data.str("small2_url")
    }

    pub fn medium_url(&self) -> Option<&str> {
        self.data.str("medium_url")
    }

    pub fn medium2_url(&self) -> Option<&str> {
        self.data.str("medium2_url")
    }

    pub fn thumbnail_url(&self) -> Option<&str> {
        self.data.str("thumbnail_url")
    }
}
