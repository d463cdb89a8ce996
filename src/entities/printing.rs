use crate::domain::model::{Identifier, RawData};

/// Where a pattern is published: a book, magazine, or web page.
///
/// Everything except `primary_source` lives under the nested
/// `pattern_source` mapping; a missing `pattern_source` reads as absent.
#[derive(Debug, Clone, PartialEq)]
pub struct Printing {
    id: Option<Identifier>,
    data: RawData,
}

impl_entity!(Printing);

impl Printing {
    pub fn is_primary_source(&self) -> Option<bool> {
        self.data.bool("primary_source")
    }

    pub fn name(&self) -> Option<&str> {
        self.data.str_at(&["pattern_source", "name"])
    }

    pub fn url(&self) -> Option<&str> {
        self.data.str_at(&["pattern_source", "url"])
    }

    pub fn permalink(&self) -> Option<&str> {
        self.data.str_at(&["pattern_source", "permalink"])
    }

    pub fn price(&self) -> Option<f64> {
        self.data.f64_at(&["pattern_source", "price"])
    }

    pub fn author(&self) -> Option<&str> {
        self.data.str_at(&["pattern_source", "author"])
    }

    pub fn is_out_of_print(&self) -> Option<bool> {
        self.data.bool_at(&["pattern_source", "out_of_print"])
    }

    pub fn patterns_count(&self) -> Option<i64> {
        self.data.i64_at(&["pattern_source", "patterns_count"])
    }
}
