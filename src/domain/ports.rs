use crate::domain::model::PatternId;
use crate::utils::error::Result;

/// Transport seam: one authenticated GET for one pattern.
///
/// Implementations return the body of a successful response untouched;
/// parsing belongs to the caller. Non-2xx answers and connection problems
/// come back as transport errors.
pub trait Fetcher {
    fn fetch_pattern(&self, id: &PatternId) -> Result<String>;
}

