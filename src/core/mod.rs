pub mod pattern;

pub use crate::domain::{Fetcher, Identifier, PatternId, RawData};
pub use crate::utils::error::Result;
pub use pattern::{Pattern, PatternState};
