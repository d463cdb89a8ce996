//! Typed access to knitting and crochet patterns from the Ravelry catalog API.
//!
//! ```no_run
//! use ravelry_patterns::{HttpFetcher, Pattern};
//!
//! fn main() -> ravelry_patterns::Result<()> {
//!     let fetcher = HttpFetcher::from_env()?;
//!     let mut pattern = Pattern::fetch(600u64, &fetcher)?;
//!     pattern.build_all_objects()?;
//!
//!     println!("{:?} by {:?}", pattern.name(), pattern.author().and_then(|a| a.name()));
//!     for yarn in pattern.yarns().unwrap_or_default() {
//!         println!("  {:?}", yarn.name());
//!     }
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod entities;
pub mod utils;

pub use adapters::HttpFetcher;
pub use config::{ClientConfig, TomlConfig};
pub use core::{Pattern, PatternState};
pub use domain::{Fetcher, Identifier, PatternId, RawData};
pub use entities::{
    Author, Category, Craft, Entity, Needle, Pack, PatternType, Photo, Printing, Yarn, YarnWeight,
};
pub use utils::error::{ErrorCategory, RavelryError, Result};
pub use utils::logger::init_logger;
