// Domain layer: identifier, raw payload container and the transport port.

pub mod model;
pub mod ports;

pub use model::{Identifier, PatternId, RawData};
pub use ports::Fetcher;
