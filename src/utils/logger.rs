//! Optional `tracing` subscriber for applications embedding this crate.
//!
//! The library itself only emits `tracing` events and never installs a
//! subscriber. An application that has no logging setup of its own can call
//! [`init_logger`] once at startup:
//!
//! ```no_run
//! ravelry_patterns::init_logger(false, false);
//! ```
//!
//! `RUST_LOG` overrides the default filter when set.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Install a global subscriber: compact lines, or one JSON object per line
/// when `json` is set. `verbose` lowers this crate's level to `debug`.
///
/// Returns `false` if a global subscriber was already installed, in which
/// case nothing changes.
pub fn init_logger(verbose: bool, json: bool) -> bool {
    let default_filter = if verbose {
        "ravelry_patterns=debug,info"
    } else {
        "ravelry_patterns=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);
    let layer = if json {
        layer.json().boxed()
    } else {
        layer.compact().boxed()
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .is_ok()
}
