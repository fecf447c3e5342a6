//! Log subscriber setup for the `reqtree` binary.
//!
//! Library crates log through the `log` facade; the fmt subscriber installed
//! here also captures those records. `RUST_LOG` wins when set, then `-v`
//! flags, then the configured level.

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// Filter directive for a `-v` count, or `None` to defer to the config.
pub fn verbosity_filter(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        _ => Some("debug"),
    }
}

/// Build the filter from `RUST_LOG`, verbosity, and the configured level.
pub fn build_filter(verbose: u8, configured: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let directive = verbosity_filter(verbose).unwrap_or(configured);
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber, writing to stderr.
pub fn init(verbose: u8, configured: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose, configured))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))?;
    tracing::debug!(verbose, configured, "logging initialized");
    Ok(())
}
