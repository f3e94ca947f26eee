//! Subscriber setup for the binary; the library only emits events

use crate::io::error::{Result, invalid_parameter};
use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` when set, otherwise this crate at `level`
///
/// # Errors
///
/// Returns `SpotError::InvalidParameter` if `level` is not a valid directive
pub fn build_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env().or_else(|_unset| {
        EnvFilter::try_new(format!("{}={level}", env!("CARGO_CRATE_NAME")))
            .map_err(|e| invalid_parameter("log-level", &level, &e))
    })
}

/// Install a stderr `fmt` subscriber
///
/// # Errors
///
/// Returns an error if the level is invalid or a subscriber is already installed
pub fn init_logging(level: &str) -> Result<()> {
    let filter = build_filter(level)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| invalid_parameter("log-level", &level, &e))
}
