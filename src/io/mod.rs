//! Input/output, configuration, and error handling

/// Artwork discovery and loading
pub mod assets;
/// Command-line interface
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error type and result alias
pub mod error;
/// PNG export
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Batch progress display
pub mod progress;
