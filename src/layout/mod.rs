//! Spot geometry derived from decoded seeds

/// Fixed per-region containers
pub mod regions;
/// Digit pair to spot descriptor mapping
pub mod spots;

pub use regions::{CONTAINERS, Container, Region};
pub use spots::{SpotDescriptor, layout};
