//! Seed decoding, storage eras, and randomization

/// Seed value, digit pairs, byte swap, and hex text
pub mod codec;
/// Save-format eras and the game table
pub mod format;
/// Unconstrained and special-preserving randomization
pub mod randomizer;

pub use codec::{DigitPair, Seed};
pub use format::{FormatEra, Game};
pub use randomizer::TrainerIds;
