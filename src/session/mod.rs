//! Editing session and the record it reads from and commits to

/// State transitions for seed and flag edits
pub mod editor;
/// Creature record interface and an in-memory implementation
pub mod record;

pub use editor::{CommitOutcome, EditingSession};
pub use record::{CreatureRecord, MemoryRecord};
