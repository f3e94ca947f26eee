//! Seed randomization that can keep the special flag satisfied

use crate::seed::codec::Seed;
use crate::seed::format::FormatEra;
use rand::Rng;

/// Pair of 16-bit trainer identifiers the special predicate is keyed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TrainerIds {
    /// Public identifier
    pub tid: u16,
    /// Secret identifier
    pub sid: u16,
}

impl TrainerIds {
    /// Predicate seed value: `(tid ^ sid) >> 3`
    pub const fn psv(self) -> u32 {
        ((self.tid ^ self.sid) >> 3) as u32
    }
}

/// Draw 32 uniformly random bits
pub fn randomize<R: Rng + ?Sized>(rng: &mut R) -> Seed {
    Seed(rng.random::<u32>())
}

/// Draw a seed whose bits 3-15 carry the predicate seed value
///
/// Bits 16-31 and 0-2 stay as drawn.
pub fn randomize_constrained<R: Rng + ?Sized>(rng: &mut R, ids: TrainerIds) -> Seed {
    constrain(rng.random::<u32>(), ids)
}

/// Overwrite bits 3-15 of `bits` with the predicate seed value
pub const fn constrain(bits: u32, ids: TrainerIds) -> Seed {
    Seed((bits & 0xFFFF_0000) | (ids.psv() << 3) | (bits & 0x7))
}

/// Pick constrained or unconstrained randomization for the era
///
/// Only the PID era ties the seed to the special flag, so the constraint
/// applies there and only when the flag is requested.
pub fn randomize_for<R: Rng + ?Sized>(
    era: FormatEra,
    special: bool,
    ids: TrainerIds,
    rng: &mut R,
) -> Seed {
    if special && era.seed_gates_special() {
        randomize_constrained(rng, ids)
    } else {
        randomize(rng)
    }
}
