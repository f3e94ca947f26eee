//! Transient editing state between reading a record and committing to it
//!
//! Every transition returns the render request for the new state, so the
//! caller can schedule re-renders however it likes.

use crate::render::compositor::RenderRequest;
use crate::seed::codec::Seed;
use crate::seed::format::FormatEra;
use crate::seed::randomizer::{TrainerIds, randomize_for};
use crate::session::record::CreatureRecord;
use rand::Rng;

/// Seed and special flag being edited, plus the context read at open time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditingSession {
    era: FormatEra,
    ids: TrainerIds,
    seed: Seed,
    special: bool,
}

/// Record state after a commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitOutcome {
    /// Seed the session now holds
    pub seed: Seed,
    /// Whether the record ended up shiny
    pub shiny: bool,
}

impl EditingSession {
    /// Read seed, flag, ids, and era from `record`
    pub fn open<R: CreatureRecord + ?Sized>(record: &R) -> Self {
        Self {
            era: record.era(),
            ids: record.trainer_ids(),
            seed: record.stored_seed(),
            special: record.is_shiny(),
        }
    }

    /// Session not backed by a record
    pub const fn detached(era: FormatEra, ids: TrainerIds, seed: Seed, special: bool) -> Self {
        Self {
            era,
            ids,
            seed,
            special,
        }
    }

    /// Current seed
    pub const fn seed(&self) -> Seed {
        self.seed
    }

    /// Current special flag
    pub const fn special(&self) -> bool {
        self.special
    }

    /// Era resolved at open time
    pub const fn era(&self) -> FormatEra {
        self.era
    }

    /// Trainer identifiers read at open time
    pub const fn ids(&self) -> TrainerIds {
        self.ids
    }

    /// Seed as shown in the edit field
    pub fn hex_text(&self) -> String {
        self.seed.to_hex()
    }

    /// Render request for the current state
    pub const fn render_request(&self) -> RenderRequest {
        RenderRequest::new(self.seed, self.special)
    }

    /// Replace the seed
    pub const fn set_seed(&mut self, seed: Seed) -> RenderRequest {
        self.seed = seed;
        self.render_request()
    }

    /// Apply edited hex text; malformed text leaves the seed unchanged
    ///
    /// Returns `None` when the text was rejected.
    pub fn edit_text(&mut self, text: &str) -> Option<RenderRequest> {
        match Seed::from_hex(text) {
            Ok(seed) => Some(self.set_seed(seed)),
            Err(error) => {
                tracing::debug!(%error, kept = %self.seed, "ignoring seed edit");
                None
            }
        }
    }

    /// Toggle the special flag
    pub const fn set_special(&mut self, special: bool) -> RenderRequest {
        self.special = special;
        self.render_request()
    }

    /// Draw a new seed, keeping the special predicate when the era requires it
    pub fn randomize<G: Rng + ?Sized>(&mut self, rng: &mut G) -> RenderRequest {
        let seed = randomize_for(self.era, self.special, self.ids, rng);
        self.set_seed(seed)
    }

    /// Write the seed and flag back to `record`
    ///
    /// In the PID era the record may rewrite the PID to honor the flag, and
    /// the session adopts the rewritten value. Other eras store the seed in
    /// the encryption constant and leave it untouched by shiny changes.
    ///
    /// The record is also normalized: species forced to the spotted one in
    /// its base form, nickname cleared, and the ability slot refreshed from
    /// the PID (PID era) or reset to slot 0 when invalid (other eras).
    pub fn commit<R, G>(&mut self, record: &mut R, rng: &mut G) -> CommitOutcome
    where
        R: CreatureRecord + ?Sized,
        G: Rng + ?Sized,
    {
        record.normalize_species();

        match self.era {
            FormatEra::Pid => {
                record.set_pid(self.era.stored_from_seed(self.seed));
                reconcile_shiny(record, self.special);
                self.seed = self.era.seed_from_stored(record.pid());
            }
            FormatEra::EncryptionConstant | FormatEra::EncryptionConstantSwapped => {
                record.set_encryption_constant(self.era.stored_from_seed(self.seed));
                if record.pid() == 0 {
                    record.set_pid(rng.random::<u32>());
                }
                reconcile_shiny(record, self.special);
            }
        }

        record.clear_nickname();
        match self.era {
            FormatEra::Pid => record.refresh_ability((record.pid() & 1) as u8),
            FormatEra::EncryptionConstant | FormatEra::EncryptionConstantSwapped => {
                if !record.ability_is_valid() {
                    record.refresh_ability(0);
                }
            }
        }

        let outcome = CommitOutcome {
            seed: self.seed,
            shiny: record.is_shiny(),
        };
        tracing::info!(
            seed = %outcome.seed,
            shiny = outcome.shiny,
            field = self.era.field_label(),
            "committed spot pattern"
        );
        outcome
    }
}

fn reconcile_shiny<R: CreatureRecord + ?Sized>(record: &mut R, special: bool) {
    match (special, record.is_shiny()) {
        (true, false) => record.set_shiny(),
        (false, true) => record.set_unshiny(),
        _ => {}
    }
}
