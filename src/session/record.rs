//! Access to the creature record the seed is read from and written to

use crate::io::configuration::SPOTTED_SPECIES;
use crate::seed::codec::Seed;
use crate::seed::format::FormatEra;
use crate::seed::randomizer::{TrainerIds, constrain};

/// Narrow view of the host's creature record
///
/// Shiny state is owned by the record: the session only asks for it to be
/// set or cleared and reads back whatever identifier the record settled on.
pub trait CreatureRecord {
    /// Storage era of this record
    fn era(&self) -> FormatEra;
    /// Primary identifier
    fn pid(&self) -> u32;
    /// Replace the primary identifier
    fn set_pid(&mut self, pid: u32);
    /// Encryption constant
    fn encryption_constant(&self) -> u32;
    /// Replace the encryption constant
    fn set_encryption_constant(&mut self, value: u32);
    /// Trainer identifiers the shiny predicate is keyed on
    fn trainer_ids(&self) -> TrainerIds;
    /// Whether the record is currently shiny
    fn is_shiny(&self) -> bool;
    /// Make the record shiny, adjusting its PID
    fn set_shiny(&mut self);
    /// Make the record not shiny, adjusting its PID
    fn set_unshiny(&mut self);
    /// Force the spotted species in its base form
    fn normalize_species(&mut self);
    /// Drop any nickname so the species name shows
    fn clear_nickname(&mut self);
    /// Whether the stored ability is one the species can have
    fn ability_is_valid(&self) -> bool;
    /// Select the ability in `slot` (0 or 1)
    fn refresh_ability(&mut self, slot: u8);

    /// Seed as stored in the field this era uses
    fn stored_seed(&self) -> Seed {
        let era = self.era();
        let stored = match era {
            FormatEra::Pid => self.pid(),
            FormatEra::EncryptionConstant | FormatEra::EncryptionConstantSwapped => {
                self.encryption_constant()
            }
        };
        era.seed_from_stored(stored)
    }
}

/// Plain in-memory record
///
/// In the PID era the shiny predicate only reads the low PID half, so the
/// high half (and with it the face spots) is never touched by shiny changes.
/// Later eras use the full `tid ^ sid ^ hi ^ lo < 16` rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryRecord {
    /// Storage era
    pub era: FormatEra,
    /// Primary identifier
    pub pid: u32,
    /// Encryption constant
    pub encryption_constant: u32,
    /// Trainer identifiers
    pub ids: TrainerIds,
    /// National dex number
    pub species: u16,
    /// Form index
    pub form: u8,
    /// Nickname, if one was given
    pub nickname: Option<String>,
    /// Ability slot, `None` when unset or invalid for the species
    pub ability_slot: Option<u8>,
}

impl MemoryRecord {
    /// Empty record for `era` owned by `ids`
    pub const fn new(era: FormatEra, ids: TrainerIds) -> Self {
        Self {
            era,
            pid: 0,
            encryption_constant: 0,
            ids,
            species: SPOTTED_SPECIES,
            form: 0,
            nickname: None,
            ability_slot: None,
        }
    }

    /// `tid ^ sid ^ pid_high ^ pid_low`
    pub const fn shiny_xor(&self) -> u32 {
        (self.ids.tid ^ self.ids.sid) as u32 ^ (self.pid >> 16) ^ (self.pid & 0xFFFF)
    }

    /// `tid ^ sid ^ pid_low`, the part of the xor the PID era checks
    pub const fn low_xor(&self) -> u32 {
        (self.ids.tid ^ self.ids.sid) as u32 ^ (self.pid & 0xFFFF)
    }

    /// Shiny when the checked xor falls below this value
    pub const fn shiny_threshold(&self) -> u32 {
        match self.era {
            FormatEra::Pid => 8,
            FormatEra::EncryptionConstant | FormatEra::EncryptionConstantSwapped => 16,
        }
    }
}

impl CreatureRecord for MemoryRecord {
    fn era(&self) -> FormatEra {
        self.era
    }

    fn pid(&self) -> u32 {
        self.pid
    }

    fn set_pid(&mut self, pid: u32) {
        self.pid = pid;
    }

    fn encryption_constant(&self) -> u32 {
        self.encryption_constant
    }

    fn set_encryption_constant(&mut self, value: u32) {
        self.encryption_constant = value;
    }

    fn trainer_ids(&self) -> TrainerIds {
        self.ids
    }

    fn is_shiny(&self) -> bool {
        let xor = match self.era {
            FormatEra::Pid => self.low_xor(),
            FormatEra::EncryptionConstant | FormatEra::EncryptionConstantSwapped => {
                self.shiny_xor()
            }
        };
        xor < self.shiny_threshold()
    }

    fn set_shiny(&mut self) {
        self.pid = match self.era {
            // Same bits the constrained randomizer writes
            FormatEra::Pid => constrain(self.pid, self.ids).value(),
            FormatEra::EncryptionConstant | FormatEra::EncryptionConstantSwapped => {
                let low = self.pid & 0xFFFF;
                let high = (self.ids.tid ^ self.ids.sid) as u32 ^ low;
                (high << 16) | low
            }
        };
    }

    fn set_unshiny(&mut self) {
        if !self.is_shiny() {
            return;
        }
        // Bit 3 moves the low xor to 8 or more; bit 28 moves the full xor to 4096 or more
        self.pid ^= match self.era {
            FormatEra::Pid => 0x0000_0008,
            FormatEra::EncryptionConstant | FormatEra::EncryptionConstantSwapped => 0x1000_0000,
        };
    }

    fn normalize_species(&mut self) {
        if self.species != SPOTTED_SPECIES {
            self.species = SPOTTED_SPECIES;
            self.form = 0;
        }
    }

    fn clear_nickname(&mut self) {
        self.nickname = None;
    }

    fn ability_is_valid(&self) -> bool {
        self.ability_slot.is_some_and(|slot| slot <= 1)
    }

    fn refresh_ability(&mut self, slot: u8) {
        self.ability_slot = Some(slot & 1);
    }
}
