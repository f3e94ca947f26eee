//! Save-format eras and how each stores the pattern seed

use crate::seed::codec::{Seed, swap_bytes};

/// Which record field holds the seed, and in what byte order
///
/// Resolved once per editing session and passed explicitly to every
/// operation that depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatEra {
    /// Seed is the primary identifier, which also decides the special flag
    Pid,
    /// Seed is the encryption constant, independent of the special flag
    EncryptionConstant,
    /// Encryption constant stored with its bytes reversed
    EncryptionConstantSwapped,
}

impl FormatEra {
    /// Whether the special flag is derived from the seed in this era
    pub const fn seed_gates_special(self) -> bool {
        matches!(self, Self::Pid)
    }

    /// Whether stored values are byte-reversed relative to the seed
    pub const fn is_swapped(self) -> bool {
        matches!(self, Self::EncryptionConstantSwapped)
    }

    /// Convert a stored field value into the seed used for layout
    pub const fn seed_from_stored(self, stored: u32) -> Seed {
        if self.is_swapped() {
            Seed(swap_bytes(stored))
        } else {
            Seed(stored)
        }
    }

    /// Convert a seed into the value written back to the record
    pub const fn stored_from_seed(self, seed: Seed) -> u32 {
        if self.is_swapped() {
            swap_bytes(seed.0)
        } else {
            seed.0
        }
    }

    /// Label for the record field the seed lives in
    pub const fn field_label(self) -> &'static str {
        match self {
            Self::Pid => "PID",
            Self::EncryptionConstant | Self::EncryptionConstantSwapped => "Encryption Constant",
        }
    }
}

/// Game titles whose records can be edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Game {
    /// Ruby, Sapphire, Emerald, FireRed, LeafGreen
    Gen3,
    /// Diamond, Pearl, Platinum, HeartGold, SoulSilver
    Gen4,
    /// Black, White, Black 2, White 2
    Gen5,
    /// X, Y, Omega Ruby, Alpha Sapphire
    Gen6,
    /// Sun, Moon, Ultra Sun, Ultra Moon
    Gen7,
    /// Let's Go Pikachu and Eevee
    LetsGo,
    /// Sword and Shield
    SwordShield,
    /// Brilliant Diamond and Shining Pearl
    Bdsp,
    /// Legends Arceus
    LegendsArceus,
    /// Scarlet and Violet
    ScarletViolet,
}

impl Game {
    /// Storage era for records from this title
    pub const fn era(self) -> FormatEra {
        match self {
            Self::Gen3 | Self::Gen4 => FormatEra::Pid,
            Self::Bdsp => FormatEra::EncryptionConstantSwapped,
            Self::Gen5
            | Self::Gen6
            | Self::Gen7
            | Self::LetsGo
            | Self::SwordShield
            | Self::LegendsArceus
            | Self::ScarletViolet => FormatEra::EncryptionConstant,
        }
    }

    /// Whether the spotted species exists in this title at all
    pub const fn has_spotted_species(self) -> bool {
        !matches!(
            self,
            Self::LetsGo | Self::LegendsArceus | Self::ScarletViolet
        )
    }
}
