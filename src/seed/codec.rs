//! Seed value, digit-pair decoding, byte order, and hex text

use crate::io::error::{Result, SpotError};
use std::fmt;

/// Number of spots encoded in a seed, one per byte
pub const SPOT_COUNT: usize = 4;

/// Opaque 32-bit value from which all spot geometry is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Seed(pub u32);

impl Seed {
    /// Raw value
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Seed bytes, most-significant first
    pub const fn bytes(self) -> [u8; SPOT_COUNT] {
        self.0.to_be_bytes()
    }

    /// Parse 1 to 8 hex digits, case-insensitive, ignoring surrounding whitespace
    ///
    /// # Errors
    ///
    /// Returns `SpotError::InvalidSeedText` if the trimmed text is empty,
    /// longer than 8 characters, or contains a non-hex character
    pub fn from_hex(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let well_formed = !trimmed.is_empty()
            && trimmed.len() <= 8
            && trimmed.chars().all(|c| c.is_ascii_hexdigit());

        if !well_formed {
            return Err(SpotError::InvalidSeedText {
                text: text.to_string(),
            });
        }

        u32::from_str_radix(trimmed, 16)
            .map(Self)
            .map_err(|_parse_error| SpotError::InvalidSeedText {
                text: text.to_string(),
            })
    }

    /// Eight uppercase hex digits
    pub fn to_hex(self) -> String {
        format!("{:08X}", self.0)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}", self.0)
    }
}

impl From<u32> for Seed {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Row and column digits (0-15) for one spot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitPair {
    /// High nibble, drives the vertical offset
    pub row: u8,
    /// Low nibble, drives the horizontal offset
    pub col: u8,
}

impl DigitPair {
    /// Split a byte into its nibbles
    pub const fn from_byte(byte: u8) -> Self {
        Self {
            row: (byte >> 4) & 0xF,
            col: byte & 0xF,
        }
    }

    /// Rebuild the byte this pair was decoded from
    pub const fn to_byte(self) -> u8 {
        ((self.row & 0xF) << 4) | (self.col & 0xF)
    }
}

/// Decode a seed into four digit pairs, most-significant byte first
pub fn decode(seed: Seed) -> [DigitPair; SPOT_COUNT] {
    seed.bytes().map(DigitPair::from_byte)
}

/// Recombine four digit pairs into the seed they came from
pub fn encode(pairs: [DigitPair; SPOT_COUNT]) -> Seed {
    Seed(u32::from_be_bytes(pairs.map(DigitPair::to_byte)))
}

/// Reverse all four bytes: `b0b1b2b3 -> b3b2b1b0`
pub const fn swap_bytes(value: u32) -> u32 {
    ((value & 0x0000_00FF) << 24)
        | ((value & 0x0000_FF00) << 8)
        | ((value & 0x00FF_0000) >> 8)
        | ((value & 0xFF00_0000) >> 24)
}
