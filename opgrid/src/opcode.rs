use std::fmt;

use crate::bits::{HIGH_NIBBLE, LOW_NIBBLE};

// Opcode References:
// - Decoding: www.z80.info/decoding.htm
// - GB Z80 Opcode Table: https://izik1.github.io/gbops/

/// Number of opcodes in each row of the opcode table.
pub const ROW_LEN: u16 = LOW_NIBBLE.span();

/// Number of rows in the opcode table.
pub const ROW_COUNT: u16 = HIGH_NIBBLE.span();

/// A single unprefixed opcode byte. Every u8 is a valid `Opcode`, so the whole encoding
/// space is 0x00..=0xFF.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Opcode(pub u8);

impl Opcode {
    /// Iterates over every opcode in ascending order, starting at 0x00 and ending at 0xFF.
    pub fn all() -> impl DoubleEndedIterator<Item = Opcode> + Clone {
        (0u8..=0xFF).map(Opcode)
    }

    /// Gets the raw byte of this opcode.
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Bits 0-3 of the opcode.
    #[inline]
    pub const fn low_nibble(self) -> u8 {
        LOW_NIBBLE.extract(self.0)
    }

    /// Bits 4-7 of the opcode, shifted down.
    #[inline]
    pub const fn high_nibble(self) -> u8 {
        HIGH_NIBBLE.extract(self.0)
    }

    /// Splits the opcode into `[low, high]` nibbles.
    #[inline]
    pub const fn nibbles(self) -> [u8; 2] {
        [self.low_nibble(), self.high_nibble()]
    }

    /// Row of the opcode table this opcode sits in.
    #[inline]
    pub const fn row(self) -> u8 {
        self.high_nibble()
    }

    /// Column of the opcode table this opcode sits in.
    #[inline]
    pub const fn column(self) -> u8 {
        self.low_nibble()
    }

    /// Returns true if a row break follows this opcode when laying out the table.
    ///
    /// The `!= 0` half can never be false for a u8, but it is part of the row-break rule
    /// the grid format was first written with, so it stays.
    #[inline]
    pub const fn ends_row(self) -> bool {
        let next = self.0 as u16 + 1;
        next % ROW_LEN == 0 && next != 0
    }
}

impl From<u8> for Opcode {
    fn from(raw: u8) -> Self {
        Self(raw)
    }
}

impl From<Opcode> for u8 {
    fn from(opcode: Opcode) -> Self {
        opcode.0
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02x}", self.0)
    }
}
