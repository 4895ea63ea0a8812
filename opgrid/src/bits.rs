//! Utilites for pulling groups of bits out of an opcode byte.

/// A group of bits within a byte. Provides utilities for extracting the selected bits.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(transparent)]
pub struct BitGroup(pub u8);

/// Bits 0-3 of a byte.
pub const LOW_NIBBLE: BitGroup = BitGroup(0x0F);

/// Bits 4-7 of a byte.
pub const HIGH_NIBBLE: BitGroup = BitGroup(0xF0);

impl BitGroup {
    /// Masks the given value down to just these bits without applying any shifting.
    #[inline]
    pub const fn filter(self, val: u8) -> u8 {
        val & self.0
    }

    /// Extract these bits from the given u8 value.
    ///
    /// The return value will be the input `val` masked to only the bits in this BitGroup
    /// and shifted over so the right-most bit of the group is in the 0th bit index.
    #[inline]
    pub const fn extract(self, val: u8) -> u8 {
        (val & self.0) >> self.0.trailing_zeros()
    }

    /// Number of distinct values this group can hold once extracted.
    #[inline]
    pub const fn span(self) -> u16 {
        1 << self.0.count_ones()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nibbles_split_byte() {
        assert_eq!(LOW_NIBBLE.extract(0x7E), 0xE);
        assert_eq!(HIGH_NIBBLE.extract(0x7E), 0x7);
        assert_eq!(HIGH_NIBBLE.filter(0x7E), 0x70);
        assert_eq!(LOW_NIBBLE.extract(0xFF), 0xF);
        assert_eq!(HIGH_NIBBLE.extract(0x0F), 0);
    }

    #[test]
    fn nibble_span_is_sixteen() {
        assert_eq!(LOW_NIBBLE.span(), 16);
        assert_eq!(HIGH_NIBBLE.span(), 16);
        assert_eq!(BitGroup(0b0011_1000).extract(0b0010_1000), 0b101);
    }
}
