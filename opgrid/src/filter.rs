//! The predicate that decides which opcodes are marked in the grid.

use crate::opcode::Opcode;

/// The `HALT` opcode. It occupies the slot `LD (HL),(HL)` would have in the load block.
pub const HALT: Opcode = Opcode(0x76);

/// Something that can pick opcodes out of the opcode table.
pub trait OpcodeFilter {
    /// Returns true if the opcode should be marked.
    fn matches(&self, opcode: Opcode) -> bool;
}

impl<F> OpcodeFilter for F
where
    F: Fn(Opcode) -> bool,
{
    #[inline]
    fn matches(&self, opcode: Opcode) -> bool {
        self(opcode)
    }
}

/// Matches the `LD r8,(HL)` loads: rows 0x4-0x7, columns 0x6 and 0xE, without `HALT`.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
pub struct LoadFromHl;

impl OpcodeFilter for LoadFromHl {
    fn matches(&self, opcode: Opcode) -> bool {
        let [low, high] = opcode.nibbles();
        (0x4..=0x7).contains(&high) && low % 8 == 0x6 && opcode != HALT
    }
}
