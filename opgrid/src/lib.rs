//! Finds gameboy opcodes by their bit pattern.
//!
//! The [`opcode`] module splits a raw opcode byte into the nibbles that place it in the
//! opcode table. The [`filter`] module supplies [`LoadFromHl`][filter::LoadFromHl], which
//! picks out the `LD r8,(HL)` loads, and the [`grid`] module prints the whole table with
//! the matching opcodes marked:
//!
//! ```
//! use opgrid::grid::Grid;
//!
//! let grid: Grid = Grid::default();
//! let text = grid.to_string();
//! assert_eq!(text.lines().count(), 16);
//! assert!(text.lines().nth(4).unwrap().contains("4e"));
//! ```

pub mod bits;
pub mod filter;
pub mod grid;
pub mod opcode;
