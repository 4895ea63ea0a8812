//! Lays the opcode table out as a 16x16 grid, marking the opcodes a filter matches.
//!
//! Each opcode becomes one token: its two lowercase hex digits if it matches, or
//! [`PLACEHOLDER`] if it doesn't. Every token is followed by a single space, and each row
//! of sixteen ends with a newline, so a row looks like:
//!
//! ```text
//! .. .. .. .. .. .. 46 .. .. .. .. .. .. .. 4e ..
//! ```

use std::fmt;
use std::io::{self, Write};

use log::{debug, trace};
use thiserror::Error;

use crate::filter::{LoadFromHl, OpcodeFilter};
use crate::opcode::Opcode;

/// Token printed for opcodes the filter does not match.
pub const PLACEHOLDER: &str = "..";

/// One token of the grid.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Cell {
    /// The opcode matched and is printed as hex.
    Match(Opcode),
    /// The opcode did not match.
    Blank,
}

impl Cell {
    /// Build the cell for the given opcode by checking it against `filter`.
    pub fn for_opcode(opcode: Opcode, filter: &impl OpcodeFilter) -> Self {
        if filter.matches(opcode) {
            Self::Match(opcode)
        } else {
            Self::Blank
        }
    }

    /// Returns true if this is a [`Cell::Match`].
    pub fn is_match(self) -> bool {
        matches!(self, Self::Match(_))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::Match(opcode) => fmt::Display::fmt(&opcode, f),
            Self::Blank => f.write_str(PLACEHOLDER),
        }
    }
}

/// Error produced when the grid can't be written out.
#[derive(Debug, Error)]
pub enum GridError {
    /// Writing to or flushing the destination failed.
    #[error("Error while writing opcode grid: {0}")]
    Write(#[from] io::Error),
}

impl GridError {
    /// Returns true if the reader on the other end went away, e.g. when piped into `head`.
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            Self::Write(err) => err.kind() == io::ErrorKind::BrokenPipe,
        }
    }
}

/// Summary of what was written by [`Grid::write_to`] or [`Grid::write_list`].
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
pub struct GridStats {
    /// Number of opcodes the filter matched.
    pub matched: usize,
    /// Number of lines written.
    pub lines: usize,
}

/// The opcode table viewed through a filter.
#[derive(Debug, Clone)]
pub struct Grid<F = LoadFromHl> {
    filter: F,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(LoadFromHl)
    }
}

impl<F: OpcodeFilter> Grid<F> {
    /// Create a grid which marks the opcodes matched by `filter`.
    pub fn new(filter: F) -> Self {
        Self { filter }
    }

    /// Get the filter used by this grid.
    pub fn filter(&self) -> &F {
        &self.filter
    }

    /// Iterates over every opcode in table order along with its cell.
    pub fn cells(&self) -> impl Iterator<Item = (Opcode, Cell)> + '_ {
        Opcode::all().map(move |opcode| (opcode, Cell::for_opcode(opcode, &self.filter)))
    }

    /// Iterates over only the opcodes that match.
    pub fn matches(&self) -> impl Iterator<Item = Opcode> + '_ {
        Opcode::all().filter(move |&opcode| self.filter.matches(opcode))
    }

    /// Write the full grid to `dest` and flush it.
    pub fn write_to(&self, mut dest: impl Write) -> Result<GridStats, GridError> {
        let mut stats = GridStats::default();
        for (opcode, cell) in self.cells() {
            if cell.is_match() {
                trace!("Matched {}", opcode);
                stats.matched += 1;
            }
            write!(dest, "{} ", cell)?;
            if opcode.ends_row() {
                writeln!(dest)?;
                stats.lines += 1;
            }
        }
        dest.flush()?;
        debug!(
            "Wrote {} rows with {} matching opcodes",
            stats.lines, stats.matched
        );
        Ok(stats)
    }

    /// Write only the matching opcodes to `dest`, one per line, and flush it.
    pub fn write_list(&self, mut dest: impl Write) -> Result<GridStats, GridError> {
        let mut stats = GridStats::default();
        for opcode in self.matches() {
            writeln!(dest, "{}", opcode)?;
            stats.matched += 1;
            stats.lines += 1;
        }
        dest.flush()?;
        debug!("Listed {} matching opcodes", stats.matched);
        Ok(stats)
    }
}

impl<F: OpcodeFilter> fmt::Display for Grid<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (opcode, cell) in self.cells() {
            write!(f, "{} ", cell)?;
            if opcode.ends_row() {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}
