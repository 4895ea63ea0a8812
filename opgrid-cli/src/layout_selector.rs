//! Defines the type for selecting how matches are printed.
use std::io::Write;

use clap::ValueEnum;
use opgrid::filter::OpcodeFilter;
use opgrid::grid::{Grid, GridError, GridStats};

/// Clap arg enum for selecting the output layout.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum LayoutSelector {
    /// Print the whole opcode table as a 16x16 grid with non-matches blanked out.
    #[default]
    Grid,
    /// Print only the matching opcodes, one per line.
    List,
}

impl LayoutSelector {
    /// Write the given grid to `dest` using this layout.
    pub fn write<F: OpcodeFilter>(
        self,
        grid: &Grid<F>,
        dest: impl Write,
    ) -> Result<GridStats, GridError> {
        match self {
            LayoutSelector::Grid => grid.write_to(dest),
            LayoutSelector::List => grid.write_list(dest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layouts_pick_writer() {
        let grid: Grid = Grid::default();

        let mut out = Vec::new();
        LayoutSelector::Grid.write(&grid, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), grid.to_string());

        let mut out = Vec::new();
        let stats = LayoutSelector::List.write(&grid, &mut out).unwrap();
        assert_eq!(stats.lines, 7);
        assert!(String::from_utf8(out).unwrap().starts_with("46\n4e\n"));
    }
}
