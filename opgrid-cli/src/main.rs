use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, error, info};
use opgrid::grid::{Grid, GridError};
use thiserror::Error;

use crate::layout_selector::LayoutSelector;

mod layout_selector;

/// Prints the gameboy opcode table with the `LD r8,(HL)` loads marked.
#[derive(Parser, Debug)]
struct Args {
    /// File to write the output to. Defaults to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Choose how the matching opcodes are printed.
    #[arg(long, value_enum, default_value_t)]
    layout: LayoutSelector,
}

/// Errors that end the run early.
#[derive(Debug, Error)]
enum RunError {
    #[error("Unable to create output file {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Grid(#[from] GridError),
}

impl RunError {
    fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Grid(err) if err.is_broken_pipe())
    }
}

fn run(args: &Args) -> Result<(), RunError> {
    let grid: Grid = Grid::default();
    let stats = match args.output {
        Some(ref path) => {
            let file = File::create(path).map_err(|source| RunError::Open {
                path: path.clone(),
                source,
            })?;
            info!("Writing to {}", path.display());
            args.layout.write(&grid, BufWriter::new(file))?
        }
        None => args.layout.write(&grid, BufWriter::new(io::stdout().lock()))?,
    };
    debug!(
        "Printed {} lines, {} opcodes matched",
        stats.lines, stats.matched
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    info!("opcode-grid");
    let args = Args::parse();
    debug!("{:?}", args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        // Whoever was reading (`head`, a pager) has what they wanted.
        Err(err) if err.is_broken_pipe() => {
            debug!("Output closed early: {}", err);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
