//! CLI for maze generation

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use hexmaze::cli::{init_logging, parse_args};
use hexmaze::maze_generator::MazeGenerator;
use hexmaze::render::render;
use hexmaze::{symbol_file, MazeError};
use log::info;

/// Generate a perfect maze and store it as hex symbols
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File, where to write the maze. Use `-` for stdout.
    output: PathBuf,

    /// Number of rows in the maze
    rows: usize,

    /// Number of columns in the maze
    cols: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Draw the generated maze on stderr
    #[arg(short, long)]
    show: bool,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,
}

/// Generate maze, write it to file
fn main() -> anyhow::Result<()> {
    let args: Args = parse_args();
    init_logging(args.verbose);

    if args.rows == 0 || args.cols == 0 {
        bail!(MazeError::EmptyDimensions {
            rows: args.rows,
            cols: args.cols
        });
    }

    let mut gen = MazeGenerator::new(args.seed);
    let grid = gen
        .generate_maze(args.rows, args.cols)
        .context("The drunken walk did not produce a valid maze")?;
    symbol_file::save(&args.output, &grid)?;
    info!(
        "Wrote {}x{} maze to {}",
        args.rows,
        args.cols,
        args.output.display()
    );

    if args.show {
        eprintln!("{}", render(&grid, None));
    }
    Ok(())
}
