//! CLI for maze solving

use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use hexmaze::cli::{init_logging, parse_args};
use hexmaze::render::render;
use hexmaze::solver::{save_path, solve, validate_endpoints, PathMode};
use hexmaze::{symbol_file, MazeError};
use log::{info, warn};

/// Find a path through a maze stored as hex symbols, using depth-first search
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, allow_negative_numbers = true)]
struct Args {
    /// File, where to read the maze. Use `-` for stdin.
    maze_file: PathBuf,

    /// Number of rows in the maze
    rows: usize,

    /// Number of columns in the maze
    cols: usize,

    /// File, where to write the path. Use `-` for stdout.
    path_file: PathBuf,

    /// Row of the starting room
    start_row: i64,

    /// Column of the starting room
    start_col: i64,

    /// Row of the goal room
    goal_row: i64,

    /// Column of the goal room
    goal_col: i64,

    /// Write every visited room, including backtracking, instead of the pruned path
    #[arg(short, long)]
    full: bool,

    /// Draw the maze and the found path on stderr
    #[arg(short, long)]
    show: bool,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,
}

/// Read maze from file, write path
fn main() -> anyhow::Result<()> {
    let args: Args = parse_args();
    init_logging(args.verbose);

    if args.rows == 0 || args.cols == 0 {
        bail!(MazeError::EmptyDimensions {
            rows: args.rows,
            cols: args.cols
        });
    }
    let (start, goal) = validate_endpoints(
        args.rows,
        args.cols,
        (args.start_row, args.start_col),
        (args.goal_row, args.goal_col),
    )?;
    let mode = if args.full {
        PathMode::Full
    } else {
        PathMode::Pruned
    };

    let grid = symbol_file::load(&args.maze_file, args.rows, args.cols)?;
    let search = solve(&grid, start, goal)?;

    if search.is_found() {
        info!("Found a path from ({}) to ({})", start, goal);
    } else {
        warn!("No path from ({}) to ({})", start, goal);
        eprintln!("There are no valid solution branches");
    }
    save_path(&args.path_file, &search, mode)?;

    if args.show {
        eprintln!("{}", render(&grid, search.path().as_deref()));
    }
    Ok(())
}
