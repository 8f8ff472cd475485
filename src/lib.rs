//! Generate perfect mazes, store them as hex symbols and solve them
//!
//! A maze is a grid of rooms. Every room has four walls (North, South,
//! West, East), each open or closed, and the open walls of a generated maze
//! form a spanning tree: there is exactly one path between any two rooms.
//!
//! The walls of one room pack into a single hex digit, where a closed East
//! wall is worth 8, West 4, South 2 and North 1. A maze file is one line of
//! digits per grid row.
//!
//! # Examples
//! ## Generate, store and solve
//! ```
//! use hexmaze::maze_generator::MazeGenerator;
//! use hexmaze::solver::{solve, write_path, PathMode};
//! use hexmaze::symbol_file::parse_grid;
//! use hexmaze::Point;
//!
//! let mut gen = MazeGenerator::new(Some(13));
//! let symbols = gen.generate_maze(5, 8).unwrap().to_string();
//!
//! let grid = parse_grid(&symbols, 5, 8).unwrap();
//! let search = solve(&grid, Point::new(0, 0), Point::new(4, 7)).unwrap();
//! assert!(search.is_found());
//!
//! let mut out = Vec::new();
//! write_path(&mut out, &search, PathMode::Pruned).unwrap();
//! assert!(out.starts_with(b"PRUNED\n0, 0\n"));
//! ```
//!
//! ## Read a stored maze
//! ```
//! use hexmaze::solver::solve;
//! use hexmaze::symbol_file::parse_grid;
//! use hexmaze::Point;
//!
//! // (0,0)-(0,1)-(0,2)
//! //                |
//! // (1,0)-(1,1)-(1,2)
//! let grid = parse_grid("739\n73a", 2, 3).unwrap();
//! assert!(grid.is_spanning_tree());
//!
//! let search = solve(&grid, Point::new(0, 0), Point::new(1, 0)).unwrap();
//! assert_eq!(search.path().unwrap().len(), 6);
//! ```

pub mod cli;
pub mod codec;
pub mod error;
pub mod grid;
#[cfg(feature = "mapgen")]
pub mod maze_generator;
pub mod render;
pub mod solver;
pub mod symbol_file;

pub use error::MazeError;
pub use grid::{Direction, Grid, Point, Room, Wall};
