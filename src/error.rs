//! Errors raised by the maze library

use crate::grid::Point;

/// Failure modes of building, decoding or validating a maze
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    #[error("num_rows and num_cols must be greater than 0 (got {rows}x{cols})")]
    EmptyDimensions { rows: usize, cols: usize },

    #[error("a {rows}x{cols} maze is too large")]
    TooLarge { rows: usize, cols: usize },

    #[error("expected {expected} rooms, found {found}")]
    RoomCount { expected: usize, found: usize },

    #[error("symbol {0} is outside the range 0..=15")]
    SymbolOutOfRange(u32),

    #[error("unexpected character `{ch}` at row={row}, col={col}")]
    NotHexDigit { ch: char, row: usize, col: usize },

    #[error("expected {expected} rows of symbols, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row} has {found} symbols, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("{what} must be within range (got {value}, limit {limit})")]
    OutOfRange {
        what: &'static str,
        value: i64,
        limit: usize,
    },

    #[error("Index on the maze cannot be negative")]
    NegativeIndex,

    #[error("the carving walk did not visit room ({0})")]
    Unvisited(Point),

    #[error("wall of room ({0}) was left undecided")]
    Undecided(Point),

    #[error("walls between ({0}) and ({1}) disagree")]
    Asymmetric(Point, Point),
}
