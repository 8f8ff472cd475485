//! Maze symbol files: one line per grid row, one hex digit per room

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::Context;
use log::{debug, warn};

use crate::codec;
use crate::error::MazeError;
use crate::grid::{Grid, Room};

/// Parse a grid of the given size from symbol text
///
/// Hex digits may be in either case. Trailing whitespace on a line and
/// trailing blank lines are ignored.
///
/// # Examples
/// ```
/// use hexmaze::symbol_file::parse_grid;
///
/// let grid = parse_grid("7b\n", 1, 2).unwrap();
/// assert_eq!(grid.to_string(), "7b\n");
/// ```
pub fn parse_grid(text: &str, rows: usize, cols: usize) -> Result<Grid, MazeError> {
    let mut lines: Vec<&str> = text.lines().map(str::trim_end).collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    if lines.len() != rows {
        return Err(MazeError::RowCount {
            expected: rows,
            found: lines.len(),
        });
    }

    let mut rooms = Vec::with_capacity(rows * cols);
    for (row, line) in lines.iter().enumerate() {
        let found = line.chars().count();
        if found != cols {
            return Err(MazeError::RowLength {
                row,
                expected: cols,
                found,
            });
        }
        for (col, ch) in line.chars().enumerate() {
            let symbol =
                codec::from_hex_digit(ch).ok_or(MazeError::NotHexDigit { ch, row, col })?;
            rooms.push(Room::from_symbol(symbol)?);
        }
    }

    let grid = Grid::from_rooms(rows, cols, rooms)?;
    if let Some((a, b)) = grid.asymmetric_pair() {
        warn!("Input maze is not symmetric: {}", MazeError::Asymmetric(a, b));
    }
    Ok(grid)
}

/// Read a grid from a reader
pub fn read_grid<R: Read>(mut reader: R, rows: usize, cols: usize) -> anyhow::Result<Grid> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    Ok(parse_grid(&buf, rows, cols)?)
}

/// Write a grid as lowercase hex lines
pub fn write_grid<W: Write>(mut writer: W, grid: &Grid) -> io::Result<()> {
    write!(writer, "{}", grid)?;
    writer.flush()
}

/// Load a grid from `path`, or from stdin when the path is `-`
pub fn load(path: &Path, rows: usize, cols: usize) -> anyhow::Result<Grid> {
    debug!("Reading {}x{} maze from {}", rows, cols, path.display());
    if path.to_str() == Some("-") {
        read_grid(io::stdin().lock(), rows, cols).context("Could not read maze from stdin")
    } else {
        let file = fs::File::open(path)
            .with_context(|| format!("Could not open maze file {}", path.display()))?;
        read_grid(file, rows, cols)
            .with_context(|| format!("Could not read maze file {}", path.display()))
    }
}

/// Save a grid to `path`, or to stdout when the path is `-`
pub fn save(path: &Path, grid: &Grid) -> anyhow::Result<()> {
    debug!("Writing maze to {}", path.display());
    if path.to_str() == Some("-") {
        write_grid(io::stdout().lock(), grid)?;
    } else {
        let file = fs::File::create(path)
            .with_context(|| format!("Could not create maze file {}", path.display()))?;
        write_grid(io::BufWriter::new(file), grid)
            .with_context(|| format!("Could not write maze file {}", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::error::MazeError;
    use crate::grid::{Direction, Point};
    use crate::symbol_file::{parse_grid, read_grid, write_grid};

    #[test]
    fn parse_single_room() {
        let grid = parse_grid("f\n", 1, 1).unwrap();
        let room = grid.room(Point::new(0, 0));
        assert!(Direction::ALL.into_iter().all(|dir| !room.is_open(dir)));
    }

    #[test]
    fn tolerates_trailing_whitespace_and_case() {
        let grid = parse_grid("79  \r\n7A\n\n\n", 2, 2).unwrap();
        assert!(grid.is_spanning_tree());
    }

    #[test]
    fn rejects_wrong_shape() {
        assert_eq!(
            parse_grid("79\n", 2, 2),
            Err(MazeError::RowCount {
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            parse_grid("79\n7", 2, 2),
            Err(MazeError::RowLength {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert!(parse_grid("79\n7a\n79", 2, 2).is_err());
        assert!(parse_grid("f\nf", 2, 0).is_err());
    }

    #[test]
    fn rejects_non_hex_characters() {
        assert_eq!(
            parse_grid("7g", 1, 2),
            Err(MazeError::NotHexDigit {
                ch: 'g',
                row: 0,
                col: 1
            })
        );
    }

    #[test]
    fn read_and_write_through_buffers() {
        let grid = read_grid("79\n7a\n".as_bytes(), 2, 2).unwrap();
        let mut out = Vec::new();
        write_grid(&mut out, &grid).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "79\n7a\n");
    }
}
