//! Depth-first maze solving

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;
use log::debug;

use crate::error::MazeError;
use crate::grid::{Direction, Grid, Point};

/// How the search ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Goal reached
    Found,
    /// Every branch from the start dead-ended
    Exhausted,
}

/// What the path file contains
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PathMode {
    /// Every room visited, in order, including re-visits while backtracking
    Full,
    /// Only the rooms from start to goal
    #[default]
    Pruned,
}

/// A room on the search stack and the next direction it will try
struct Frame {
    index: usize,
    next: usize,
}

/// Result of a depth-first search
#[derive(Clone, Debug)]
pub struct Search {
    pub start: Point,
    pub goal: Point,
    pub outcome: Outcome,
    /// Rooms in visiting order; a room reappears each time a branch below it dead-ends
    pub trace: Vec<Point>,
    /// Room each room was entered from, by linear index
    parents: Vec<Option<usize>>,
    cols: usize,
}

impl Search {
    pub fn is_found(&self) -> bool {
        self.outcome == Outcome::Found
    }

    /// Rooms from start to goal, both included
    ///
    /// Returns `None`, if the goal was not reached.
    pub fn path(&self) -> Option<Vec<Point>> {
        if !self.is_found() {
            return None;
        }
        let index = |p: Point| p.row * self.cols + p.col;
        let start = index(self.start);
        let mut current = index(self.goal);
        let mut path = vec![self.goal];
        while current != start {
            current = self.parents[current]?;
            path.push(Point::new(current / self.cols, current % self.cols));
        }
        path.reverse();
        Some(path)
    }
}

/// Check start and goal coordinates against the grid size
///
/// Rows are checked before columns and the start before the goal, so the
/// first offending coordinate is the one reported.
///
/// # Examples
/// ```
/// use hexmaze::grid::Point;
/// use hexmaze::solver::validate_endpoints;
///
/// let (start, goal) = validate_endpoints(3, 4, (0, 0), (2, 3)).unwrap();
/// assert_eq!(goal, Point::new(2, 3));
/// assert!(validate_endpoints(3, 4, (3, 0), (0, 0)).is_err());
/// ```
pub fn validate_endpoints(
    rows: usize,
    cols: usize,
    start: (i64, i64),
    goal: (i64, i64),
) -> Result<(Point, Point), MazeError> {
    let checks = [
        ("Starting row", start.0, rows),
        ("Starting column", start.1, cols),
        ("Goal row", goal.0, rows),
        ("Goal column", goal.1, cols),
    ];
    for (what, value, limit) in checks {
        if value >= 0 && value as u64 >= limit as u64 {
            return Err(MazeError::OutOfRange { what, value, limit });
        }
    }
    if checks.iter().any(|(_, value, _)| *value < 0) {
        return Err(MazeError::NegativeIndex);
    }
    Ok((
        Point::new(start.0 as usize, start.1 as usize),
        Point::new(goal.0 as usize, goal.1 as usize),
    ))
}

/// Search for a path from `start` to `goal` with depth-first search
///
/// Directions are tried in North, South, West, East order, following only
/// open walls, and no room is entered twice. The first path found is
/// returned, which is not necessarily the shortest.
///
/// Returns error, if start or goal lies outside the grid.
pub fn solve(grid: &Grid, start: Point, goal: Point) -> Result<Search, MazeError> {
    let endpoints = [
        (start, "Starting row", "Starting column"),
        (goal, "Goal row", "Goal column"),
    ];
    for (point, row_what, col_what) in endpoints {
        if grid.contains(point) {
            continue;
        }
        return Err(if point.row >= grid.rows() {
            MazeError::OutOfRange {
                what: row_what,
                value: point.row as i64,
                limit: grid.rows(),
            }
        } else {
            MazeError::OutOfRange {
                what: col_what,
                value: point.col as i64,
                limit: grid.cols(),
            }
        });
    }

    let mut visited = vec![false; grid.len()];
    let mut parents = vec![None; grid.len()];
    let mut trace = vec![start];
    let mut outcome = Outcome::Exhausted;

    if start == goal {
        outcome = Outcome::Found;
    } else {
        let goal_index = grid.index(goal);
        visited[grid.index(start)] = true;
        let mut stack = vec![Frame {
            index: grid.index(start),
            next: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let Some(&dir) = Direction::ALL.get(frame.next) else {
                stack.pop();
                if let Some(parent) = stack.last() {
                    trace.push(grid.point(parent.index));
                }
                continue;
            };
            frame.next += 1;
            let index = frame.index;

            if !grid.room(grid.point(index)).is_open(dir) {
                continue;
            }
            let Some(neighbor) = grid.neighbor(grid.point(index), dir) else {
                continue;
            };
            let n_index = grid.index(neighbor);
            if visited[n_index] {
                continue;
            }

            parents[n_index] = Some(index);
            trace.push(neighbor);
            if n_index == goal_index {
                outcome = Outcome::Found;
                break;
            }
            visited[n_index] = true;
            stack.push(Frame {
                index: n_index,
                next: 0,
            });
        }
    }

    debug!(
        "Search from ({}) to ({}): {:?} after {} steps",
        start,
        goal,
        outcome,
        trace.len()
    );
    Ok(Search {
        start,
        goal,
        outcome,
        trace,
        parents,
        cols: grid.cols(),
    })
}

/// Write a search result in path file format
///
/// Full mode writes a `FULL` line and the whole trace. Pruned mode writes a
/// `PRUNED` line and the start-to-goal path, which is empty when the goal was
/// not reached.
pub fn write_path<W: Write>(mut writer: W, search: &Search, mode: PathMode) -> io::Result<()> {
    match mode {
        PathMode::Full => {
            writeln!(writer, "FULL")?;
            for point in &search.trace {
                writeln!(writer, "{}", point)?;
            }
        }
        PathMode::Pruned => {
            writeln!(writer, "PRUNED")?;
            for point in search.path().unwrap_or_default() {
                writeln!(writer, "{}", point)?;
            }
        }
    }
    writer.flush()
}

/// Save a search result to `path`, or to stdout when the path is `-`
pub fn save_path(path: &Path, search: &Search, mode: PathMode) -> anyhow::Result<()> {
    debug!("Writing {:?} path to {}", mode, path.display());
    if path.to_str() == Some("-") {
        write_path(io::stdout().lock(), search, mode)?;
    } else {
        let file = fs::File::create(path)
            .with_context(|| format!("Could not create path file {}", path.display()))?;
        write_path(io::BufWriter::new(file), search, mode)
            .with_context(|| format!("Could not write path file {}", path.display()))?;
    }
    Ok(())
}
