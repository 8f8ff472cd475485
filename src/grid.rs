//! Rectangular grid of rooms and the walls between them

use std::fmt;

use itertools::Itertools;

use crate::codec;
use crate::error::MazeError;

/// One of the four compass directions leading out of a room
///
/// The discriminant is the slot of the direction in [Room::connections].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North = 0,
    South = 1,
    West = 2,
    East = 3,
}

impl Direction {
    /// All directions, in connection slot order
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Slot of this direction in a connection array
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Row and column offset of the neighbor in this direction
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
        }
    }

    /// Direction that leads back from the neighbor
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }
}

/// State of one side of a room
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Wall {
    /// Passable
    Open,
    /// Blocked
    #[default]
    Closed,
}

/// Location of a room in the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Formats as `row, col`, the line format of path files
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.row, self.col)
    }
}

/// A single cell of the maze
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Room {
    /// Wall state per direction, indexed by [Direction::index]
    pub connections: [Wall; 4],
}

impl Room {
    /// Room with every side closed
    pub const SEALED: Room = Room {
        connections: [Wall::Closed; 4],
    };

    pub fn wall(&self, dir: Direction) -> Wall {
        self.connections[dir.index()]
    }

    pub fn set_wall(&mut self, dir: Direction, wall: Wall) {
        self.connections[dir.index()] = wall;
    }

    pub fn is_open(&self, dir: Direction) -> bool {
        self.wall(dir) == Wall::Open
    }

    /// Encoded 4-bit wall state of the room
    pub fn symbol(&self) -> u8 {
        codec::encode(&self.connections)
    }

    /// Rebuild a room from its encoded wall state
    pub fn from_symbol(symbol: u32) -> Result<Self, MazeError> {
        Ok(Room {
            connections: codec::decode(symbol)?,
        })
    }
}

/// Fixed-size grid of rooms, stored row by row
///
/// The dimensions are set on construction and never change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    rooms: Vec<Room>,
}

impl Grid {
    /// Create a grid where every room is sealed on all sides
    ///
    /// Returns error, if either dimension is zero or the room count does
    /// not fit in memory.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
        let count = rows
            .checked_mul(cols)
            .ok_or(MazeError::TooLarge { rows, cols })?;
        let mut rooms = Vec::new();
        rooms
            .try_reserve_exact(count)
            .map_err(|_| MazeError::TooLarge { rows, cols })?;
        rooms.resize(count, Room::SEALED);
        Self::from_rooms(rows, cols, rooms)
    }

    /// Create a grid from rooms listed row by row
    pub(crate) fn from_rooms(
        rows: usize,
        cols: usize,
        rooms: Vec<Room>,
    ) -> Result<Self, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::EmptyDimensions { rows, cols });
        }
        let expected = rows
            .checked_mul(cols)
            .ok_or(MazeError::TooLarge { rows, cols })?;
        if rooms.len() != expected {
            return Err(MazeError::RoomCount {
                expected,
                found: rooms.len(),
            });
        }
        Ok(Self { rows, cols, rooms })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of rooms
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Always false, grids have at least one room
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Whether the (possibly negative) position lies inside the grid
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        (0..self.rows as isize).contains(&row) && (0..self.cols as isize).contains(&col)
    }

    pub fn contains(&self, point: Point) -> bool {
        point.row < self.rows && point.col < self.cols
    }

    /// Adjacent position in `dir`, or `None` at the edge of the grid
    pub fn neighbor(&self, point: Point, dir: Direction) -> Option<Point> {
        let (dr, dc) = dir.offset();
        let row = point.row as isize + dr;
        let col = point.col as isize + dc;
        if self.in_bounds(row, col) {
            Some(Point::new(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Linear index of a point, row-major
    pub fn index(&self, point: Point) -> usize {
        point.row * self.cols + point.col
    }

    /// Point of a linear index
    pub fn point(&self, index: usize) -> Point {
        Point::new(index / self.cols, index % self.cols)
    }

    pub fn room(&self, point: Point) -> &Room {
        &self.rooms[self.index(point)]
    }

    pub fn room_mut(&mut self, point: Point) -> &mut Room {
        let index = self.index(point);
        &mut self.rooms[index]
    }

    /// All points, row by row
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.rows)
            .cartesian_product(0..self.cols)
            .map(|(row, col)| Point::new(row, col))
    }

    /// Neighbors reachable from `point` through an open wall, in [Direction::ALL] order
    pub fn passages(&self, point: Point) -> impl Iterator<Item = Point> + '_ {
        let room = *self.room(point);
        Direction::ALL
            .into_iter()
            .filter(move |dir| room.is_open(*dir))
            .filter_map(move |dir| self.neighbor(point, dir))
    }

    /// Number of open connections between rooms, each counted once
    pub fn open_edges(&self) -> usize {
        self.points()
            .map(|p| {
                [Direction::South, Direction::East]
                    .into_iter()
                    .filter(|dir| {
                        self.room(p).is_open(*dir) && self.neighbor(p, *dir).is_some()
                    })
                    .count()
            })
            .sum()
    }

    /// First pair of adjacent rooms whose shared walls disagree
    pub fn asymmetric_pair(&self) -> Option<(Point, Point)> {
        self.points().find_map(|p| {
            Direction::ALL.into_iter().find_map(|dir| {
                let n = self.neighbor(p, dir)?;
                if self.room(p).wall(dir) != self.room(n).wall(dir.opposite()) {
                    Some((p, n))
                } else {
                    None
                }
            })
        })
    }

    pub fn is_symmetric(&self) -> bool {
        self.asymmetric_pair().is_none()
    }

    /// Whether every wall facing out of the grid is closed
    pub fn is_sealed(&self) -> bool {
        self.points().all(|p| {
            Direction::ALL
                .into_iter()
                .all(|dir| self.neighbor(p, dir).is_some() || !self.room(p).is_open(dir))
        })
    }

    /// Whether the open connections form a spanning tree over all rooms
    pub fn is_spanning_tree(&self) -> bool {
        if !self.is_symmetric() || self.open_edges() != self.len() - 1 {
            return false;
        }
        let mut seen = vec![false; self.len()];
        let mut stack = vec![Point::new(0, 0)];
        seen[0] = true;
        let mut reached = 1;
        while let Some(p) = stack.pop() {
            for n in self.passages(p) {
                let i = self.index(n);
                if !seen[i] {
                    seen[i] = true;
                    reached += 1;
                    stack.push(n);
                }
            }
        }
        reached == self.len()
    }
}

/// Formats the grid as lines of lowercase hex symbols
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rooms.chunks(self.cols) {
            let line: String = row
                .iter()
                .map(|room| codec::to_hex_digit(room.symbol()))
                .collect::<Result<_, _>>()
                .map_err(|_| fmt::Error)?;
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
