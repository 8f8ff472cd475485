//! Maze generation

use log::debug;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::error::MazeError;
use crate::grid::{Direction, Grid, Wall};

/// Walls of one room while carving; `None` is not decided yet
type PendingWalls = [Option<Wall>; 4];

/// A room on the carving stack, with the directions it has left to try
struct Frame {
    index: usize,
    directions: [Direction; 4],
    next: usize,
}

/// Perfect maze generator
///
/// The random source is owned by the generator, so a seeded generator
/// always produces the same sequence of mazes.
pub struct MazeGenerator<R = StdRng> {
    random: R,
}

impl MazeGenerator<StdRng> {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }
}

impl<R: Rng> MazeGenerator<R> {
    /// Use an existing random source
    pub fn from_rng(random: R) -> Self {
        Self { random }
    }

    /// Generate a perfect maze (every pair of rooms joined by exactly one path)
    ///
    /// Carving starts from the room at (0, 0). The finished grid is checked
    /// before it is returned: every room must have been visited, every wall
    /// decided, and both sides of every wall must agree. Any failure there is
    /// a defect in the carving, reported as an error.
    ///
    /// # Examples
    /// ```
    /// use hexmaze::maze_generator::MazeGenerator;
    ///
    /// let mut gen = MazeGenerator::new(Some(0));
    /// let grid = gen.generate_maze(4, 6).unwrap();
    /// assert!(grid.is_spanning_tree());
    /// ```
    pub fn generate_maze(&mut self, rows: usize, cols: usize) -> Result<Grid, MazeError> {
        let mut grid = Grid::new(rows, cols)?;
        let mut walls: Vec<PendingWalls> = vec![[None; 4]; grid.len()];
        let mut visited = vec![false; grid.len()];

        self.carve(&grid, &mut walls, &mut visited);

        for point in grid.points().collect::<Vec<_>>() {
            let index = grid.index(point);
            if !visited[index] {
                return Err(MazeError::Unvisited(point));
            }
            for dir in Direction::ALL {
                let wall = walls[index][dir.index()].ok_or(MazeError::Undecided(point))?;
                grid.room_mut(point).set_wall(dir, wall);
            }
        }
        if let Some((a, b)) = grid.asymmetric_pair() {
            return Err(MazeError::Asymmetric(a, b));
        }

        debug!(
            "Carved {}x{} maze with {} passages",
            rows,
            cols,
            grid.open_edges()
        );
        Ok(grid)
    }

    /// The four directions in uniformly random order
    fn shuffled_directions(&mut self) -> [Direction; 4] {
        let mut directions = Direction::ALL;
        directions.shuffle(&mut self.random);
        directions
    }

    /// Randomized depth-first carving ("drunken walk") from room 0
    ///
    /// Each room tries its directions in random order. The grid edge is
    /// sealed, an unvisited neighbor gets an open wall and is carved next,
    /// and a visited neighbor dictates the wall: its own side if decided,
    /// closed otherwise.
    fn carve(&mut self, grid: &Grid, walls: &mut [PendingWalls], visited: &mut [bool]) {
        visited[0] = true;
        let mut stack = vec![Frame {
            index: 0,
            directions: self.shuffled_directions(),
            next: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let Some(&dir) = frame.directions.get(frame.next) else {
                stack.pop();
                continue;
            };
            frame.next += 1;
            let index = frame.index;

            let wall = match grid.neighbor(grid.point(index), dir) {
                None => Wall::Closed,
                Some(neighbor) => {
                    let n_index = grid.index(neighbor);
                    if visited[n_index] {
                        walls[n_index][dir.opposite().index()].unwrap_or(Wall::Closed)
                    } else {
                        visited[n_index] = true;
                        walls[index][dir.index()] = Some(Wall::Open);
                        stack.push(Frame {
                            index: n_index,
                            directions: self.shuffled_directions(),
                            next: 0,
                        });
                        continue;
                    }
                }
            };
            walls[index][dir.index()] = Some(wall);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::{rngs::StdRng, SeedableRng};

    use crate::error::MazeError;
    use crate::grid::{Direction, Point};
    use crate::maze_generator::MazeGenerator;
    use crate::symbol_file::parse_grid;

    #[test]
    fn generated_mazes_are_spanning_trees() {
        for seed in 0..5 {
            let mut gen = MazeGenerator::new(Some(seed));
            for rows in 1..=8 {
                for cols in 1..=8 {
                    let grid = gen.generate_maze(rows, cols).unwrap();
                    assert!(grid.is_symmetric(), "{}x{} seed {}", rows, cols, seed);
                    assert!(grid.is_sealed(), "{}x{} seed {}", rows, cols, seed);
                    assert_eq!(grid.open_edges(), rows * cols - 1);
                    assert!(grid.is_spanning_tree(), "{}x{} seed {}", rows, cols, seed);
                }
            }
        }
    }

    #[test]
    fn single_room_is_sealed() {
        let grid = MazeGenerator::new(Some(1)).generate_maze(1, 1).unwrap();
        assert_eq!(grid.to_string(), "f\n");
    }

    #[test]
    fn corridors_have_one_possible_layout() {
        let mut gen = MazeGenerator::new(None);
        assert_eq!(gen.generate_maze(1, 2).unwrap().to_string(), "7b\n");
        assert_eq!(gen.generate_maze(2, 1).unwrap().to_string(), "d\ne\n");
        assert_eq!(gen.generate_maze(1, 4).unwrap().to_string(), "733b\n");
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let mut gen = MazeGenerator::new(Some(0));
        assert!(gen.generate_maze(0, 5).is_err());
        assert!(gen.generate_maze(5, 0).is_err());
    }

    #[test]
    fn oversized_dimensions_are_an_error() {
        let mut gen = MazeGenerator::new(Some(0));
        assert!(matches!(
            gen.generate_maze(usize::MAX / 2, 3),
            Err(MazeError::TooLarge { .. })
        ));
        assert!(gen.generate_maze(usize::MAX, 2).is_err());
    }

    #[test]
    fn same_seed_same_maze() {
        let a = MazeGenerator::new(Some(42)).generate_maze(12, 9).unwrap();
        let b = MazeGenerator::from_rng(StdRng::seed_from_u64(42))
            .generate_maze(12, 9)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn large_maze_does_not_exhaust_the_call_stack() {
        let grid = MazeGenerator::new(Some(3)).generate_maze(400, 400).unwrap();
        assert!(grid.is_spanning_tree());
    }

    #[test]
    fn generated_maze_is_parseable() {
        let mut gen = MazeGenerator::new(Some(0));
        let grid = gen.generate_maze(15, 15).unwrap();

        let parsed = parse_grid(&grid.to_string(), 15, 15).unwrap();
        assert_eq!(parsed, grid);
    }

    #[test]
    fn shuffle_produces_every_order() {
        let mut gen = MazeGenerator::from_rng(StdRng::seed_from_u64(7));
        let mut counts: HashMap<[Direction; 4], usize> = HashMap::new();
        for _ in 0..2400 {
            *counts.entry(gen.shuffled_directions()).or_default() += 1;
        }
        assert_eq!(counts.len(), 24);
        assert!(counts.values().all(|&n| n > 50), "{:?}", counts);
    }

    #[test]
    fn start_room_has_a_passage() {
        let grid = MazeGenerator::new(Some(9)).generate_maze(3, 3).unwrap();
        assert!(grid.passages(Point::new(0, 0)).count() >= 1);
    }
}
