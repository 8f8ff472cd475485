//! Text drawing of a maze

use std::collections::HashSet;

use itertools::Itertools;

use crate::grid::{Direction, Grid, Point};

const CORNER: &str = "+";
const H_WALL: &str = "---";
const H_OPEN: &str = "   ";
const V_WALL: &str = "|";
const V_OPEN: &str = " ";
const ROOM: &str = "   ";
const ON_PATH: &str = " * ";

/// Draw the maze with `+---+` walls, marking rooms of `path` with `*`
///
/// # Examples
/// ```
/// use hexmaze::render::render;
/// use hexmaze::symbol_file::parse_grid;
///
/// let grid = parse_grid("7b", 1, 2).unwrap();
/// assert_eq!(render(&grid, None), "+---+---+\n|       |\n+---+---+");
/// ```
pub fn render(grid: &Grid, path: Option<&[Point]>) -> String {
    let on_path: HashSet<Point> = path.unwrap_or_default().iter().copied().collect();

    let horizontal = |row: usize, dir: Direction| {
        let walls = (0..grid.cols())
            .map(|col| {
                if grid.room(Point::new(row, col)).is_open(dir) {
                    H_OPEN
                } else {
                    H_WALL
                }
            })
            .join(CORNER);
        format!("{CORNER}{walls}{CORNER}")
    };

    let mut lines = Vec::with_capacity(2 * grid.rows() + 1);
    for row in 0..grid.rows() {
        lines.push(horizontal(row, Direction::North));

        let mut line = String::new();
        for col in 0..grid.cols() {
            let point = Point::new(row, col);
            let room = grid.room(point);
            line.push_str(if room.is_open(Direction::West) {
                V_OPEN
            } else {
                V_WALL
            });
            line.push_str(if on_path.contains(&point) {
                ON_PATH
            } else {
                ROOM
            });
        }
        let last = grid.room(Point::new(row, grid.cols() - 1));
        line.push_str(if last.is_open(Direction::East) {
            V_OPEN
        } else {
            V_WALL
        });
        lines.push(line);
    }
    lines.push(horizontal(grid.rows() - 1, Direction::South));

    lines.join("\n")
}
