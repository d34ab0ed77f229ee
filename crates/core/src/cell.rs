//! Grid coordinates and axis-aligned neighbor derivation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four axis directions on the grid.
///
/// `Up` decreases `y`, `Down` increases it; `Left` decreases `x`, `Right`
/// increases it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in neighbor enumeration order.
    ///
    /// Carving picks candidates by index into this order, so changing it
    /// changes every maze produced for a given seed.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// A grid position. Equality and hashing are by coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Whether the cell lies within `[0, width) x [0, height)`.
    pub fn in_bounds(self, width: usize, height: usize) -> bool {
        self.x < width && self.y < height
    }

    /// The adjacent cell in `dir`, or `None` if it would leave the grid.
    pub fn step(self, dir: Direction, width: usize, height: usize) -> Option<Cell> {
        let next = match dir {
            Direction::Up => Cell::new(self.x, self.y.checked_sub(1)?),
            Direction::Down => Cell::new(self.x, self.y + 1),
            Direction::Left => Cell::new(self.x.checked_sub(1)?, self.y),
            Direction::Right => Cell::new(self.x + 1, self.y),
        };
        next.in_bounds(width, height).then_some(next)
    }

    /// In-bounds axis neighbors in up, down, left, right order (0 to 4 cells).
    ///
    /// The caller guarantees `self` is itself in bounds.
    pub fn neighbors(self, width: usize, height: usize) -> impl Iterator<Item = Cell> {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.step(dir, width, height))
    }

    /// Manhattan distance between two cells.
    pub fn manhattan(self, other: Cell) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Whether the two cells share an edge.
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.manhattan(other) == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((x, y): (usize, usize)) -> Self {
        Cell::new(x, y)
    }
}
