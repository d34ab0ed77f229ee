//! The maze grid: a wall set over a `width x height` cell grid plus one
//! integer value per cell.
//!
//! A freshly built maze has no walls and every value at zero. Generators call
//! [`Maze::set_all_walls`] and [`Maze::set_all_nodes`] to reach the blank state
//! (every wall present, every cell unvisited) before carving.

use crate::cell::{Cell, Direction};
use crate::error::MazeError;
use crate::wall::{Wall, WallSet, Walls};
use serde::Serialize;

/// Node value of a cell not yet incorporated into the maze.
pub const UNVISITED: i32 = 1;
/// Node value of a cell that is part of the carved spanning tree.
pub const VISITED: i32 = 0;

/// Number of edges in a `width x height` grid graph: `2wh - w - h`.
///
/// Saturates at `usize::MAX` for grids too large to allocate.
pub fn grid_edge_count(width: usize, height: usize) -> usize {
    // (w - 1) * h + w * (h - 1), so neither product exceeds the true count.
    let horizontal = width.saturating_sub(1).saturating_mul(height);
    let vertical = width.saturating_mul(height.saturating_sub(1));
    horizontal.saturating_add(vertical)
}

/// A rectangular maze. Walls only ever connect in-bounds adjacent cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Maze {
    width: usize,
    height: usize,
    walls: WallSet,
    nodes: Vec<i32>,
}

impl Maze {
    /// Creates a maze with no walls and every node value zero.
    ///
    /// Returns `MazeError::InvalidDimensions` if either dimension is zero
    /// or if `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimensions);
        }
        let len = width
            .checked_mul(height)
            .ok_or(MazeError::InvalidDimensions)?;
        Ok(Self {
            width,
            height,
            walls: WallSet::new(),
            nodes: vec![0; len],
        })
    }

    /// Creates a maze in the blank state: all walls, all cells unvisited.
    pub fn blank(width: usize, height: usize) -> Result<Self, MazeError> {
        let mut maze = Self::new(width, height)?;
        maze.set_all_walls();
        maze.set_all_nodes();
        Ok(maze)
    }

    /// Maze width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Maze height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
    }

    /// Inserts the wall between every pair of adjacent cells.
    pub fn set_all_walls(&mut self) {
        let (w, h) = (self.width, self.height);
        for cell in (0..h).flat_map(|y| (0..w).map(move |x| Cell::new(x, y))) {
            for neighbor in cell.neighbors(w, h) {
                // Both cells are in bounds and adjacent by construction.
                if let Ok(wall) = Wall::new(cell, neighbor) {
                    self.walls.insert(wall);
                }
            }
        }
    }

    /// Sets every node value to [`UNVISITED`].
    pub fn set_all_nodes(&mut self) {
        self.nodes.fill(UNVISITED);
    }

    /// Adds the wall between `a` and `b`. Returns `false` if it was already there.
    pub fn add_wall(&mut self, a: Cell, b: Cell) -> Result<bool, MazeError> {
        let wall = self.wall_between(a, b)?;
        Ok(self.walls.insert(wall))
    }

    /// Removes the wall between `a` and `b`. Returns `false` if it was already gone.
    pub fn remove_wall(&mut self, a: Cell, b: Cell) -> Result<bool, MazeError> {
        let wall = self.wall_between(a, b)?;
        Ok(self.walls.remove(&wall))
    }

    /// Whether a wall currently separates `a` and `b`.
    pub fn has_wall(&self, a: Cell, b: Cell) -> Result<bool, MazeError> {
        let wall = self.wall_between(a, b)?;
        Ok(self.walls.contains(&wall))
    }

    /// Builds the wall between two cells after checking both are in bounds
    /// and adjacent.
    pub fn wall_between(&self, a: Cell, b: Cell) -> Result<Wall, MazeError> {
        self.check_bounds(a)?;
        self.check_bounds(b)?;
        Wall::new(a, b)
    }

    pub fn node_value(&self, cell: Cell) -> Result<i32, MazeError> {
        Ok(self.nodes[self.index(cell)?])
    }

    pub fn set_node_value(&mut self, cell: Cell, value: i32) -> Result<(), MazeError> {
        let idx = self.index(cell)?;
        self.nodes[idx] = value;
        Ok(())
    }

    /// Row-major node values, exactly `width * height` entries.
    pub fn nodes(&self) -> &[i32] {
        &self.nodes
    }

    /// The current wall set.
    pub fn wall_set(&self) -> &WallSet {
        &self.walls
    }

    /// Every wall currently present, each exactly once.
    pub fn walls(&self) -> Walls<'_> {
        self.walls.iter()
    }

    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// Adjacent cell pairs with no wall between them, in row-major order of
    /// their first cell.
    pub fn passages(&self) -> Vec<Wall> {
        let (w, h) = (self.width, self.height);
        let mut out = Vec::new();
        for cell in self.cells() {
            let forward = [
                cell.step(Direction::Right, w, h),
                cell.step(Direction::Down, w, h),
            ];
            for neighbor in forward.into_iter().flatten() {
                if let Ok(wall) = Wall::new(cell, neighbor) {
                    if !self.walls.contains(&wall) {
                        out.push(wall);
                    }
                }
            }
        }
        out
    }

    fn check_bounds(&self, cell: Cell) -> Result<(), MazeError> {
        if cell.in_bounds(self.width, self.height) {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds {
                x: cell.x,
                y: cell.y,
                width: self.width,
                height: self.height,
            })
        }
    }

    fn index(&self, cell: Cell) -> Result<usize, MazeError> {
        self.check_bounds(cell)?;
        Ok(cell.y * self.width + cell.x)
    }
}
