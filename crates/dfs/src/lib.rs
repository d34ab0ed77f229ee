#![deny(unsafe_code)]
//! Randomized depth-first maze generator (the "recursive backtracker").
//!
//! Starting from the grid center, the generator keeps a stack of cells.
//! Each iteration pops the top cell; if it still has unvisited neighbors it
//! is pushed back, one of those neighbors is chosen at random, the wall
//! between them is removed, and the neighbor is pushed. A cell with no
//! unvisited neighbors is dropped, which backtracks to the cell below it.
//! Walls are only ever removed towards unvisited cells, so the result is
//! always a spanning tree. Mazes have long corridors and few short dead ends.

use maze_gen_core::error::MazeError;
use maze_gen_core::{Cell, Generator, GeneratorBase, GeneratorConfig, Step};

/// Randomized depth-first generator.
pub struct Dfs {
    base: GeneratorBase,
    stack: Vec<Cell>,
}

impl Dfs {
    /// Creates a generator; a `config.seed` of 0 picks a random seed.
    ///
    /// Returns `MazeError::InvalidDimensions` if width or height is zero.
    pub fn new(config: GeneratorConfig) -> Result<Self, MazeError> {
        Ok(Self {
            base: GeneratorBase::new(config)?,
            stack: Vec::new(),
        })
    }

    /// Cells currently on the stack, bottom first.
    pub fn stack(&self) -> &[Cell] {
        &self.stack
    }
}

impl Generator for Dfs {
    fn name(&self) -> &'static str {
        "dfs"
    }

    fn base(&self) -> &GeneratorBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut GeneratorBase {
        &mut self.base
    }

    fn begin(&mut self) -> Result<(), MazeError> {
        let start = self.base.start_cell();
        self.base.visit(start)?;
        self.stack.clear();
        self.stack.push(start);
        Ok(())
    }

    fn step(&mut self) -> Result<Step, MazeError> {
        let Some(current) = self.stack.pop() else {
            return Ok(Step::Done);
        };
        let candidates = self.base.neighbors_where(current, false);
        let Some(&next) = self.base.rng_mut().choose(&candidates) else {
            log::trace!("backtracking from {current}");
            return Ok(Step::Backtracked(current));
        };
        self.stack.push(current);
        let wall = self.base.carve(current, next)?;
        self.stack.push(next);
        Ok(Step::Carved(wall))
    }
}
