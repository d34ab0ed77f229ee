#![deny(unsafe_code)]
//! Randomized Prim's maze generator.
//!
//! Grows the maze outward from the grid center. The frontier holds every
//! unvisited cell adjacent to the visited region. Each iteration removes a
//! uniformly random frontier cell, joins it to a uniformly random visited
//! neighbor by removing the wall between them, and adds its own unvisited
//! neighbors to the frontier. Compared with depth-first carving this gives
//! shorter corridors and many short dead ends.

use maze_gen_core::error::MazeError;
use maze_gen_core::{Cell, Generator, GeneratorBase, GeneratorConfig, Step};

/// Randomized Prim's generator.
pub struct Prim {
    base: GeneratorBase,
    frontier: Vec<Cell>,
    /// Row-major membership mask for `frontier`, so a cell is queued once.
    queued: Vec<bool>,
}

impl Prim {
    /// Creates a generator; a `config.seed` of 0 picks a random seed.
    ///
    /// Returns `MazeError::InvalidDimensions` if width or height is zero.
    pub fn new(config: GeneratorConfig) -> Result<Self, MazeError> {
        let base = GeneratorBase::new(config)?;
        let cells = base.maze().width() * base.maze().height();
        Ok(Self {
            base,
            frontier: Vec::new(),
            queued: vec![false; cells],
        })
    }

    /// Cells waiting to be connected, in no particular order.
    pub fn frontier(&self) -> &[Cell] {
        &self.frontier
    }

    fn slot(&self, cell: Cell) -> usize {
        cell.y * self.base.maze().width() + cell.x
    }

    /// Queues the unvisited neighbors of `cell` that are not already queued.
    fn extend_frontier(&mut self, cell: Cell) {
        for n in self.base.neighbors_where(cell, false) {
            let slot = self.slot(n);
            if !self.queued[slot] {
                self.queued[slot] = true;
                self.frontier.push(n);
            }
        }
    }
}

impl Generator for Prim {
    fn name(&self) -> &'static str {
        "prim"
    }

    fn base(&self) -> &GeneratorBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut GeneratorBase {
        &mut self.base
    }

    fn begin(&mut self) -> Result<(), MazeError> {
        self.frontier.clear();
        self.queued.fill(false);
        let start = self.base.start_cell();
        self.base.visit(start)?;
        self.extend_frontier(start);
        log::trace!("frontier seeded with {} cells", self.frontier.len());
        Ok(())
    }

    fn step(&mut self) -> Result<Step, MazeError> {
        if self.frontier.is_empty() {
            return Ok(Step::Done);
        }
        let pick = self.base.rng_mut().next_usize(self.frontier.len());
        let cell = self.frontier.swap_remove(pick);
        let slot = self.slot(cell);
        self.queued[slot] = false;

        // A queued cell always borders the visited region.
        let visited = self.base.neighbors_where(cell, true);
        let Some(&target) = self.base.rng_mut().choose(&visited) else {
            return Ok(Step::Backtracked(cell));
        };
        let wall = self.base.carve(target, cell)?;
        self.extend_frontier(cell);
        Ok(Step::Carved(wall))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_gen_core::analysis::{is_acyclic, is_connected, is_spanning_tree};
    use maze_gen_core::maze::{grid_edge_count, VISITED};
    use maze_gen_core::{Animation, CancelToken, Completion, Maze, MazeObserver};

    fn prim(width: usize, height: usize, seed: u64) -> Prim {
        Prim::new(GeneratorConfig::new(width, height, seed)).unwrap()
    }

    struct CancelAfter {
        remaining: usize,
        token: CancelToken,
    }

    impl MazeObserver for CancelAfter {
        fn maze_updated(&mut self, _maze: &Maze) {
            self.remaining = self.remaining.saturating_sub(1);
            if self.remaining == 0 {
                self.token.cancel();
            }
        }
    }

    #[test]
    fn new_with_zero_dimensions_returns_error() {
        assert!(Prim::new(GeneratorConfig::new(0, 3, 1)).is_err());
        assert!(Prim::new(GeneratorConfig::new(3, 0, 1)).is_err());
    }

    #[test]
    fn begin_queues_the_start_cells_neighbors() {
        let mut g = prim(5, 5, 42);
        g.base_mut().reset().unwrap();
        g.begin().unwrap();
        let mut frontier = g.frontier().to_vec();
        frontier.sort();
        assert_eq!(
            frontier,
            vec![
                Cell::new(1, 2),
                Cell::new(2, 1),
                Cell::new(2, 3),
                Cell::new(3, 2),
            ]
        );
    }

    #[test]
    fn five_by_five_seed_42_is_a_spanning_tree() {
        let mut g = prim(5, 5, 42);
        let done = g.generate().unwrap();
        assert_eq!(done, Completion::Finished { steps: 24 });
        assert_eq!(g.walls().count(), grid_edge_count(5, 5) - 24);
        assert!(g.maze().nodes().iter().all(|&v| v == VISITED));
        assert!(is_spanning_tree(g.maze()));
        assert!(g.frontier().is_empty());
    }

    #[test]
    fn every_step_carves_exactly_one_wall() {
        let mut g = prim(8, 6, 11);
        g.base_mut().reset().unwrap();
        g.begin().unwrap();
        let mut carved = 0;
        loop {
            match g.step().unwrap() {
                Step::Carved(_) => carved += 1,
                Step::Backtracked(cell) => panic!("unexpected backtrack at {cell}"),
                Step::Done => break,
            }
        }
        assert_eq!(carved, 47);
    }

    #[test]
    fn frontier_never_holds_duplicates() {
        let mut g = prim(9, 9, 8);
        g.base_mut().reset().unwrap();
        g.begin().unwrap();
        while g.step().unwrap() != Step::Done {
            let mut cells = g.frontier().to_vec();
            cells.sort();
            cells.dedup();
            assert_eq!(cells.len(), g.frontier().len());
            assert!(cells.iter().all(|&c| !g.base().is_visited(c)));
        }
    }

    #[test]
    fn same_seed_produces_identical_carve_sequence() {
        let mut a = prim(11, 7, 99);
        let mut b = prim(11, 7, 99);
        a.generate().unwrap();
        b.generate().unwrap();
        assert_eq!(a.carved(), b.carved());
        assert_eq!(a.maze(), b.maze());
    }

    #[test]
    fn random_seed_round_trips() {
        let mut a = prim(10, 6, 0);
        assert_ne!(a.seed(), 0);
        a.generate().unwrap();
        let mut b = prim(10, 6, a.seed());
        b.generate().unwrap();
        assert_eq!(a.carved(), b.carved());
    }

    #[test]
    fn regenerating_the_same_instance_replays_the_maze() {
        let mut g = prim(6, 6, 23);
        g.generate().unwrap();
        let first = g.carved().to_vec();
        g.generate().unwrap();
        assert_eq!(g.carved(), first.as_slice());
    }

    #[test]
    fn cancel_after_five_steps_leaves_partial_tree() {
        let config = GeneratorConfig::new(5, 5, 42).with_animation(Animation::new(true, 0));
        let mut g = Prim::new(config).unwrap();
        let token = g.cancel_token();
        g.set_observer(Box::new(CancelAfter {
            remaining: 5,
            token,
        }));

        assert_eq!(g.generate().unwrap(), Completion::Cancelled { steps: 5 });
        assert_eq!(g.maze().passages().len(), 5);
        assert!(is_acyclic(g.maze()));
        assert!(!is_connected(g.maze()));
    }

    #[test]
    fn single_row_opens_every_wall() {
        let mut g = prim(7, 1, 3);
        g.generate().unwrap();
        assert_eq!(g.walls().count(), 0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(64))]

            #[test]
            fn always_carves_a_spanning_tree(
                w in 1_usize..16,
                h in 1_usize..16,
                seed in 1_u64..=u64::MAX,
            ) {
                let mut g = prim(w, h, seed);
                let done = g.generate().unwrap();
                prop_assert_eq!(done.steps(), w * h - 1);
                prop_assert!(is_spanning_tree(g.maze()));
            }
        }
    }
}
