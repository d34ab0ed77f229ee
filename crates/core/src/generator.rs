//! The `Generator` trait every maze-carving strategy implements, and the
//! `GeneratorBase` state they share.
//!
//! A run has two phases. [`Generator::generate`] first resets the maze to the
//! blank state (every wall present, every cell unvisited) and reseeds the
//! random stream, then repeatedly calls the strategy's [`Generator::step`]
//! until it reports [`Step::Done`] or the run is cancelled. Strategies remove
//! walls through [`GeneratorBase::carve`], which fires the animation hook once
//! per removal.

use crate::animation::{MazeObserver, NullObserver, Pacer, SleepPacer};
use crate::cancel::CancelToken;
use crate::cell::Cell;
use crate::config::GeneratorConfig;
use crate::error::MazeError;
use crate::maze::{Maze, VISITED};
use crate::prng::Xorshift64;
use crate::seed::{resolve_seed, Replay};
use crate::timer::Timer;
use crate::wall::{Wall, Walls};
use serde_json::{json, Value};

/// Outcome of a single carving iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A wall was removed; the animation hook has fired.
    Carved(Wall),
    /// The cell had nothing left to connect and was dropped from the frontier.
    Backtracked(Cell),
    /// The frontier is empty; the maze is a spanning tree.
    Done,
}

/// How a `generate` call ended. `steps` counts removed walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Finished { steps: usize },
    /// Stopped between steps by a [`CancelToken`]. The maze holds a valid
    /// but incomplete wall set.
    Cancelled { steps: usize },
}

impl Completion {
    pub fn steps(&self) -> usize {
        match *self {
            Completion::Finished { steps } | Completion::Cancelled { steps } => steps,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, Completion::Finished { .. })
    }
}

/// State shared by all strategies: the maze, the random stream, animation
/// plumbing, timing and cancellation.
///
/// The base exclusively owns its maze. Observers only ever see it through
/// `&Maze`.
pub struct GeneratorBase {
    config: GeneratorConfig,
    seed: u64,
    rng: Xorshift64,
    maze: Maze,
    carved: Vec<Wall>,
    timer: Timer,
    observer: Box<dyn MazeObserver + Send>,
    pacer: Box<dyn Pacer + Send>,
    cancel: CancelToken,
}

impl GeneratorBase {
    /// Validates the dimensions and resolves the seed (0 draws a random one).
    ///
    /// Returns `MazeError::InvalidDimensions` if width or height is zero.
    pub fn new(config: GeneratorConfig) -> Result<Self, MazeError> {
        let maze = Maze::blank(config.width, config.height)?;
        let seed = resolve_seed(config.seed);
        Ok(Self {
            config,
            seed,
            rng: Xorshift64::new(seed),
            maze,
            carved: Vec::new(),
            timer: Timer::new(),
            observer: Box::new(NullObserver),
            pacer: Box::new(SleepPacer),
            cancel: CancelToken::new(),
        })
    }

    pub fn set_observer(&mut self, observer: Box<dyn MazeObserver + Send>) {
        self.observer = observer;
    }

    /// Replaces the pause between animation steps (thread sleep by default).
    pub fn set_pacer(&mut self, pacer: Box<dyn Pacer + Send>) {
        self.pacer = pacer;
    }

    /// Phase one: a fresh blank maze, an empty carve log, and the random
    /// stream rewound to the resolved seed.
    pub fn reset(&mut self) -> Result<(), MazeError> {
        self.maze = Maze::blank(self.config.width, self.config.height)?;
        self.rng = Xorshift64::new(self.seed);
        self.carved.clear();
        Ok(())
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The seed actually in use, never 0.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Removed walls in the order they were carved during the current run.
    pub fn carved(&self) -> &[Wall] {
        &self.carved
    }

    pub fn rng_mut(&mut self) -> &mut Xorshift64 {
        &mut self.rng
    }

    /// The grid center, `(width / 2, height / 2)`.
    pub fn start_cell(&self) -> Cell {
        Cell::new(self.maze.width() / 2, self.maze.height() / 2)
    }

    pub fn is_visited(&self, cell: Cell) -> bool {
        self.maze.node_value(cell) == Ok(VISITED)
    }

    pub fn visit(&mut self, cell: Cell) -> Result<(), MazeError> {
        self.maze.set_node_value(cell, VISITED)
    }

    /// Neighbors of `cell` filtered by visited state, in neighbor order.
    pub fn neighbors_where(&self, cell: Cell, visited: bool) -> Vec<Cell> {
        cell.neighbors(self.maze.width(), self.maze.height())
            .filter(|&n| self.is_visited(n) == visited)
            .collect()
    }

    /// Removes the wall between `from` and `to`, marks `to` visited, logs
    /// the wall and fires the animation hook.
    pub fn carve(&mut self, from: Cell, to: Cell) -> Result<Wall, MazeError> {
        let wall = self.maze.wall_between(from, to)?;
        self.maze.remove_wall(from, to)?;
        self.visit(to)?;
        self.carved.push(wall);
        log::trace!("carved {from} -> {to}");
        self.maze_changed();
        Ok(wall)
    }

    /// The animation hook. With animation on, pauses for the configured
    /// delay and then shows the observer the current maze; otherwise does
    /// nothing.
    pub fn maze_changed(&mut self) {
        let animation = self.config.animation;
        if animation.enabled {
            self.pacer.pause(animation.delay());
            self.observer.maze_updated(&self.maze);
        }
    }

    pub fn start_timer(&mut self) {
        self.timer.start();
    }

    /// Whether a `start_timer` has not yet been matched by `end_timer`.
    pub fn is_timing(&self) -> bool {
        self.timer.is_running()
    }

    /// Returns elapsed milliseconds and leaves the timer idle.
    ///
    /// Returns `MazeError::TimerNotStarted` without a prior `start_timer`.
    pub fn end_timer(&mut self) -> Result<u64, MazeError> {
        self.timer.stop()
    }

    fn report_timing(&mut self, elapsed_ms: u64) {
        self.observer.generation_timed(elapsed_ms);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// A handle that cancels this generator from any thread.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }
}

/// A maze-carving strategy.
///
/// Implementors supply the frontier handling (`begin`, `step`); everything
/// else is provided on top of [`GeneratorBase`]. The trait is object safe,
/// so strategies can be driven as `Box<dyn Generator>`.
pub trait Generator {
    /// Short registry name, e.g. `"dfs"`.
    fn name(&self) -> &'static str;

    fn base(&self) -> &GeneratorBase;

    fn base_mut(&mut self) -> &mut GeneratorBase;

    /// Seeds the frontier. Called once per run, right after the maze has
    /// been reset to blank.
    fn begin(&mut self) -> Result<(), MazeError>;

    /// Runs one carving iteration.
    fn step(&mut self) -> Result<Step, MazeError>;

    /// Resets to blank and carves until done or cancelled.
    ///
    /// Cancellation is checked before every iteration. A cancelled token is
    /// not cleared, so later calls on the same generator stop immediately.
    fn generate(&mut self) -> Result<Completion, MazeError> {
        self.base_mut().reset()?;
        let timing = self.base().config().timing;
        if timing {
            self.base_mut().start_timer();
        }
        log::debug!(
            "generating {}x{} maze with {} (seed {})",
            self.maze().width(),
            self.maze().height(),
            self.name(),
            self.seed()
        );

        let outcome = carve_until_stopped(self);

        // Stop the timer even when carving failed.
        if timing {
            let elapsed = self.base_mut().end_timer()?;
            if outcome.is_ok() {
                log::debug!("generation: {elapsed}ms");
                self.base_mut().report_timing(elapsed);
            }
        }
        outcome
    }

    fn seed(&self) -> u64 {
        self.base().seed()
    }

    fn maze(&self) -> &Maze {
        self.base().maze()
    }

    fn walls(&self) -> Walls<'_> {
        self.base().maze().walls()
    }

    fn carved(&self) -> &[Wall] {
        self.base().carved()
    }

    fn cancel_token(&self) -> CancelToken {
        self.base().cancel_token()
    }

    fn set_observer(&mut self, observer: Box<dyn MazeObserver + Send>) {
        self.base_mut().set_observer(observer);
    }

    fn set_pacer(&mut self, pacer: Box<dyn Pacer + Send>) {
        self.base_mut().set_pacer(pacer);
    }

    /// A record that regenerates this exact maze.
    fn replay(&self) -> Replay {
        Replay::new(
            self.name(),
            self.maze().width(),
            self.maze().height(),
            self.seed(),
        )
    }

    /// Current settings as a JSON object, with the resolved seed.
    fn params(&self) -> Value {
        let config = self.base().config();
        json!({
            "generator": self.name(),
            "width": config.width,
            "height": config.height,
            "seed": self.seed(),
            "animate": config.animation.enabled,
            "delay_ms": config.animation.delay_ms(),
            "timing": config.timing,
        })
    }
}

/// Phase two of [`Generator::generate`]: seeds the frontier and steps until
/// the generator reports done or the cancel token is set.
fn carve_until_stopped<G: Generator + ?Sized>(g: &mut G) -> Result<Completion, MazeError> {
    g.begin()?;
    loop {
        if g.base().is_cancelled() {
            return Ok(Completion::Cancelled {
                steps: g.base().carved().len(),
            });
        }
        if g.step()? == Step::Done {
            return Ok(Completion::Finished {
                steps: g.base().carved().len(),
            });
        }
    }
}
