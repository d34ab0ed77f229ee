#![deny(unsafe_code)]
//! Generator registry: maps generator names to implementations, plus the
//! orchestrator-side helpers (dimension clamping, animation speed mapping,
//! text rendering).
//!
//! This crate sits between `maze-gen-core` (which defines the `Generator`
//! trait) and the strategy crates (`maze-gen-dfs`, `maze-gen-prim`), so the
//! CLI does not duplicate dispatch logic.

pub mod dims;
pub mod text;

use maze_gen_core::error::MazeError;
use maze_gen_core::{Generator, GeneratorBase, GeneratorConfig, Replay, Step};
use maze_gen_dfs::Dfs;
use maze_gen_prim::Prim;
use serde_json::Value;

/// All available generator names.
const GENERATOR_NAMES: &[&str] = &["dfs", "prim"];

/// Enumeration of all available maze generators.
///
/// Wraps each strategy and delegates the `Generator` trait. Use
/// [`GeneratorKind::from_name`] for string-based construction.
pub enum GeneratorKind {
    /// Randomized depth-first search.
    Dfs(Dfs),
    /// Randomized Prim's algorithm.
    Prim(Prim),
}

impl GeneratorKind {
    /// Constructs a generator by name.
    ///
    /// Returns `MazeError::UnknownGenerator` if the name is not recognized.
    pub fn from_name(name: &str, config: GeneratorConfig) -> Result<Self, MazeError> {
        match name {
            "dfs" => Ok(GeneratorKind::Dfs(Dfs::new(config)?)),
            "prim" => Ok(GeneratorKind::Prim(Prim::new(config)?)),
            _ => Err(MazeError::UnknownGenerator(name.to_string())),
        }
    }

    /// Constructs a generator by name with options read from a JSON object
    /// (see [`GeneratorConfig::from_json`]).
    pub fn from_json(
        name: &str,
        width: usize,
        height: usize,
        seed: u64,
        params: &Value,
    ) -> Result<Self, MazeError> {
        Self::from_name(name, GeneratorConfig::from_json(width, height, seed, params))
    }

    /// Reconstructs the generator a [`Replay`] was recorded from.
    ///
    /// The record is validated first, so a zero seed is rejected rather than
    /// silently replaced with a random one. Dimensions must already be within
    /// the clamped range; see [`dims::validate_dimensions`].
    pub fn from_replay(replay: &Replay, params: &Value) -> Result<Self, MazeError> {
        replay.validate()?;
        dims::validate_dimensions(replay.width, replay.height)?;
        Self::from_json(
            &replay.generator,
            replay.width,
            replay.height,
            replay.seed,
            params,
        )
    }

    /// Returns a slice of all recognized generator names.
    pub fn list_generators() -> &'static [&'static str] {
        GENERATOR_NAMES
    }
}

impl Generator for GeneratorKind {
    fn name(&self) -> &'static str {
        match self {
            GeneratorKind::Dfs(g) => g.name(),
            GeneratorKind::Prim(g) => g.name(),
        }
    }

    fn base(&self) -> &GeneratorBase {
        match self {
            GeneratorKind::Dfs(g) => g.base(),
            GeneratorKind::Prim(g) => g.base(),
        }
    }

    fn base_mut(&mut self) -> &mut GeneratorBase {
        match self {
            GeneratorKind::Dfs(g) => g.base_mut(),
            GeneratorKind::Prim(g) => g.base_mut(),
        }
    }

    fn begin(&mut self) -> Result<(), MazeError> {
        match self {
            GeneratorKind::Dfs(g) => g.begin(),
            GeneratorKind::Prim(g) => g.begin(),
        }
    }

    fn step(&mut self) -> Result<Step, MazeError> {
        match self {
            GeneratorKind::Dfs(g) => g.step(),
            GeneratorKind::Prim(g) => g.step(),
        }
    }
}
