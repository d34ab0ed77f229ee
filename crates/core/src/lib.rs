#![deny(unsafe_code)]
//! Core types and traits for the maze-gen perfect-maze generator.
//!
//! Provides the grid model (`Cell`, `Wall`, `WallSet`, `Maze`), the
//! `Generator` trait with its shared `GeneratorBase`, the `Xorshift64` PRNG,
//! seed resolution and `Replay` records, animation observers and pacing,
//! cancellation, and spanning-tree checks.

pub mod analysis;
pub mod animation;
pub mod cancel;
pub mod cell;
pub mod config;
pub mod error;
pub mod generator;
pub mod maze;
pub mod params;
pub mod prng;
pub mod seed;
pub mod timer;
pub mod wall;

pub use animation::{Animation, MazeObserver, Pacer};
pub use cancel::CancelToken;
pub use cell::{Cell, Direction};
pub use config::GeneratorConfig;
pub use error::MazeError;
pub use generator::{Completion, Generator, GeneratorBase, Step};
pub use maze::Maze;
pub use prng::Xorshift64;
pub use seed::Replay;
pub use wall::{Wall, WallSet};
