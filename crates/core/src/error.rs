//! Error types for the maze-gen core.

use crate::cell::Cell;
use thiserror::Error;

/// Errors produced by maze and generator operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Width or height was zero, or their product overflowed.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// An (x, y) coordinate was outside the maze bounds.
    #[error("cell ({x}, {y}) out of bounds for maze of size ({width}, {height})")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// A wall was requested between two cells that do not share an edge.
    #[error("cells {a} and {b} are not adjacent")]
    NotAdjacent { a: Cell, b: Cell },

    /// `end_timer` was called without a running timer.
    #[error("attempted to stop timer before it was started")]
    TimerNotStarted,

    /// A generator name was not recognized by the registry.
    #[error("unknown generator: {0}")]
    UnknownGenerator(String),

    /// Zero is reserved for "pick a random seed" and cannot be replayed.
    #[error("seed 0 is reserved for random seeding and cannot be replayed")]
    ZeroSeed,

    /// Dimensions outside the orchestrator's accepted range (below the
    /// minimum side, beyond the aspect limit, or too many cells).
    #[error("dimensions {width}x{height} are outside the supported range")]
    UnsupportedDimensions { width: usize, height: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions_displays_readable_message() {
        let msg = MazeError::InvalidDimensions.to_string();
        assert!(
            msg.contains("width") && msg.contains("height"),
            "expected message mentioning width and height, got: {msg}"
        );
    }

    #[test]
    fn out_of_bounds_includes_coordinates_and_dimensions() {
        let err = MazeError::OutOfBounds {
            x: 10,
            y: 20,
            width: 8,
            height: 9,
        };
        let msg = err.to_string();
        assert!(msg.contains("10"), "missing x in: {msg}");
        assert!(msg.contains("20"), "missing y in: {msg}");
        assert!(msg.contains("8"), "missing width in: {msg}");
        assert!(msg.contains("9"), "missing height in: {msg}");
    }

    #[test]
    fn not_adjacent_names_both_cells() {
        let err = MazeError::NotAdjacent {
            a: Cell::new(0, 0),
            b: Cell::new(3, 4),
        };
        let msg = err.to_string();
        assert!(msg.contains("(0, 0)"), "missing first cell in: {msg}");
        assert!(msg.contains("(3, 4)"), "missing second cell in: {msg}");
    }

    #[test]
    fn unknown_generator_includes_name() {
        let msg = MazeError::UnknownGenerator("kruskal".into()).to_string();
        assert!(msg.contains("kruskal"), "missing name in: {msg}");
    }

    #[test]
    fn unsupported_dimensions_names_the_size() {
        let msg = MazeError::UnsupportedDimensions {
            width: 1,
            height: 40,
        }
        .to_string();
        assert!(msg.contains("1x40"), "missing size in: {msg}");
    }

    #[test]
    fn maze_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MazeError>();
    }

    #[test]
    fn maze_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<MazeError>();
    }
}
