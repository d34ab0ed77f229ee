//! Seed resolution and reproducible replay records.
//!
//! A seed of `0` means "pick one for me": [`resolve_seed`] draws a fresh
//! non-zero value, which the generator then reports so the run can be
//! replayed. Zero itself is never a usable deterministic seed.

use crate::error::MazeError;
use serde::{Deserialize, Serialize};

/// Returns `seed` unchanged if non-zero, otherwise a freshly drawn non-zero seed.
pub fn resolve_seed(seed: u64) -> u64 {
    if seed != 0 {
        return seed;
    }
    loop {
        let drawn: u64 = rand::random();
        if drawn != 0 {
            log::debug!("drew random seed {drawn}");
            return drawn;
        }
    }
}

/// Everything needed to regenerate a maze bit-for-bit: generator name,
/// dimensions and the resolved seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replay {
    pub generator: String,
    pub width: usize,
    pub height: usize,
    pub seed: u64,
}

impl Replay {
    pub fn new(generator: &str, width: usize, height: usize, seed: u64) -> Self {
        Self {
            generator: generator.to_string(),
            width,
            height,
            seed,
        }
    }

    /// Checks that the record describes a replayable run: non-zero
    /// dimensions whose product fits in `usize`, and a non-zero seed.
    pub fn validate(&self) -> Result<(), MazeError> {
        if self.width == 0 || self.height == 0 {
            return Err(MazeError::InvalidDimensions);
        }
        self.width
            .checked_mul(self.height)
            .ok_or(MazeError::InvalidDimensions)?;
        if self.seed == 0 {
            return Err(MazeError::ZeroSeed);
        }
        Ok(())
    }
}
