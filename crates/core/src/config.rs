//! Construction-time settings for a generator.

use crate::animation::Animation;
use crate::params::{param_bool, param_i64};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Everything a generator needs at construction.
///
/// `width` and `height` are expected to be already clamped by the
/// orchestrator; the generator only rejects zero. A `seed` of 0 asks the
/// generator to choose one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub width: usize,
    pub height: usize,
    pub seed: u64,
    pub animation: Animation,
    /// Time each `generate` call and report it to the observer.
    pub timing: bool,
}

impl GeneratorConfig {
    /// A config with animation and timing off.
    pub fn new(width: usize, height: usize, seed: u64) -> Self {
        Self {
            width,
            height,
            seed,
            animation: Animation::disabled(),
            timing: false,
        }
    }

    /// Reads `animate`, `delay_ms` and `timing` from a JSON object, falling
    /// back to defaults for missing keys. A negative `delay_ms` is clamped.
    pub fn from_json(width: usize, height: usize, seed: u64, params: &Value) -> Self {
        Self {
            width,
            height,
            seed,
            animation: Animation::new(
                param_bool(params, "animate", false),
                param_i64(params, "delay_ms", 0),
            ),
            timing: param_bool(params, "timing", false),
        }
    }

    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.animation = animation;
        self
    }

    pub fn with_timing(mut self, timing: bool) -> Self {
        self.timing = timing;
        self
    }
}
