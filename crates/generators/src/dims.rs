//! Orchestrator-side input correction: maze dimensions and animation speed.
//!
//! Generators accept any non-zero size; these helpers keep user input within
//! what the front end can display.

use maze_gen_core::MazeError;

/// Smallest width or height the orchestrator will request.
pub const MIN_SIDE: usize = 5;
/// Largest allowed ratio between the longer and shorter side.
pub const MAX_ASPECT: usize = 3;
/// Largest cell count the orchestrator will allocate a maze for.
pub const MAX_CELLS: usize = 1 << 22;

/// Raises each side to at least [`MIN_SIDE`], then caps the width at three
/// times the height, then the height at three times the (capped) width.
pub fn clamp_dimensions(width: usize, height: usize) -> (usize, usize) {
    let width = width.max(MIN_SIDE);
    let height = height.max(MIN_SIDE);
    let width = width.min(MAX_ASPECT.saturating_mul(height));
    let height = height.min(MAX_ASPECT.saturating_mul(width));
    (width, height)
}

/// Accepts `width x height` only if clamping would leave it unchanged and
/// the grid holds at most [`MAX_CELLS`] cells.
///
/// Used for sizes that must be honored exactly, such as replay records,
/// where silently clamping would produce a different maze.
pub fn validate_dimensions(width: usize, height: usize) -> Result<(), MazeError> {
    let within_limit = width
        .checked_mul(height)
        .is_some_and(|cells| cells <= MAX_CELLS);
    if clamp_dimensions(width, height) != (width, height) || !within_limit {
        return Err(MazeError::UnsupportedDimensions { width, height });
    }
    Ok(())
}

/// Maps a speed slider position in `[0, 1]` to a step delay in
/// `[min_ms, max_ms]`. Speed 1 is the shortest delay.
pub fn delay_for_speed(speed: f64, min_ms: u64, max_ms: u64) -> u64 {
    let inverse = 1.0 - speed.clamp(0.0, 1.0);
    (inverse * max_ms.saturating_sub(min_ms) as f64 + min_ms as f64).round() as u64
}

/// Inverse of [`delay_for_speed`]. Returns 1.0 when the range is empty.
pub fn speed_for_delay(delay_ms: u64, min_ms: u64, max_ms: u64) -> f64 {
    if max_ms <= min_ms {
        return 1.0;
    }
    let inverse = (delay_ms.clamp(min_ms, max_ms) - min_ms) as f64 / (max_ms - min_ms) as f64;
    1.0 - inverse
}
