//! Wall-clock timing of a single generation run.

use crate::error::MazeError;
use std::time::Instant;

/// A restartable stopwatch. Idle until started; stopping returns it to idle.
#[derive(Debug, Default)]
pub struct Timer {
    started: Option<Instant>,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    /// Stops the timer and returns the elapsed whole milliseconds.
    ///
    /// Returns `MazeError::TimerNotStarted` if the timer is idle.
    pub fn stop(&mut self) -> Result<u64, MazeError> {
        let started = self.started.take().ok_or(MazeError::TimerNotStarted)?;
        Ok(u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_without_start_is_an_error() {
        let mut timer = Timer::new();
        assert_eq!(timer.stop(), Err(MazeError::TimerNotStarted));
    }

    #[test]
    fn start_then_stop_returns_elapsed() {
        let mut timer = Timer::new();
        timer.start();
        assert!(timer.is_running());
        std::thread::sleep(std::time::Duration::from_millis(2));
        assert!(timer.stop().unwrap() >= 1);
    }

    #[test]
    fn stop_resets_to_idle_for_reuse() {
        let mut timer = Timer::new();
        timer.start();
        timer.stop().unwrap();
        assert!(!timer.is_running());
        assert!(timer.stop().is_err());

        timer.start();
        assert!(timer.stop().is_ok());
    }
}
