//! The animation hook: pacing between carving steps and the observers that
//! receive a read-only view of the maze after each one.
//!
//! Observers are handed `&Maze`, never `&mut Maze`. One that needs to keep
//! a frame, or hand it to another thread, clones it ([`SnapshotRecorder`],
//! [`ChannelObserver`]).

use crate::maze::Maze;
use serde::{Deserialize, Serialize};
use std::sync::mpsc::Sender;
use std::time::Duration;

/// Whether carving steps are reported, and how long to pause before each report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animation {
    pub enabled: bool,
    delay_ms: u64,
}

impl Animation {
    /// Builds the setting from a signed millisecond delay.
    ///
    /// A negative delay is clamped to 0 and logged as a warning.
    pub fn new(enabled: bool, delay_ms: i64) -> Self {
        let delay_ms = if delay_ms < 0 {
            log::warn!("animation delay cannot be negative ({delay_ms} ms), using 0");
            0
        } else {
            delay_ms as u64
        };
        Self { enabled, delay_ms }
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }
}

/// Blocks between animation steps.
pub trait Pacer {
    fn pause(&mut self, delay: Duration);
}

/// Pauses by sleeping the current thread.
#[derive(Debug, Default)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn pause(&mut self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

/// Receives the maze after each carving step, and the run time when timing
/// is enabled.
pub trait MazeObserver {
    fn maze_updated(&mut self, maze: &Maze);

    fn generation_timed(&mut self, _elapsed_ms: u64) {}
}

/// Ignores every notification.
#[derive(Debug, Default)]
pub struct NullObserver;

impl MazeObserver for NullObserver {
    fn maze_updated(&mut self, _maze: &Maze) {}
}

/// Keeps a clone of every frame it is shown.
#[derive(Debug, Default)]
pub struct SnapshotRecorder {
    pub frames: Vec<Maze>,
    pub elapsed_ms: Option<u64>,
}

impl MazeObserver for SnapshotRecorder {
    fn maze_updated(&mut self, maze: &Maze) {
        self.frames.push(maze.clone());
    }

    fn generation_timed(&mut self, elapsed_ms: u64) {
        self.elapsed_ms = Some(elapsed_ms);
    }
}

/// A frame or timing report sent from a generator thread to a renderer.
#[derive(Debug, Clone)]
pub enum MazeEvent {
    Updated(Maze),
    Timed(u64),
}

/// Sends owned snapshots over a channel so a renderer on another thread never
/// reads the maze being carved.
///
/// A disconnected receiver is not an error; the frames are dropped.
#[derive(Debug)]
pub struct ChannelObserver {
    tx: Sender<MazeEvent>,
}

impl ChannelObserver {
    pub fn new(tx: Sender<MazeEvent>) -> Self {
        Self { tx }
    }
}

impl MazeObserver for ChannelObserver {
    fn maze_updated(&mut self, maze: &Maze) {
        let _ = self.tx.send(MazeEvent::Updated(maze.clone()));
    }

    fn generation_timed(&mut self, elapsed_ms: u64) {
        let _ = self.tx.send(MazeEvent::Timed(elapsed_ms));
    }
}
