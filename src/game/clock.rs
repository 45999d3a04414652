//! Play-time counter.
//!
//! Free-running: the host feeds it frame deltas and it never interacts
//! with card state. Once stopped (the game was won) it stays stopped
//! until the next deal.

use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameClock {
    elapsed: Duration,
    stopped: bool,
}

impl GameClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `delta` unless the clock has been stopped.
    pub fn tick(&mut self, delta: Duration) {
        if !self.stopped {
            self.elapsed = self.elapsed.saturating_add(delta);
        }
    }

    /// Freeze the clock for good.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}
