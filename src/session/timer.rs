//! Elapsed-seconds timer driven by external ticks.
//!
//! The timer owns no clock. A scheduler calls `tick` once per interval; the
//! timer only counts while running.

use serde::{Deserialize, Serialize};

/// Whole-second counter with start/stop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTimer {
    elapsed_secs: u32,
    running: bool,
    /// Set once stopped; a stopped timer never restarts.
    stopped: bool,
}

impl GameTimer {
    /// A timer at zero, not yet started.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting from the current value.
    ///
    /// Returns `false` if already running or previously stopped.
    pub fn start(&mut self) -> bool {
        if self.running || self.stopped {
            return false;
        }
        self.running = true;
        true
    }

    /// Freeze the timer permanently.
    ///
    /// Returns `true` if it was running.
    pub fn stop(&mut self) -> bool {
        let was_running = self.running;
        self.running = false;
        self.stopped = true;
        was_running
    }

    /// Advance by one second if running.
    ///
    /// Returns the new elapsed value, or `None` if the tick was ignored.
    pub fn tick(&mut self) -> Option<u32> {
        if !self.running {
            return None;
        }
        self.elapsed_secs = self.elapsed_secs.saturating_add(1);
        Some(self.elapsed_secs)
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_ignored_before_start() {
        let mut timer = GameTimer::new();
        assert_eq!(timer.tick(), None);
        assert_eq!(timer.elapsed_secs(), 0);
    }

    #[test]
    fn test_counts_while_running() {
        let mut timer = GameTimer::new();
        assert!(timer.start());
        assert!(!timer.start());

        assert_eq!(timer.tick(), Some(1));
        assert_eq!(timer.tick(), Some(2));
        assert_eq!(timer.tick(), Some(3));
        assert!(timer.is_running());
    }

    #[test]
    fn test_stop_freezes() {
        let mut timer = GameTimer::new();
        timer.start();
        timer.tick();
        timer.tick();

        assert!(timer.stop());
        assert_eq!(timer.tick(), None);
        assert_eq!(timer.elapsed_secs(), 2);

        // Cannot restart a stopped timer
        assert!(!timer.start());
        assert!(!timer.stop());
        assert_eq!(timer.elapsed_secs(), 2);
    }
}
