//! Session-level state values.

use serde::{Deserialize, Serialize};

/// Identifies one session.
///
/// Every reset starts a new epoch. Timer ticks and resolution tokens carry
/// the epoch they were issued under, so callbacks left over from a
/// discarded session are recognised and dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionEpoch(pub u64);

impl SessionEpoch {
    /// The epoch following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for SessionEpoch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Epoch({})", self.0)
    }
}

/// Session lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Board dealt, no card flipped yet.
    #[default]
    Idle,
    /// Timer running.
    Running,
    /// All pairs found. Terminal.
    Won,
}

/// Gate on new flips.
///
/// Closed from the moment a second card is turned until its pair is
/// resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlipLock {
    #[default]
    Open,
    Closed,
}

impl FlipLock {
    #[must_use]
    pub fn is_open(self) -> bool {
        self == FlipLock::Open
    }
}

/// Counter snapshot for the on-screen displays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Completed pair evaluations.
    pub moves: u32,
    pub matched_pairs: u32,
    pub total_pairs: u32,
    pub elapsed_secs: u32,
}

impl Scoreboard {
    /// Fresh counters for a board with `total_pairs` pairs.
    #[must_use]
    pub fn new(total_pairs: u32) -> Self {
        Self {
            total_pairs,
            ..Self::default()
        }
    }

    /// Timer text as displayed, e.g. `"42s"`.
    #[must_use]
    pub fn timer_text(&self) -> String {
        format!("{}s", self.elapsed_secs)
    }

    /// Have all pairs been found?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total_pairs > 0 && self.matched_pairs == self.total_pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_next() {
        let epoch = SessionEpoch::default();
        assert_eq!(epoch.next(), SessionEpoch(1));
        assert_eq!(epoch.next().next().to_string(), "Epoch(2)");
    }

    #[test]
    fn test_scoreboard_new() {
        let score = Scoreboard::new(8);
        assert_eq!(score.moves, 0);
        assert_eq!(score.matched_pairs, 0);
        assert_eq!(score.elapsed_secs, 0);
        assert_eq!(score.timer_text(), "0s");
        assert!(!score.is_complete());
    }

    #[test]
    fn test_scoreboard_complete() {
        let score = Scoreboard {
            moves: 12,
            matched_pairs: 8,
            total_pairs: 8,
            elapsed_secs: 31,
        };
        assert!(score.is_complete());
        assert_eq!(score.timer_text(), "31s");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(SessionPhase::default(), SessionPhase::Idle);
        assert!(FlipLock::default().is_open());
        assert!(!FlipLock::Closed.is_open());
    }
}
