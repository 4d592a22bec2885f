//! Results of a flip attempt.

use serde::{Deserialize, Serialize};

use super::resolution::PendingResolution;
use crate::signals::Signal;

/// Why a flip was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// A pair is awaiting resolution.
    Locked,
    /// The card is already face-up.
    AlreadyFaceUp,
    /// The card belongs to a found pair.
    AlreadyMatched,
    /// No card at that position.
    OutOfRange,
    /// The session has been won.
    GameOver,
}

/// State transition caused by a flip attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipOutcome {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// First card of a pair turned face-up.
    Revealed { position: usize },
    /// Second card completed a pair.
    Matched { positions: [usize; 2], won: bool },
    /// Second card did not match; resolve the pending revert later.
    Mismatched(PendingResolution),
}

impl FlipOutcome {
    /// Did the flip change any state?
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, FlipOutcome::Ignored(_))
    }

    /// Did this flip end the game?
    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self, FlipOutcome::Matched { won: true, .. })
    }
}

/// Outcome plus the signals to emit, in order.
#[derive(Clone, Debug, PartialEq)]
pub struct FlipResult {
    pub outcome: FlipOutcome,
    pub signals: Vec<Signal>,
}

impl FlipResult {
    /// A refused flip. Carries no signals.
    #[must_use]
    pub fn ignored(reason: IgnoreReason) -> Self {
        Self {
            outcome: FlipOutcome::Ignored(reason),
            signals: Vec::new(),
        }
    }
}
