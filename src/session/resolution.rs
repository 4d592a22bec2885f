//! Deferred resolution of a mismatched pair.
//!
//! A mismatch is settled in two phases: evaluation hands back a
//! `PendingResolution`, and the caller later redeems its token after the
//! delay has passed.

use serde::{Deserialize, Serialize};

use super::state::SessionEpoch;

/// Handle for a scheduled mismatch revert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolutionToken {
    /// Session that issued the token.
    pub epoch: SessionEpoch,
    /// Per-session sequence number.
    pub seq: u32,
}

impl std::fmt::Display for ResolutionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Resolution({}/{})", self.epoch.0, self.seq)
    }
}

/// A mismatched pair waiting to be turned face-down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendingResolution {
    pub token: ResolutionToken,
    /// Positions of the two face-up cards, in flip order.
    pub positions: [usize; 2],
    /// How long the caller should wait before resolving.
    pub delay_ms: u32,
}
