//! Game session: one play-through from deal to win or reset.
//!
//! ## Key Types
//!
//! - `GameSession`: owns the board, counters, timer and flip-lock
//! - `FlipOutcome` / `FlipResult`: what a flip attempt did
//! - `PendingResolution` / `ResolutionToken`: two-phase mismatch revert
//! - `SessionEpoch`: invalidates ticks and tokens of discarded sessions

mod game_session;
mod outcome;
mod resolution;
mod state;
mod timer;

pub use game_session::GameSession;
pub use outcome::{FlipOutcome, FlipResult, IgnoreReason};
pub use resolution::{PendingResolution, ResolutionToken};
pub use state::{FlipLock, Scoreboard, SessionEpoch, SessionPhase};
pub use timer::GameTimer;
