//! # memory-match
//!
//! A memory-matching (concentration) card game engine.
//!
//! ## Design Principles
//!
//! 1. **Rendering-Agnostic**: The engine never touches a DOM, an audio
//!    element or a particle library. It returns `Signal`s; a binding layer
//!    routes them.
//!
//! 2. **Synchronous Core**: No native timers. The per-second tick and the
//!    delayed mismatch revert are explicit calls (`on_tick`, `resolve`), so
//!    every rule can be tested without real time passing.
//!
//! 3. **Fresh Sessions**: Every start, reset or difficulty change deals a
//!    new board into a new `GameSession`. Nothing carries over.
//!
//! ## Architecture
//!
//! - **Flip-Lock**: At most two cards are face-up and unresolved. While a
//!   mismatched pair waits for its revert, further flips are ignored, so
//!   the deferred revert can never race new input.
//!
//! - **Session Epochs**: Ticks and resolution tokens are stamped with the
//!   session that issued them; anything left over from a discarded session
//!   is dropped.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Faces, deck sources, card state
//! - `board`: Board layout and generation
//! - `session`: Flip/match state machine, scoring, timer
//! - `signals`: Signals and collaborator traits (audio, confetti)
//! - `engine`: `MemoryGame`, the public entry point
//! - `driver`: Virtual clock and signal routing

pub mod core;
pub mod cards;
pub mod board;
pub mod session;
pub mod signals;
pub mod engine;
pub mod driver;

// Re-export commonly used types
pub use crate::core::{
    Difficulty, GridSize, SessionConfig, Timings,
    GameError,
    GameRng,
};

pub use crate::cards::{
    Card, CardState, Face, FaceId,
    DeckSource, StandardDeck, StaticDeck, NumberedDeck, SuitRankDeck,
};

pub use crate::board::{Board, BoardGenerator};

pub use crate::session::{
    GameSession, SessionPhase, SessionEpoch, Scoreboard, FlipLock, GameTimer,
    FlipOutcome, FlipResult, IgnoreReason,
    PendingResolution, ResolutionToken,
};

pub use crate::signals::{
    Signal, SoundCue, AudioSink, AudioError, SoundBoard, SilentAudio,
    Burst, CelebrationPlan, CelebrationSink, NoCelebration,
};

pub use crate::engine::MemoryGame;

pub use crate::driver::{GameDriver, Presenter, VirtualClock, Deferred};
