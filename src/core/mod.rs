//! Core engine types: RNG, configuration, errors.
//!
//! These are shared by every other module and carry no game state of their
//! own.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{Difficulty, GridSize, SessionConfig, Timings};
pub use error::GameError;
pub use rng::GameRng;
