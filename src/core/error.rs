//! Engine error types.
//!
//! Only configuration and dealing can fail. Clicks on cards that cannot be
//! flipped are reported as ignored outcomes, not errors.

use thiserror::Error;

/// Errors surfaced by the game engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The deck source cannot supply enough distinct faces for the board.
    #[error("Insufficient tokens: board needs {required} distinct faces, deck has {available}")]
    InsufficientTokens { required: usize, available: usize },

    /// Difficulty label outside the supported set.
    #[error("Unsupported difficulty: {0:?}")]
    UnsupportedDifficulty(String),

    /// Grid dimension outside the supported set.
    #[error("Unsupported grid size: {0}")]
    UnsupportedGridSize(u8),

    /// A hand-built board layout does not form pairs on the grid.
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),
}
