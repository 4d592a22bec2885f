//! Card instances - a face at a board position.
//!
//! `Card` tracks the per-card flip state. Transitions are guarded:
//!
//! ```text
//! FaceDown ──reveal──▶ FaceUp ──conceal──▶ FaceDown
//!                        │
//!                        └──mark_matched──▶ Matched (terminal)
//! ```
//!
//! Each transition method returns `false` and leaves the card untouched when
//! called from the wrong state.

use serde::{Deserialize, Serialize};

use super::face::FaceId;

/// Flip state of a single card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardState {
    /// Back showing; can be flipped.
    #[default]
    FaceDown,
    /// Face showing, awaiting a pair evaluation.
    FaceUp,
    /// Part of a found pair. Terminal.
    Matched,
}

/// A card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Index in the board, row-major.
    pub position: usize,

    /// Face this card shows when flipped.
    pub face: FaceId,

    state: CardState,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(position: usize, face: FaceId) -> Self {
        Self {
            position,
            face,
            state: CardState::FaceDown,
        }
    }

    /// Current flip state.
    #[must_use]
    pub fn state(&self) -> CardState {
        self.state
    }

    /// Can this card be flipped right now (ignoring the flip-lock)?
    #[must_use]
    pub fn is_face_down(&self) -> bool {
        self.state == CardState::FaceDown
    }

    /// Is the face visible (face-up or matched)?
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.state != CardState::FaceDown
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.state == CardState::Matched
    }

    /// Do two cards form a pair?
    #[must_use]
    pub fn matches(&self, other: &Card) -> bool {
        self.face == other.face
    }

    /// FaceDown → FaceUp.
    pub fn reveal(&mut self) -> bool {
        self.transition(CardState::FaceDown, CardState::FaceUp)
    }

    /// FaceUp → FaceDown.
    pub fn conceal(&mut self) -> bool {
        self.transition(CardState::FaceUp, CardState::FaceDown)
    }

    /// FaceUp → Matched.
    pub fn mark_matched(&mut self) -> bool {
        self.transition(CardState::FaceUp, CardState::Matched)
    }

    fn transition(&mut self, from: CardState, to: CardState) -> bool {
        if self.state != from {
            return false;
        }
        self.state = to;
        true
    }
}
