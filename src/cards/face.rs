//! Card faces - the token values that pairs share.
//!
//! A `Face` is what the player tries to match. Two cards on a board carry
//! the same `FaceId`; the presentation layer resolves the id to a name and
//! an image.

use serde::{Deserialize, Serialize};

/// Image shown on the back of every card.
pub const CARD_BACK_IMAGE: &str = "faces/back.svg";

/// Identifier for a face within a deck source.
///
/// Opaque to the engine: two cards match if and only if their ids are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FaceId(pub u32);

impl FaceId {
    /// Create a new face ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for FaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Face({})", self.0)
    }
}

/// A face definition: identity plus the name the UI renders.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Face {
    /// Matching identity.
    pub id: FaceId,

    /// Display name; doubles as the image file name.
    pub name: String,
}

impl Face {
    /// Create a new face.
    pub fn new(id: FaceId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Path of the face image relative to the asset root.
    #[must_use]
    pub fn image_path(&self) -> String {
        format!("faces/{}", self.name)
    }
}

/// Playing card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Lowercase suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "clubs",
            Suit::Diamonds => "diamonds",
            Suit::Hearts => "hearts",
            Suit::Spades => "spades",
        }
    }
}

/// Playing card rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks, ace low.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Name as used in card image files ("ace", "2".."10", "jack", ...).
    #[must_use]
    pub fn name(self) -> String {
        match self {
            Rank::Ace => "ace".to_string(),
            Rank::Jack => "jack".to_string(),
            Rank::Queen => "queen".to_string(),
            Rank::King => "king".to_string(),
            pip => (pip as u8).to_string(),
        }
    }

    /// Is this a court card (jack, queen, king)?
    #[must_use]
    pub const fn is_court(self) -> bool {
        matches!(self, Rank::Jack | Rank::Queen | Rank::King)
    }
}
