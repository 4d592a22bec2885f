//! Card system: faces, deck sources, and card instances.
//!
//! ## Key Types
//!
//! - `FaceId`: Matching identity shared by exactly two cards on a board
//! - `Face`: Face id plus display name
//! - `DeckSource`: Supplier of candidate faces
//! - `Card`: A face at a board position with its flip state

pub mod card;
pub mod deck;
pub mod face;

pub use card::{Card, CardState};
pub use deck::{DeckSource, NumberedDeck, StandardDeck, StaticDeck, SuitRankDeck};
pub use face::{Face, FaceId, Rank, Suit, CARD_BACK_IMAGE};
