//! Board layout and dealing.
//!
//! - `Board`: the grid of cards for one session
//! - `BoardGenerator`: selects faces from a `DeckSource` and shuffles pairs
//!
//! A board is regenerated for every session and never reused.

mod generator;
mod grid;

pub use generator::BoardGenerator;
pub use grid::Board;
