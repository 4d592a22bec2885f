//! Game engine: the public entry point.
//!
//! `MemoryGame` wires the board generator, the session state machine and
//! the user preferences together. Input sources call its operations; a
//! binding layer (see `driver`) routes the returned signals.

mod game;

pub use game::MemoryGame;
