//! Scheduling and signal routing around the engine.
//!
//! The engine is synchronous and owns no timers. This module supplies the
//! missing half:
//!
//! - `VirtualClock`: deterministic queue of deferred jobs
//! - `Presenter`: the rendering collaborator
//! - `GameDriver`: feeds input to the engine and routes its signals
//!
//! ## Example Usage
//!
//! ```
//! use memory_match::cards::StandardDeck;
//! use memory_match::core::SessionConfig;
//! use memory_match::driver::GameDriver;
//! use memory_match::engine::MemoryGame;
//! use memory_match::signals::{NoCelebration, SilentAudio, Signal};
//!
//! let game = MemoryGame::new(SessionConfig::new().with_seed(1), StandardDeck::new()).unwrap();
//! let mut driver = GameDriver::new(game, Vec::<Signal>::new(), SilentAudio, NoCelebration);
//!
//! driver.click(0);
//! driver.advance(3_000);
//! assert_eq!(driver.game().scoreboard().elapsed_secs, 3);
//! ```

mod clock;
mod game_driver;

pub use clock::{Deferred, JobId, VirtualClock};
pub use game_driver::{GameDriver, Presenter};
