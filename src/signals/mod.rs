//! Signals the engine emits for its collaborators.
//!
//! The engine never renders, plays audio or draws confetti itself. Each
//! operation returns a list of `Signal`s in the order they should take
//! effect; a binding layer routes them:
//!
//! - `PlaySound` → an `AudioSink` (via `SoundBoard`)
//! - `Celebrate` → a `CelebrationSink`
//! - `ScheduleResolution`, `TimerStarted` → a scheduler
//! - everything else → the presentation layer
//!
//! ## Design Philosophy
//!
//! Signals are plain data. They can be recorded, asserted on in tests, or
//! serialized across a JS bridge without touching the game state.

mod celebration;
mod sound;

pub use celebration::{Burst, CelebrationPlan, CelebrationSink, NoCelebration, Origin};
pub use sound::{AudioError, AudioSink, SilentAudio, SoundBoard, SoundCue};

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::cards::FaceId;
use crate::core::Difficulty;
use crate::session::{PendingResolution, Scoreboard, SessionEpoch};

/// Something a collaborator should act on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Signal {
    /// A fresh board was dealt; render every card face-down.
    BoardDealt(Board),

    /// Counters changed; refresh the moves, matches and timer displays.
    CountersChanged(Scoreboard),

    /// A card turned face-up.
    CardRevealed { position: usize, face: FaceId },

    /// Two face-up cards were confirmed as a pair.
    CardsMatched { positions: [usize; 2] },

    /// A mismatched pair turned face-down again.
    CardsConcealed { positions: [usize; 2] },

    /// Highlight a reverted pair as wrong for a moment.
    ErrorFlash { positions: [usize; 2], duration_ms: u32 },

    /// Remove the error highlight.
    ErrorFlashCleared { positions: [usize; 2] },

    /// Pulse the matched-pairs counter.
    PulseMatches { duration_ms: u32 },

    /// Stop pulsing the matched-pairs counter.
    PulseEnded,

    /// The session timer started; tick it every interval under this epoch.
    TimerStarted { epoch: SessionEpoch },

    /// The timer advanced.
    TimerTicked { elapsed_secs: u32 },

    /// The session timer stopped (win or reset); drop its ticks.
    TimerStopped { epoch: SessionEpoch },

    /// Resolve this mismatch after its delay.
    ScheduleResolution(PendingResolution),

    /// Play an audio cue.
    PlaySound(SoundCue),

    /// Fire confetti.
    Celebrate(CelebrationPlan),

    /// Show the win panel with final stats after `delay_ms`.
    ShowWinPanel { moves: u32, elapsed_secs: u32, delay_ms: u32 },

    /// Hide the win panel.
    HideWinPanel,

    /// Mark this difficulty as the selected one.
    DifficultySelected(Difficulty),

    /// The sound toggle changed.
    SoundToggled(bool),
}

/// Collect the sound cues in a signal list, in order.
#[must_use]
pub fn sound_cues(signals: &[Signal]) -> Vec<SoundCue> {
    signals
        .iter()
        .filter_map(|s| match s {
            Signal::PlaySound(cue) => Some(*cue),
            _ => None,
        })
        .collect()
}
