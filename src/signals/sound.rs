//! Sound cues and the audio sink.
//!
//! The engine names a cue; an `AudioSink` plays it. `SoundBoard` wraps a
//! sink with the global enable toggle and swallows playback failures, which
//! are logged and never reach the game.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Named audio cue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundCue {
    /// A card was turned face-up.
    Flip,
    /// Two face-up cards formed a pair.
    Match,
    /// Two face-up cards did not match.
    Mismatch,
    /// The last pair was found.
    Win,
    /// A button (start, reset, difficulty, sound on) was pressed.
    Select,
}

impl SoundCue {
    /// All cues.
    pub const ALL: [SoundCue; 5] = [
        SoundCue::Flip,
        SoundCue::Match,
        SoundCue::Mismatch,
        SoundCue::Win,
        SoundCue::Select,
    ];

    /// Cue name, matching the audio element ids (`flip-sound`, ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            SoundCue::Flip => "flip",
            SoundCue::Match => "match",
            SoundCue::Mismatch => "mismatch",
            SoundCue::Win => "win",
            SoundCue::Select => "select",
        }
    }
}

impl std::fmt::Display for SoundCue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Failure reported by an audio backend.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AudioError {
    /// The backend has no sample loaded for this cue.
    #[error("No audio loaded for cue {0}")]
    Unavailable(SoundCue),

    /// Playback was attempted and refused (autoplay policy, device error).
    #[error("Playback of {cue} failed: {reason}")]
    PlaybackFailed { cue: SoundCue, reason: String },
}

/// Something that can play sound cues.
pub trait AudioSink {
    /// Play a cue from the start.
    fn play(&mut self, cue: SoundCue) -> Result<(), AudioError>;
}

/// Audio sink that plays nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, _cue: SoundCue) -> Result<(), AudioError> {
        Ok(())
    }
}

/// An audio sink behind the global sound toggle.
#[derive(Clone, Debug)]
pub struct SoundBoard<A> {
    sink: A,
    enabled: bool,
}

impl<A: AudioSink> SoundBoard<A> {
    /// Wrap a sink.
    pub fn new(sink: A, enabled: bool) -> Self {
        Self { sink, enabled }
    }

    /// Is sound currently enabled?
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Turn sound on or off.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Play a cue if sound is enabled.
    ///
    /// Returns `true` only if the sink played the cue. Failures are logged.
    pub fn play(&mut self, cue: SoundCue) -> bool {
        if !self.enabled {
            debug!("Sound off, skipping {} cue", cue);
            return false;
        }

        match self.sink.play(cue) {
            Ok(()) => true,
            Err(e) => {
                warn!("Audio play failed: {}", e);
                false
            }
        }
    }

    /// Borrow the wrapped sink.
    pub fn sink(&self) -> &A {
        &self.sink
    }
}
