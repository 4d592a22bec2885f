//! Session configuration types.
//!
//! - `GridSize`: Board dimension (4x4 or 6x6)
//! - `Difficulty`: User-facing level mapped onto a grid size
//! - `Timings`: Fixed delays the engine asks its scheduler for
//! - `SessionConfig`: Combines all configuration
//!
//! The engine reads these at reset time; changing difficulty always deals a
//! fresh board.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Board dimension. The board is `dimension x dimension` cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct GridSize(u8);

impl GridSize {
    /// 4x4 board, 8 pairs.
    pub const FOUR: GridSize = GridSize(4);
    /// 6x6 board, 18 pairs.
    pub const SIX: GridSize = GridSize(6);

    /// Create a grid size, rejecting anything but 4 or 6.
    pub fn new(dimension: u8) -> Result<Self, GameError> {
        match dimension {
            4 | 6 => Ok(Self(dimension)),
            other => Err(GameError::UnsupportedGridSize(other)),
        }
    }

    /// Cards per row (and per column).
    #[must_use]
    pub const fn dimension(self) -> u8 {
        self.0
    }

    /// Total cards on the board.
    #[must_use]
    pub const fn card_count(self) -> usize {
        (self.0 as usize) * (self.0 as usize)
    }

    /// Number of pairs to find.
    #[must_use]
    pub const fn pair_count(self) -> usize {
        self.card_count() / 2
    }

    /// Layout class name the presentation layer applies to the card container.
    #[must_use]
    pub fn layout_class(self) -> String {
        format!("grid-{0}x{0}", self.0)
    }
}

impl TryFrom<u8> for GridSize {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GridSize> for u8 {
    fn from(grid: GridSize) -> Self {
        grid.0
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{0}x{0}", self.0)
    }
}

/// Difficulty level selectable from the UI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 4x4 board.
    #[default]
    Easy,
    /// 6x6 board.
    Medium,
}

impl Difficulty {
    /// All selectable levels, in display order.
    pub const ALL: [Difficulty; 2] = [Difficulty::Easy, Difficulty::Medium];

    /// Grid size dealt for this level.
    #[must_use]
    pub const fn grid_size(self) -> GridSize {
        match self {
            Difficulty::Easy => GridSize::FOUR,
            Difficulty::Medium => GridSize::SIX,
        }
    }

    /// Label used by the UI (also the difficulty button id).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
        }
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.label() == s)
            .ok_or_else(|| GameError::UnsupportedDifficulty(s.to_string()))
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Fixed delays, in milliseconds.
///
/// Only `mismatch_revert_ms` and `tick_interval_ms` affect game state; the
/// rest are cosmetic and forwarded to the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timings {
    /// Delay before a mismatched pair flips back face-down.
    pub mismatch_revert_ms: u32,
    /// How long the error highlight stays on a reverted pair.
    pub error_flash_ms: u32,
    /// Delay between the winning match and the win panel.
    pub win_panel_delay_ms: u32,
    /// Interval between timer ticks.
    pub tick_interval_ms: u32,
    /// How long the matched-pairs counter pulses after a match.
    pub match_pulse_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            mismatch_revert_ms: 1000,
            error_flash_ms: 500,
            win_panel_delay_ms: 500,
            tick_interval_ms: 1000,
            match_pulse_ms: 500,
        }
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Starting difficulty.
    pub difficulty: Difficulty,

    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,

    /// Fixed delays.
    #[serde(default)]
    pub timings: Timings,

    /// Whether sound cues start enabled.
    pub sound_enabled: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            seed: None,
            timings: Timings::default(),
            sound_enabled: true,
        }
    }
}

impl SessionConfig {
    /// Create the default configuration (easy, sound on, OS seed).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Use a fixed seed for reproducible boards.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Override the fixed delays.
    #[must_use]
    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    /// Start with sound disabled.
    #[must_use]
    pub fn muted(mut self) -> Self {
        self.sound_enabled = false;
        self
    }
}
