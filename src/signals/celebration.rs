//! Confetti bursts fired on a win.
//!
//! The engine only describes the bursts. Drawing particles is the job of a
//! `CelebrationSink`.

use serde::{Deserialize, Serialize};

/// Where a burst is emitted from, as fractions of the viewport.
///
/// `x: None` lets the effect library pick its default (centre).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Origin {
    pub x: Option<f32>,
    pub y: f32,
}

/// One confetti burst.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Burst {
    /// Delay after the win, in milliseconds.
    pub offset_ms: u32,
    pub particle_count: u32,
    /// Spread in degrees.
    pub spread: u32,
    /// Launch angle in degrees; `None` is straight up.
    pub angle: Option<u32>,
    pub origin: Origin,
    /// CSS colors. Empty means library defaults.
    pub colors: Vec<String>,
}

/// The full sequence of bursts for one win.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CelebrationPlan {
    pub bursts: Vec<Burst>,
}

impl CelebrationPlan {
    /// Three bursts: a centre shower, then left and right cannons.
    #[must_use]
    pub fn standard() -> Self {
        let colors = ["#ff0000", "#00ff00", "#0000ff", "#ffff00", "#ff00ff", "#00ffff"]
            .iter()
            .map(|c| c.to_string())
            .collect();

        Self {
            bursts: vec![
                Burst {
                    offset_ms: 0,
                    particle_count: 150,
                    spread: 70,
                    angle: None,
                    origin: Origin { x: None, y: 0.6 },
                    colors,
                },
                Burst {
                    offset_ms: 250,
                    particle_count: 100,
                    spread: 55,
                    angle: Some(60),
                    origin: Origin { x: Some(0.0), y: 0.6 },
                    colors: Vec::new(),
                },
                Burst {
                    offset_ms: 400,
                    particle_count: 100,
                    spread: 55,
                    angle: Some(120),
                    origin: Origin { x: Some(1.0), y: 0.6 },
                    colors: Vec::new(),
                },
            ],
        }
    }

    /// Total particles across all bursts.
    #[must_use]
    pub fn total_particles(&self) -> u32 {
        self.bursts.iter().map(|b| b.particle_count).sum()
    }
}

/// Renders confetti bursts.
pub trait CelebrationSink {
    fn fire(&mut self, burst: &Burst);
}

/// Sink that draws nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCelebration;

impl CelebrationSink for NoCelebration {
    fn fire(&mut self, _burst: &Burst) {}
}
