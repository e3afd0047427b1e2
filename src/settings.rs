//! Gameplay settings
//!
//! Persisted as JSON next to the binary. Everything defaults to the classic
//! 640x480 layout in `consts`.

use std::path::Path;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    /// Initial playfield width (pixels)
    pub playfield_width: i32,
    /// Initial playfield height (pixels)
    pub playfield_height: i32,

    // === Paddles ===
    pub paddle_width: i32,
    pub paddle_height: i32,
    /// Pixels per frame while a key is held
    pub paddle_speed: i32,
    /// Gap between each paddle and its side edge
    pub paddle_margin: i32,

    // === Ball ===
    pub ball_size: i32,
    /// Velocity restored after each point
    pub ball_speed_x: i32,
    pub ball_speed_y: i32,
    /// Serve magnitude range per axis (inclusive)
    pub serve_min_speed: i32,
    pub serve_max_speed: i32,

    // === Loop ===
    /// Frames per second the caller should tick at
    pub frame_rate: u32,
    /// Serve RNG seed
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            playfield_width: DEFAULT_WIDTH,
            playfield_height: DEFAULT_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_margin: PADDLE_MARGIN,

            ball_size: BALL_SIZE,
            ball_speed_x: BALL_SPEED_X,
            ball_speed_y: BALL_SPEED_Y,
            serve_min_speed: SERVE_MIN_SPEED,
            serve_max_speed: SERVE_MAX_SPEED,

            frame_rate: FRAME_RATE,
            seed: 0,
        }
    }
}

impl Settings {
    /// Reset velocity as a vector
    pub fn base_velocity(&self) -> IVec2 {
        IVec2::new(self.ball_speed_x, self.ball_speed_y)
    }

    /// Frame budget in milliseconds
    pub fn frame_millis(&self) -> u64 {
        1000 / u64::from(self.frame_rate.max(1))
    }

    /// Parse settings JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Settings::sanitized)
    }

    pub fn to_json(&self) -> String {
        // Plain struct of numbers, serialization can't fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Raise sizes and serve bounds to at least one so every box stays
    /// non-empty and every serve moves on both axes
    fn sanitized(mut self) -> Self {
        self.playfield_width = self.playfield_width.max(1);
        self.playfield_height = self.playfield_height.max(1);
        self.paddle_width = self.paddle_width.max(1);
        self.paddle_height = self.paddle_height.max(1);
        self.ball_size = self.ball_size.max(1);
        self.paddle_speed = self.paddle_speed.max(0);
        // A zero serve component would never reach a goal
        self.serve_min_speed = self.serve_min_speed.max(1);
        self.serve_max_speed = self.serve_max_speed.max(1);
        self
    }
}
