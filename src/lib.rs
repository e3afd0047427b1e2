//! Rect Pong - classic two-paddle Pong
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, scoring, round flow)
//! - `settings`: Data-driven gameplay tuning
//! - `hud`: Score label layout for whatever draws the frame

pub mod hud;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed frame rate the simulation is advanced at (one tick per frame)
    pub const FRAME_RATE: u32 = 60;

    /// Default playfield dimensions (pixels)
    pub const DEFAULT_WIDTH: i32 = 640;
    pub const DEFAULT_HEIGHT: i32 = 480;

    /// Paddle defaults
    pub const PADDLE_WIDTH: i32 = 10;
    pub const PADDLE_HEIGHT: i32 = 80;
    /// Pixels per frame while a direction is held
    pub const PADDLE_SPEED: i32 = 6;
    /// Horizontal gap between a side edge and its paddle
    pub const PADDLE_MARGIN: i32 = 50;

    /// Ball defaults (square)
    pub const BALL_SIZE: i32 = 10;
    /// Smallest playfield side: a centered default ball keeps a pixel of
    /// clearance from both goals
    pub const MIN_PLAYFIELD_SIZE: i32 = 2 * BALL_SIZE + 2;
    /// Velocity restored after a point (pixels/frame)
    pub const BALL_SPEED_X: i32 = 3;
    pub const BALL_SPEED_Y: i32 = 2;

    /// Serve magnitude bounds per axis (inclusive)
    pub const SERVE_MIN_SPEED: i32 = 2;
    pub const SERVE_MAX_SPEED: i32 = 4;

    /// Distance of the score label from the top edge
    pub const SCORE_LABEL_TOP: i32 = 10;
}
