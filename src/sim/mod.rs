//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no variable time step
//! - Seeded RNG only, injected where randomness is needed
//! - Playfield passed explicitly, never global
//! - No rendering or platform dependencies

pub mod ball;
pub mod geometry;
pub mod paddle;
pub mod resize;
pub mod score;
pub mod serve;
pub mod state;
pub mod tick;

pub use ball::step_ball;
pub use geometry::Rect;
pub use paddle::{Direction, move_paddle};
pub use resize::resize;
pub use score::{ScoreEvent, judge};
pub use serve::serve_velocity;
pub use state::{
    Ball, GameEvent, GameState, Paddle, Playfield, RoundState, ScoreBoard, Side, Snapshot,
};
pub use tick::{InputEvent, TickInput, tick};
