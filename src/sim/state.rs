//! Game state and core simulation types
//!
//! All state that must be kept for determinism lives here. The orchestrator
//! in `tick` owns a `GameState` exclusively and hands pieces of it to the
//! individual systems by value.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::consts::MIN_PLAYFIELD_SIZE;
use crate::settings::Settings;

/// Which half of the court a paddle (or a point) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Current playfield size, handed explicitly to every system that needs it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: i32,
    pub height: i32,
}

impl Playfield {
    /// Dimensions are raised to `MIN_PLAYFIELD_SIZE`
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(MIN_PLAYFIELD_SIZE),
            height: height.max(MIN_PLAYFIELD_SIZE),
        }
    }

    /// Grow if needed so a centered `ball_size` ball sits strictly inside
    /// both goal lines, and recentering can't land on a boundary
    pub fn fitting(self, ball_size: i32) -> Self {
        let min = 2 * ball_size.max(1) + 2;
        Self {
            width: self.width.max(min),
            height: self.height.max(min),
        }
    }
}

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundState {
    /// Ball parked at center, waiting for a serve; paddles frozen
    #[default]
    Waiting,
    /// Ball moving, paddles respond to input
    InPlay,
}

/// A player's paddle. Only `rect.y` moves during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    pub side: Side,
    /// Gap between the paddle and its side edge
    pub margin: i32,
}

impl Paddle {
    /// Paddle vertically centered on its side of the playfield
    pub fn new(side: Side, width: i32, height: i32, margin: i32, playfield: Playfield) -> Self {
        let y = playfield.height / 2 - height / 2;
        let x = Self::anchor_x(side, width, margin, playfield);
        Self {
            rect: Rect::new(x, y, width, height),
            side,
            margin,
        }
    }

    /// Fixed horizontal position for a side
    pub fn anchor_x(side: Side, width: i32, margin: i32, playfield: Playfield) -> i32 {
        match side {
            Side::Left => margin,
            Side::Right => playfield.width - margin - width,
        }
    }
}

/// The ball: a square box plus an integer velocity in pixels per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    pub vel: IVec2,
}

impl Ball {
    /// Ball parked at the center of the playfield
    pub fn centered(size: i32, vel: IVec2, playfield: Playfield) -> Self {
        Self {
            rect: Rect::centered_in(size, size, playfield),
            vel,
        }
    }

    /// Same ball moved back to the center, size kept
    pub fn recentered(self, playfield: Playfield) -> Self {
        Self {
            rect: Rect::centered_in(self.rect.width, self.rect.height, playfield),
            ..self
        }
    }
}

/// Points per side. Only ever goes up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub left: u32,
    pub right: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Award a point, returning the side's new total
    pub fn record(&mut self, side: Side) -> u32 {
        let slot = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        *slot = slot.saturating_add(1);
        *slot
    }
}

/// Things that happened during a tick, for renderer/audio collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A round started with this velocity
    Served { velocity: IVec2 },
    /// `side` won a point and now has `score`
    Scored { side: Side, score: u32 },
    /// Ball back at center, round waiting for a serve
    RoundReset,
    /// Playfield changed and entities were recentered
    Resized { playfield: Playfield },
}

/// Read-only view of everything a renderer needs after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub playfield: Playfield,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub score: ScoreBoard,
    pub round: RoundState,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Tuning this run was started with
    pub settings: Settings,
    pub playfield: Playfield,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub score: ScoreBoard,
    pub round: RoundState,
    /// Simulation tick counter
    pub frame: u64,
    /// Serve RNG, seeded from `settings.seed`
    pub rng: Pcg32,
}

impl GameState {
    /// Create a new game with default tuning and the given serve seed
    pub fn new(seed: u64) -> Self {
        Self::with_settings(Settings {
            seed,
            ..Settings::default()
        })
    }

    /// Lay out paddles and ball on the initial playfield
    pub fn with_settings(settings: Settings) -> Self {
        let playfield = Playfield::new(settings.playfield_width, settings.playfield_height)
            .fitting(settings.ball_size);
        let paddle = |side| {
            Paddle::new(
                side,
                settings.paddle_width,
                settings.paddle_height,
                settings.paddle_margin,
                playfield,
            )
        };
        let left = paddle(Side::Left);
        let right = paddle(Side::Right);
        let ball = Ball::centered(settings.ball_size, settings.base_velocity(), playfield);

        Self {
            rng: Pcg32::seed_from_u64(settings.seed),
            settings,
            playfield,
            left,
            right,
            ball,
            score: ScoreBoard::new(),
            round: RoundState::Waiting,
            frame: 0,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            playfield: self.playfield,
            left: self.left,
            right: self.right,
            ball: self.ball,
            score: self.score,
            round: self.round,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::serve::serve_velocity;

    #[test]
    fn test_initial_layout_matches_classic_court() {
        let state = GameState::new(1);
        assert_eq!(state.playfield, Playfield::new(640, 480));
        assert_eq!(state.left.rect, Rect::new(50, 200, 10, 80));
        assert_eq!(state.right.rect, Rect::new(580, 200, 10, 80));
        assert_eq!(state.ball.rect, Rect::new(315, 235, 10, 10));
        assert_eq!(state.ball.vel, IVec2::new(3, 2));
        assert_eq!(state.round, RoundState::Waiting);
        assert_eq!(state.score, ScoreBoard::default());
    }

    #[test]
    fn test_scoreboard_record() {
        let mut score = ScoreBoard::new();
        assert_eq!(score.record(Side::Right), 1);
        assert_eq!(score.record(Side::Right), 2);
        assert_eq!(score.record(Side::Left), 1);
        assert_eq!(score.get(Side::Left), 1);
        assert_eq!(score.get(Side::Right), 2);
    }

    #[test]
    fn test_playfield_minimum_size() {
        let p = Playfield::new(0, -5);
        assert_eq!(p.width, MIN_PLAYFIELD_SIZE);
        assert_eq!(p.height, MIN_PLAYFIELD_SIZE);

        let big_ball = Playfield::new(30, 480).fitting(20);
        assert_eq!(big_ball, Playfield::new(42, 480));
    }

    #[test]
    fn test_large_ball_settings_grow_playfield() {
        let state = GameState::with_settings(Settings {
            playfield_width: 40,
            ball_size: 25,
            ..Settings::default()
        });
        assert_eq!(state.playfield.width, 52);
        assert!(state.ball.rect.x > 0);
        assert!(state.ball.rect.x < state.playfield.width - state.ball.rect.width);
    }

    #[test]
    fn test_state_survives_json_roundtrip() {
        let state = GameState::new(42);
        let json = serde_json::to_string(&state).unwrap();
        let mut restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.snapshot(), state.snapshot());

        // RNG resumes mid-stream
        let mut original = state.clone();
        for _ in 0..5 {
            assert_eq!(
                serve_velocity(&mut restored.rng, 2, 4),
                serve_velocity(&mut original.rng, 2, 4)
            );
        }
    }
}
