//! Per-frame round loop
//!
//! Advances the game state by exactly one frame. Pacing is the caller's job.

use serde::{Deserialize, Serialize};

use super::ball::step_ball;
use super::paddle::{Direction, move_paddle};
use super::resize::resize;
use super::score::judge;
use super::serve::serve_velocity;
use super::state::{GameEvent, GameState, Paddle, RoundState, Side};

/// Abstract input events, already decoupled from any keyboard or window API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    MoveUp(Side),
    MoveDown(Side),
    ServeRequested,
    Resized(i32, i32),
    QuitRequested,
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TickInput {
    pub left: Direction,
    pub right: Direction,
    /// Start a round (space)
    pub serve: bool,
    /// New playfield size, if the surface changed this frame
    pub resize: Option<(i32, i32)>,
    /// Passed through for the caller; the simulation never acts on it
    pub quit: bool,
    /// Idle/demo mode - AI serves and plays both paddles
    pub idle_mode: bool,
}

impl TickInput {
    /// Fold one frame's worth of events. Up and down held on the same side
    /// cancel; the last resize wins.
    pub fn from_events(events: &[InputEvent]) -> Self {
        let mut up = [false; 2];
        let mut down = [false; 2];
        let slot = |side: Side| match side {
            Side::Left => 0,
            Side::Right => 1,
        };

        let mut input = Self::default();
        for event in events {
            match *event {
                InputEvent::MoveUp(side) => up[slot(side)] = true,
                InputEvent::MoveDown(side) => down[slot(side)] = true,
                InputEvent::ServeRequested => input.serve = true,
                InputEvent::Resized(w, h) => input.resize = Some((w, h)),
                InputEvent::QuitRequested => input.quit = true,
            }
        }
        input.left = Direction::from_keys(up[0], down[0]);
        input.right = Direction::from_keys(up[1], down[1]);
        input
    }

    pub fn direction(&self, side: Side) -> Direction {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Demo AI: chase the ball's vertical center, with a dead zone so the paddle
/// doesn't jitter once it's lined up
fn track_ball(paddle: &Paddle, state: &GameState) -> Direction {
    let paddle_mid = paddle.rect.y + paddle.rect.height / 2;
    let ball_mid = state.ball.rect.y + state.ball.rect.height / 2;
    let dead_zone = state.settings.paddle_speed.max(1);
    if ball_mid < paddle_mid - dead_zone {
        Direction::Up
    } else if ball_mid > paddle_mid + dead_zone {
        Direction::Down
    } else {
        Direction::Still
    }
}

/// Paddles, ball, then scoring for one in-play frame
fn play_frame(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    let speed = state.settings.paddle_speed;
    let height = state.playfield.height;
    for paddle in [&mut state.left, &mut state.right] {
        *paddle = move_paddle(*paddle, input.direction(paddle.side), speed, height);
    }

    state.ball = step_ball(state.ball, state.playfield, &state.left, &state.right);

    let (scored, ball) = judge(state.ball, state.playfield, state.settings.base_velocity());
    state.ball = ball;
    if let Some(point) = scored {
        let score = state.score.record(point.scorer);
        state.round = RoundState::Waiting;
        log::info!(
            "Point to {} (score {} - {})",
            point.scorer.as_str(),
            state.score.left,
            state.score.right
        );
        events.push(GameEvent::Scored {
            side: point.scorer,
            score,
        });
        events.push(GameEvent::RoundReset);
    }
}

/// Advance the game state by one frame, returning what happened
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    let mut input = *input;
    if input.idle_mode {
        if state.round == RoundState::Waiting {
            input.serve = true;
        }
        input.left = track_ball(&state.left, state);
        input.right = track_ball(&state.right, state);
    }
    let input = &input;

    state.frame += 1;

    // Surface changes apply in any round state
    if let Some((width, height)) = input.resize {
        let (playfield, left, right, ball) =
            resize(width, height, state.left, state.right, state.ball);
        state.playfield = playfield;
        state.left = left;
        state.right = right;
        state.ball = ball;
        events.push(GameEvent::Resized { playfield });
    }

    // Paddles and ball stay put until someone serves
    if state.round == RoundState::Waiting && input.serve {
        let velocity = serve_velocity(
            &mut state.rng,
            state.settings.serve_min_speed,
            state.settings.serve_max_speed,
        );
        state.ball.vel = velocity;
        state.round = RoundState::InPlay;
        log::info!("Serve at frame {}: velocity ({}, {})", state.frame, velocity.x, velocity.y);
        events.push(GameEvent::Served { velocity });
    }

    // The serve frame already plays
    if state.round == RoundState::InPlay {
        play_frame(state, input, &mut events);
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geometry::Rect;
    use crate::sim::state::ScoreBoard;
    use glam::IVec2;

    fn serve() -> TickInput {
        TickInput {
            serve: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_tick_waiting_to_in_play() {
        let mut state = GameState::new(12345);
        assert_eq!(state.round, RoundState::Waiting);

        // Tick without serve - should stay waiting and frozen
        let before = state.snapshot();
        let events = tick(&mut state, &TickInput::default());
        assert!(events.is_empty());
        assert_eq!(state.snapshot(), before);

        let events = tick(&mut state, &serve());
        assert_eq!(state.round, RoundState::InPlay);
        let v = state.ball.vel;
        assert_eq!(events, vec![GameEvent::Served { velocity: v }]);
        assert!((2..=4).contains(&v.x.abs()));
        assert!((2..=4).contains(&v.y.abs()));
    }

    #[test]
    fn test_serve_frame_moves_ball() {
        let mut state = GameState::new(1);
        let start = state.ball.rect.position();
        let input = TickInput {
            serve: true,
            left: Direction::Up,
            right: Direction::Down,
            ..Default::default()
        };
        tick(&mut state, &input);

        // From center nothing is hit, so the serve velocity is applied as-is
        let v = state.ball.vel;
        assert_eq!(state.ball.rect.position(), start + v);
        assert_eq!(state.left.rect.y, 194);
        assert_eq!(state.right.rect.y, 206);
    }

    #[test]
    fn test_narrow_surface_serve_does_not_score() {
        let mut state = GameState::new(9);
        let shrink = TickInput {
            resize: Some((10, 480)),
            ..Default::default()
        };
        tick(&mut state, &shrink);

        for _ in 0..3 {
            state.round = RoundState::Waiting;
            state.ball = state.ball.recentered(state.playfield);
            let events = tick(&mut state, &serve());
            assert!(!events.iter().any(|e| matches!(e, GameEvent::Scored { .. })));
            assert_eq!(state.round, RoundState::InPlay);
        }
        assert_eq!(state.score, ScoreBoard::default());
    }

    #[test]
    fn test_paddles_ignore_input_while_waiting() {
        let mut state = GameState::new(1);
        let input = TickInput {
            left: Direction::Up,
            right: Direction::Down,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.left.rect.y, 200);
        assert_eq!(state.right.rect.y, 200);
    }

    #[test]
    fn test_paddles_move_while_in_play() {
        let mut state = GameState::new(1);
        tick(&mut state, &serve());
        let input = TickInput {
            left: Direction::Up,
            right: Direction::Down,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.left.rect.y, 194);
        assert_eq!(state.right.rect.y, 206);
    }

    #[test]
    fn test_serve_ignored_while_in_play() {
        let mut state = GameState::new(3);
        tick(&mut state, &serve());
        let v = state.ball.vel;
        let events = tick(&mut state, &serve());
        assert!(!events.iter().any(|e| matches!(e, GameEvent::Served { .. })));
        assert_eq!(state.ball.vel.abs(), v.abs());
    }

    #[test]
    fn test_point_returns_to_waiting() {
        let mut state = GameState::new(5);
        tick(&mut state, &serve());
        state.ball.rect = Rect::new(2, 240, 10, 10);
        state.ball.vel = IVec2::new(-3, 2);

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(
            events,
            vec![
                GameEvent::Scored {
                    side: Side::Right,
                    score: 1
                },
                GameEvent::RoundReset
            ]
        );
        assert_eq!(state.round, RoundState::Waiting);
        assert_eq!(state.score.right, 1);
        assert_eq!(state.score.left, 0);
        assert_eq!(state.ball.rect, Rect::new(315, 235, 10, 10));
        assert_eq!(state.ball.vel, IVec2::new(3, 2));
    }

    #[test]
    fn test_resize_applies_while_waiting() {
        let mut state = GameState::new(5);
        let input = TickInput {
            resize: Some((800, 600)),
            ..Default::default()
        };
        let events = tick(&mut state, &input);
        assert_eq!(events.len(), 1);
        assert_eq!(state.playfield.width, 800);
        assert_eq!(state.right.rect.x, 740);
        assert_eq!(state.ball.rect.position(), IVec2::new(395, 295));
        assert_eq!(state.round, RoundState::Waiting);
    }

    #[test]
    fn test_from_events() {
        let input = TickInput::from_events(&[
            InputEvent::MoveUp(Side::Left),
            InputEvent::MoveDown(Side::Right),
            InputEvent::MoveUp(Side::Right),
            InputEvent::ServeRequested,
            InputEvent::Resized(100, 100),
            InputEvent::Resized(200, 150),
        ]);
        assert_eq!(input.left, Direction::Up);
        assert_eq!(input.right, Direction::Still);
        assert!(input.serve);
        assert!(!input.quit);
        assert_eq!(input.resize, Some((200, 150)));

        let quit = TickInput::from_events(&[InputEvent::QuitRequested]);
        assert!(quit.quit);
    }

    #[test]
    fn test_idle_mode_serves_and_tracks() {
        let mut state = GameState::new(77);
        let idle = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        tick(&mut state, &idle);
        assert_eq!(state.round, RoundState::InPlay);

        state.ball.rect.y = 20;
        tick(&mut state, &idle);
        assert!(state.left.rect.y < 200);
        assert!(state.right.rect.y < 200);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);
        let idle = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        for _ in 0..2000 {
            let e1 = tick(&mut state1, &idle);
            let e2 = tick(&mut state2, &idle);
            assert_eq!(e1, e2);
        }
        assert_eq!(state1.snapshot(), state2.snapshot());
        assert_eq!(state1.frame, 2000);
    }
}
