//! Paddle movement

use serde::{Deserialize, Serialize};

use super::state::Paddle;

/// Vertical input for one paddle during one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Up,
    #[default]
    Still,
    Down,
}

impl Direction {
    /// -1 for up (screen y shrinks), +1 for down
    pub fn sign(self) -> i32 {
        match self {
            Direction::Up => -1,
            Direction::Still => 0,
            Direction::Down => 1,
        }
    }

    /// Combine held keys; pressing both cancels out
    pub fn from_keys(up: bool, down: bool) -> Self {
        match (up, down) {
            (true, false) => Direction::Up,
            (false, true) => Direction::Down,
            _ => Direction::Still,
        }
    }
}

/// Move a paddle by `speed` pixels in `direction`, clamped so it stays fully
/// inside `[0, playfield_height]`.
///
/// If the playfield is shorter than the paddle the top bound wins and the
/// paddle sits at y = 0.
pub fn move_paddle(paddle: Paddle, direction: Direction, speed: i32, playfield_height: i32) -> Paddle {
    let max_y = (playfield_height - paddle.rect.height).max(0);
    let y = paddle
        .rect
        .y
        .saturating_add(direction.sign().saturating_mul(speed))
        .clamp(0, max_y);

    let mut moved = paddle;
    moved.rect.y = y;
    moved
}
