//! Scoring: ball leaving the court on the left or right

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::state::{Ball, Playfield, Side};

/// A point was won
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEvent {
    pub scorer: Side,
}

/// Check the ball against the side boundaries.
///
/// On a point the ball goes back to center with a fixed reset velocity built
/// from `base_speed` magnitudes. The reset is not mirrored between sides:
/// a right-side point resets to `(+x, +y)`, a left-side point to `(-x, +y)`.
/// `Playfield` keeps a minimum size, so a recentered ball is never on a
/// boundary and calling this again before the next move is a no-op.
pub fn judge(ball: Ball, playfield: Playfield, base_speed: IVec2) -> (Option<ScoreEvent>, Ball) {
    let base = base_speed.abs();

    let (scorer, vel) = if ball.rect.x <= 0 {
        (Side::Right, IVec2::new(base.x, base.y))
    } else if ball.rect.x >= playfield.width - ball.rect.width {
        (Side::Left, IVec2::new(-base.x, base.y))
    } else {
        return (None, ball);
    };

    let reset = Ball {
        vel,
        ..ball.recentered(playfield)
    };
    (Some(ScoreEvent { scorer }), reset)
}
