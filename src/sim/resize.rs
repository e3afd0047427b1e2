//! Playfield resize
//!
//! A resize snaps everything back to its starting layout for the new size.
//! In-flight positions are dropped; velocities and score are left alone.

use super::state::{Ball, Paddle, Playfield};

/// Recompute layout for a `width`×`height` playfield
pub fn resize(
    width: i32,
    height: i32,
    left: Paddle,
    right: Paddle,
    ball: Ball,
) -> (Playfield, Paddle, Paddle, Ball) {
    let playfield = Playfield::new(width, height).fitting(ball.rect.width);
    let place = |paddle: Paddle| {
        let mut placed = paddle;
        placed.rect.y = playfield.height / 2 - paddle.rect.height / 2;
        placed.rect.x = Paddle::anchor_x(paddle.side, paddle.rect.width, paddle.margin, playfield);
        placed
    };

    log::info!("Playfield resized to {}x{}", playfield.width, playfield.height);
    (playfield, place(left), place(right), ball.recentered(playfield))
}
