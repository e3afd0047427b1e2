//! Ball integration and reflection
//!
//! Deliberately simple: the ball moves, then any wall or paddle contact flips
//! the matching velocity component. Nothing pushes the ball back out, so for
//! a frame it can sit past a wall or inside a paddle. The flip takes effect
//! on the next frame's move.

use super::state::{Ball, Paddle, Playfield};

/// Advance the ball one frame against the walls and both paddles
pub fn step_ball(ball: Ball, playfield: Playfield, left: &Paddle, right: &Paddle) -> Ball {
    let mut ball = ball;
    ball.rect = ball.rect.translated(ball.vel);

    // Top/bottom walls
    if ball.rect.y <= 0 || ball.rect.y >= playfield.height - ball.rect.height {
        ball.vel.y = -ball.vel.y;
    }

    // Any paddle contact is a flat horizontal reversal, face or edge alike
    if ball.rect.intersects(&left.rect) || ball.rect.intersects(&right.rect) {
        ball.vel.x = -ball.vel.x;
        log::debug!("Paddle hit at ({}, {})", ball.rect.x, ball.rect.y);
    }

    ball
}
