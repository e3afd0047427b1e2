//! Axis-aligned rectangles
//!
//! Everything on the playfield is a box: paddles, the ball, even the score
//! label. Collision is plain AABB overlap.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::state::Playfield;

/// An axis-aligned box in playfield pixels (origin top-left, y grows down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A `width`×`height` box centered in the playfield (integer division,
    /// so odd leftovers round toward the top-left)
    pub fn centered_in(width: i32, height: i32, playfield: Playfield) -> Self {
        Self::new(
            playfield.width / 2 - width / 2,
            playfield.height / 2 - height / 2,
            width,
            height,
        )
    }

    /// Exclusive right edge
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    #[inline]
    pub fn position(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    /// Shift by a velocity
    #[inline]
    pub fn translated(self, delta: IVec2) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
            ..self
        }
    }

    /// Half-open AABB overlap: boxes that only share an edge do not intersect,
    /// and empty boxes never intersect anything.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.width <= 0 || self.height <= 0 || other.width <= 0 || other.height <= 0 {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}
