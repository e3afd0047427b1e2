//! Score label for the renderer
//!
//! The simulation never draws. These helpers give whoever does the text to
//! rasterize and where to put it once its pixel size is known.

use crate::consts::SCORE_LABEL_TOP;
use crate::sim::{Playfield, Rect, ScoreBoard};

/// "Score: L - R"
pub fn score_label(score: &ScoreBoard) -> String {
    format!("Score: {} - {}", score.left, score.right)
}

/// Horizontally centered, a fixed distance from the top edge
pub fn score_label_rect(playfield: Playfield, text_width: i32, text_height: i32) -> Rect {
    Rect::new(
        (playfield.width - text_width) / 2,
        SCORE_LABEL_TOP,
        text_width,
        text_height,
    )
}
