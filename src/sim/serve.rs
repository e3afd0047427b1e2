//! Serve velocity
//!
//! The random source is always passed in so a run is reproducible from its
//! seed and tests can drive it with a fixed `Pcg32`.

use glam::IVec2;
use rand::Rng;

/// Random serve velocity: each axis independently gets a fair coin-flip sign
/// and a uniform magnitude in `[min_speed, max_speed]` (bounds may be given in
/// either order).
pub fn serve_velocity<R: Rng + ?Sized>(rng: &mut R, min_speed: i32, max_speed: i32) -> IVec2 {
    let (lo, hi) = if min_speed <= max_speed {
        (min_speed, max_speed)
    } else {
        (max_speed, min_speed)
    };

    let mut axis = || {
        let sign = if rng.random_bool(0.5) { 1 } else { -1 };
        sign * rng.random_range(lo..=hi)
    };
    let x = axis();
    let y = axis();
    IVec2::new(x, y)
}
