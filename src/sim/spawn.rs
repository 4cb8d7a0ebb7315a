//! Target placement

use rand::Rng;
use rand_pcg::Pcg32;

/// Pick a vertical center for a target of the given height.
///
/// Draws uniformly over the arena, then clamps so the target's extent
/// `[y - size/2, y + size/2]` stays inside `[-1, 1]`. Valid for any
/// height in `(0, 2]`; a full-height target always lands dead center.
pub fn place_target(rng: &mut Pcg32, size: f32) -> f32 {
    let sample: f32 = rng.random_range(-1.0..=1.0);
    let half = size / 2.0;

    if sample - half < -1.0 {
        -1.0 + half
    } else if sample + half > 1.0 {
        1.0 - half
    } else {
        sample
    }
}
