//! Growth tick
//!
//! Advances every planted, not-yet-mature tile by a random step.

use rand::Rng;

use super::grid::Grid;
use crate::consts::MAX_GROWTH;

/// Smallest growth step per tick
pub const GROWTH_STEP_MIN: f64 = 1.0;
/// Width of the step range; steps fall in `[1, 7)`
pub const GROWTH_STEP_SPAN: f64 = 6.0;

/// Advance growth on all planted tiles below `MAX_GROWTH`.
///
/// Each eligible tile gains `1 + U*6` (U uniform in `[0, 1)`), clamped once to
/// `MAX_GROWTH`. Blooms are never harvested automatically. Returns how many
/// tiles advanced.
pub fn tick<R: Rng>(grid: &mut Grid, rng: &mut R) -> usize {
    let mut advanced = 0;
    for tile in grid.tiles_mut() {
        if !tile.planted || tile.growth >= MAX_GROWTH {
            continue;
        }
        let step = GROWTH_STEP_MIN + rng.random::<f64>() * GROWTH_STEP_SPAN;
        tile.growth = (tile.growth + step).min(MAX_GROWTH);
        advanced += 1;
    }
    advanced
}
