//! Bulk random reseed

use rand::Rng;

use super::grid::Grid;
use super::tile::Tile;

/// Lowest growth a reseeded tile starts with
pub const RESEED_GROWTH_MIN: f64 = 10.0;
/// Width of the reseed growth range; growth falls in `[10, 90)`
pub const RESEED_GROWTH_SPAN: f64 = 80.0;

/// Overwrite every tile: with probability `chance` it becomes planted at
/// `10 + U*80`, otherwise it is emptied. `chance` is clamped to `[0, 1]`.
/// Returns the number of planted tiles.
pub fn reseed<R: Rng>(grid: &mut Grid, chance: f64, rng: &mut R) -> usize {
    let chance = if chance.is_nan() {
        0.0
    } else {
        chance.clamp(0.0, 1.0)
    };
    let mut planted = 0;
    for tile in grid.tiles_mut() {
        if rng.random::<f64>() < chance {
            *tile = Tile {
                growth: RESEED_GROWTH_MIN + rng.random::<f64>() * RESEED_GROWTH_SPAN,
                planted: true,
            };
            planted += 1;
        } else {
            *tile = Tile::empty();
        }
    }
    planted
}
