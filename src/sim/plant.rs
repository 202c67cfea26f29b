//! Plant/harvest transition on a single tile

use super::grid::Grid;
use super::tile::GrowthStage;
use crate::consts::SPROUT_GROWTH;

/// What a toggle did to the tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Planted,
    /// Tile cleared; `stage` is what it was before harvesting
    Harvested { stage: GrowthStage },
}

/// Flip the planted flag of the tile at `(row, col)`.
///
/// Planting a tile whose growth is exactly 0 seeds it at `SPROUT_GROWTH`.
/// Harvesting always resets growth to 0. Callers guarantee the coordinates
/// are in range.
pub fn toggle_plant(grid: &mut Grid, row: usize, col: usize) -> ToggleOutcome {
    let tile = grid.get_mut(row, col);
    let stage = tile.stage();
    tile.planted = !tile.planted;

    if tile.planted {
        // Checked after the flip so corrupted planted+0 tiles reseed correctly
        if tile.growth == 0.0 {
            tile.growth = SPROUT_GROWTH;
        }
        ToggleOutcome::Planted
    } else {
        tile.growth = 0.0;
        ToggleOutcome::Harvested { stage }
    }
}
