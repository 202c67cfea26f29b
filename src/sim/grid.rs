//! Square tile grid
//!
//! Tiles are stored row-major. The grid guarantees `tiles.len() == size * size`
//! at all times; anything that would break that is repaired by resetting the
//! grid to empty tiles.

use super::tile::{GrowthStage, Tile, index_of};
use crate::consts::{GRID_DEFAULT, MAX_GRID};

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    size: usize,
    tiles: Vec<Tile>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(GRID_DEFAULT)
    }
}

impl Grid {
    /// Create an all-empty grid. A size of 0 falls back to `GRID_DEFAULT`,
    /// anything above `MAX_GRID` is clamped to it.
    pub fn new(size: usize) -> Self {
        let size = if size == 0 {
            GRID_DEFAULT
        } else {
            size.min(MAX_GRID)
        };
        Self {
            size,
            tiles: vec![Tile::empty(); size * size],
        }
    }

    /// Build a grid from loaded parts.
    ///
    /// If the tile count disagrees with `size`, the loaded tiles are dropped
    /// and the grid is reinitialized to empty at `size`. A size of 0 or above
    /// `MAX_GRID` falls back to an empty `GRID_DEFAULT` grid.
    pub fn from_parts(size: usize, tiles: Vec<Tile>) -> Self {
        if size == 0 || size > MAX_GRID {
            log::warn!(
                "Grid size {} is outside 1..={}, using default {}",
                size,
                MAX_GRID,
                GRID_DEFAULT
            );
            return Self::new(GRID_DEFAULT);
        }
        let Some(expected) = size.checked_mul(size) else {
            return Self::new(GRID_DEFAULT);
        };
        if tiles.len() != expected {
            log::warn!(
                "Tile count mismatch (got {}, expected {} for {}x{}), resetting grid",
                tiles.len(),
                expected,
                size,
                size
            );
            return Self::new(size);
        }
        Self { size, tiles }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub(crate) fn tiles_mut(&mut self) -> &mut [Tile] {
        &mut self.tiles
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Unchecked-by-contract access; panics if out of range
    pub fn get(&self, row: usize, col: usize) -> &Tile {
        &self.tiles[index_of(row, col, self.size)]
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut Tile {
        let idx = index_of(row, col, self.size);
        &mut self.tiles[idx]
    }

    /// Bounds-checked lookup for presentation code
    pub fn tile_at(&self, row: usize, col: usize) -> Option<&Tile> {
        if self.in_bounds(row, col) {
            Some(self.get(row, col))
        } else {
            None
        }
    }

    /// Reset every tile to empty, keeping the current size
    pub fn clear(&mut self) {
        self.tiles.fill(Tile::empty());
    }

    pub fn planted_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.planted).count()
    }

    pub fn bloom_count(&self) -> usize {
        self.tiles
            .iter()
            .filter(|t| t.planted && t.stage() == GrowthStage::Bloom)
            .count()
    }

    /// Rows of stage glyphs, one string per row
    pub fn render_rows(&self) -> Vec<String> {
        self.tiles
            .chunks(self.size)
            .map(|row| row.iter().map(|t| t.stage().glyph()).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(4);
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.tiles().len(), 16);
        assert!(grid.tiles().iter().all(Tile::is_empty));
    }

    #[test]
    fn test_zero_size_falls_back_to_default() {
        let grid = Grid::new(0);
        assert_eq!(grid.size(), GRID_DEFAULT);
        assert_eq!(grid.tiles().len(), GRID_DEFAULT * GRID_DEFAULT);
    }

    #[test]
    fn test_new_clamps_to_max() {
        let grid = Grid::new(MAX_GRID + 1);
        assert_eq!(grid.size(), MAX_GRID);
        assert_eq!(grid.tiles().len(), MAX_GRID * MAX_GRID);
    }

    #[test]
    fn test_from_parts_rejects_oversized() {
        let grid = Grid::from_parts(usize::MAX, Vec::new());
        assert_eq!(grid.size(), GRID_DEFAULT);
        assert_eq!(grid.tiles().len(), GRID_DEFAULT * GRID_DEFAULT);

        let grid = Grid::from_parts(100_000, vec![Tile::sprout(); 3]);
        assert_eq!(grid.size(), GRID_DEFAULT);
        assert!(grid.tiles().iter().all(Tile::is_empty));
    }

    #[test]
    fn test_from_parts_repairs_mismatch() {
        let tiles = vec![Tile::sprout(); 15];
        let grid = Grid::from_parts(4, tiles);
        assert_eq!(grid.tiles().len(), 16);
        assert!(grid.tiles().iter().all(Tile::is_empty));
    }

    #[test]
    fn test_from_parts_keeps_matching_tiles() {
        let mut tiles = vec![Tile::empty(); 9];
        tiles[4] = Tile::sprout();
        let grid = Grid::from_parts(3, tiles);
        assert_eq!(*grid.get(1, 1), Tile::sprout());
        assert_eq!(grid.planted_count(), 1);
    }

    #[test]
    fn test_tile_at_checks_bounds() {
        let grid = Grid::new(3);
        assert!(grid.tile_at(2, 2).is_some());
        assert!(grid.tile_at(3, 0).is_none());
        assert!(grid.tile_at(0, 3).is_none());
    }

    #[test]
    fn test_render_rows_uses_glyphs() {
        let mut grid = Grid::new(2);
        *grid.get_mut(0, 1) = Tile {
            growth: 80.0,
            planted: true,
        };
        assert_eq!(grid.render_rows(), vec![".*".to_string(), "..".to_string()]);
        assert_eq!(grid.bloom_count(), 1);
    }
}
