//! Tile record and growth stage classification

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_GROWTH, SPROUT_GROWTH};

/// Lower bound of the Growing band
pub const GROWING_THRESHOLD: f64 = 30.0;
/// Lower bound of the Bloom band (harvest-ready)
pub const BLOOM_THRESHOLD: f64 = 70.0;

/// Row-major index of `(row, col)` in a grid of side `size`.
///
/// Bounds are not checked; callers guarantee `row < size && col < size`.
#[inline]
pub fn index_of(row: usize, col: usize, size: usize) -> usize {
    row * size + col
}

/// A single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Tile {
    /// Growth in `[0, 100]`, always 0 when not planted
    #[serde(default)]
    pub growth: f64,
    #[serde(default)]
    pub planted: bool,
}

impl Tile {
    /// An unplanted tile with no growth
    pub const fn empty() -> Self {
        Self {
            growth: 0.0,
            planted: false,
        }
    }

    /// A freshly planted seed
    pub const fn sprout() -> Self {
        Self {
            growth: SPROUT_GROWTH,
            planted: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.planted && self.growth == 0.0
    }

    pub fn stage(&self) -> GrowthStage {
        GrowthStage::of(self.growth)
    }

    /// Force the tile back into a valid shape.
    ///
    /// Non-finite growth becomes 0, growth is clamped to `[0, 100]`, and
    /// unplanted tiles lose any growth they carried.
    pub fn sanitize(&mut self) {
        if !self.growth.is_finite() {
            self.growth = 0.0;
        }
        self.growth = self.growth.clamp(0.0, MAX_GROWTH);
        if !self.planted {
            self.growth = 0.0;
        }
    }
}

/// Visual category of a tile, derived from growth alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrowthStage {
    Empty,
    Sprout,
    Growing,
    /// Mature, harvest-eligible
    Bloom,
}

impl GrowthStage {
    pub fn of(growth: f64) -> Self {
        if growth <= 0.0 {
            GrowthStage::Empty
        } else if growth < GROWING_THRESHOLD {
            GrowthStage::Sprout
        } else if growth < BLOOM_THRESHOLD {
            GrowthStage::Growing
        } else {
            GrowthStage::Bloom
        }
    }

    pub fn is_harvest_ready(&self) -> bool {
        matches!(self, GrowthStage::Bloom)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GrowthStage::Empty => "empty",
            GrowthStage::Sprout => "sprout",
            GrowthStage::Growing => "growing",
            GrowthStage::Bloom => "bloom",
        }
    }

    /// Single-character glyph for text front ends
    pub fn glyph(&self) -> char {
        match self {
            GrowthStage::Empty => '.',
            GrowthStage::Sprout => ',',
            GrowthStage::Growing => 'i',
            GrowthStage::Bloom => '*',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_is_row_major() {
        assert_eq!(index_of(0, 0, 4), 0);
        assert_eq!(index_of(0, 3, 4), 3);
        assert_eq!(index_of(1, 0, 4), 4);
        assert_eq!(index_of(3, 3, 4), 15);
    }

    #[test]
    fn test_stage_boundaries() {
        assert_eq!(GrowthStage::of(0.0), GrowthStage::Empty);
        assert_eq!(GrowthStage::of(-3.0), GrowthStage::Empty);
        assert_eq!(GrowthStage::of(1.0), GrowthStage::Sprout);
        assert_eq!(GrowthStage::of(29.0), GrowthStage::Sprout);
        assert_eq!(GrowthStage::of(29.5), GrowthStage::Sprout);
        assert_eq!(GrowthStage::of(30.0), GrowthStage::Growing);
        assert_eq!(GrowthStage::of(69.0), GrowthStage::Growing);
        assert_eq!(GrowthStage::of(70.0), GrowthStage::Bloom);
        assert_eq!(GrowthStage::of(100.0), GrowthStage::Bloom);
    }

    #[test]
    fn test_only_bloom_is_harvest_ready() {
        assert!(GrowthStage::Bloom.is_harvest_ready());
        assert!(!GrowthStage::Growing.is_harvest_ready());
        assert!(!GrowthStage::Sprout.is_harvest_ready());
        assert!(!GrowthStage::Empty.is_harvest_ready());
    }

    #[test]
    fn test_sanitize_repairs_bad_values() {
        let mut t = Tile {
            growth: f64::NAN,
            planted: true,
        };
        t.sanitize();
        assert_eq!(t.growth, 0.0);

        let mut t = Tile {
            growth: 250.0,
            planted: true,
        };
        t.sanitize();
        assert_eq!(t.growth, MAX_GROWTH);

        let mut t = Tile {
            growth: 42.0,
            planted: false,
        };
        t.sanitize();
        assert_eq!(t, Tile::empty());
    }
}
