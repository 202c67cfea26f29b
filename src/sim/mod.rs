//! Garden simulation
//!
//! All tile logic lives here. This module must stay free of storage,
//! timers and rendering:
//! - Randomness comes in through a caller-supplied `Rng`
//! - Grids are mutated in place, row-major
//! - No I/O

pub mod grid;
pub mod growth;
pub mod plant;
pub mod seed;
pub mod tile;

pub use grid::Grid;
pub use growth::tick;
pub use plant::{ToggleOutcome, toggle_plant};
pub use seed::reseed;
pub use tile::{BLOOM_THRESHOLD, GROWING_THRESHOLD, GrowthStage, Tile, index_of};
