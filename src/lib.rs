//! Tile Garden - a tiny plant/grow/harvest grid simulation
//!
//! Core modules:
//! - `sim`: Tile model, growth tick, plant/harvest, reseeding
//! - `persistence`: Versioned save payload over a key-value store
//! - `platform`: Browser/native clock, ticker and storage backends
//! - `session`: The owned garden session driving everything
//! - `settings`: User-tunable configuration

pub mod persistence;
pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use persistence::{LoadResult, MemoryStorage, PersistError, Storage};
pub use session::{GardenSession, SessionState};
pub use settings::Settings;

/// Garden configuration constants
pub mod consts {
    /// Grid side length when nothing else is specified
    pub const GRID_DEFAULT: usize = 16;
    /// Largest accepted grid side length
    pub const MAX_GRID: usize = 256;
    /// Milliseconds between growth ticks
    pub const TICK_MS: u32 = 600;
    /// Growth a freshly planted seed starts with
    pub const SPROUT_GROWTH: f64 = 4.0;
    /// Growth ceiling (inclusive)
    pub const MAX_GROWTH: f64 = 100.0;
    /// Per-tile planting probability for a random reseed
    pub const DEFAULT_SEED_CHANCE: f64 = 0.18;

    /// Storage key for the garden save
    pub const SAVE_KEY: &str = "tile_garden_save";
    /// Storage key for settings
    pub const SETTINGS_KEY: &str = "tile_garden_settings";
}
