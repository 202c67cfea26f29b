//! Garden settings
//!
//! Persisted separately from the garden itself, under `SETTINGS_KEY` in the
//! same store.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_SEED_CHANCE, GRID_DEFAULT, MAX_GRID, SETTINGS_KEY, TICK_MS};
use crate::persistence::{PersistError, Storage};

/// User-tunable settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Side length used when no save exists
    pub grid_size: usize,
    /// Milliseconds between growth ticks
    pub tick_ms: u32,
    /// Default per-tile probability for a random reseed
    pub seed_chance: f64,
    /// Fixed RNG seed for reproducible gardens; `None` seeds from entropy
    pub rng_seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_size: GRID_DEFAULT,
            tick_ms: TICK_MS,
            seed_chance: DEFAULT_SEED_CHANCE,
            rng_seed: None,
        }
    }
}

impl Settings {
    /// Clamp every field into its valid range
    pub fn sanitized(mut self) -> Self {
        if self.grid_size == 0 {
            self.grid_size = GRID_DEFAULT;
        }
        self.grid_size = self.grid_size.min(MAX_GRID);
        self.tick_ms = self.tick_ms.max(1);
        self.seed_chance = if self.seed_chance.is_finite() {
            self.seed_chance.clamp(0.0, 1.0)
        } else {
            DEFAULT_SEED_CHANCE
        };
        self
    }

    /// Load settings from the store, falling back to defaults
    pub fn load<S: Storage + ?Sized>(store: &S) -> Self {
        match store.get(SETTINGS_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<Settings>(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    return settings.sanitized();
                }
                Err(e) => log::warn!("Ignoring malformed settings: {}", e),
            },
            Ok(None) => {}
            Err(e) => log::warn!("Could not read settings: {}", e),
        }
        log::info!("Using default settings");
        Self::default()
    }

    pub fn save<S: Storage + ?Sized>(&self, store: &mut S) -> Result<(), PersistError> {
        let json = serde_json::to_string(self)?;
        store.set(SETTINGS_KEY, &json)?;
        log::info!("Settings saved");
        Ok(())
    }
}
