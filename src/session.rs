//! Garden session
//!
//! Owns the grid, the running flag, the RNG and the store. Every mutation goes
//! through a `&mut GardenSession`, and every mutation that changes tiles is
//! followed by a best-effort save.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::GRID_DEFAULT;
use crate::persistence::{self, LoadResult, PersistError, Storage};
use crate::platform;
use crate::settings::Settings;
use crate::sim::{self, Grid, Tile, ToggleOutcome};

/// Live state read by presentation code
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub grid: Grid,
    /// Gates tick effects only; manual toggles always apply
    pub running: bool,
}

impl SessionState {
    pub fn size(&self) -> usize {
        self.grid.size()
    }
}

pub struct GardenSession<S: Storage> {
    state: SessionState,
    store: S,
    rng: Pcg32,
}

impl<S: Storage> GardenSession<S> {
    /// Load the saved garden from `store`, or start an empty one at
    /// `requested_size` (default `GRID_DEFAULT`). The RNG is seeded from
    /// entropy.
    pub fn initialize(store: S, requested_size: Option<usize>) -> Self {
        let rng = Pcg32::from_rng(&mut rand::rng());
        Self::with_rng(store, requested_size, rng)
    }

    /// Same as `initialize` with a fixed RNG seed
    pub fn initialize_seeded(store: S, requested_size: Option<usize>, seed: u64) -> Self {
        Self::with_rng(store, requested_size, Pcg32::seed_from_u64(seed))
    }

    /// Initialize using the size and RNG seed from `settings`
    pub fn from_settings(store: S, settings: &Settings) -> Self {
        match settings.rng_seed {
            Some(seed) => Self::initialize_seeded(store, Some(settings.grid_size), seed),
            None => Self::initialize(store, Some(settings.grid_size)),
        }
    }

    fn with_rng(store: S, requested_size: Option<usize>, rng: Pcg32) -> Self {
        let grid = match persistence::load(&store) {
            LoadResult::Found(payload) => {
                log::info!(
                    "Loaded {}x{} garden (saved at {})",
                    payload.size,
                    payload.size,
                    payload.timestamp
                );
                payload.into_grid()
            }
            LoadResult::NotFound => {
                let size = requested_size.unwrap_or(GRID_DEFAULT);
                log::info!("No saved garden, starting fresh");
                Grid::new(size)
            }
        };
        Self {
            state: SessionState {
                grid,
                running: true,
            },
            store,
            rng,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.state.grid
    }

    pub fn size(&self) -> usize {
        self.state.grid.size()
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Bounds-checked tile lookup
    pub fn tile(&self, row: usize, col: usize) -> Option<&Tile> {
        self.state.grid.tile_at(row, col)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Plant or harvest the tile at `(row, col)`, then save.
    ///
    /// Applies whether or not the garden is running. Out-of-range coordinates
    /// are ignored and return `None`.
    pub fn on_user_toggle(&mut self, row: usize, col: usize) -> Option<ToggleOutcome> {
        if !self.state.grid.in_bounds(row, col) {
            log::warn!(
                "Ignoring toggle at ({}, {}) outside {}x{} grid",
                row,
                col,
                self.size(),
                self.size()
            );
            return None;
        }
        let outcome = sim::toggle_plant(&mut self.state.grid, row, col);
        match outcome {
            ToggleOutcome::Planted => log::debug!("Planted ({}, {})", row, col),
            ToggleOutcome::Harvested { stage } => {
                log::debug!("Harvested ({}, {}) at {}", row, col, stage.as_str())
            }
        }
        self.autosave();
        Some(outcome)
    }

    /// Advance growth and save when running; no-op while paused.
    ///
    /// Returns whether the tick took effect.
    pub fn on_tick(&mut self) -> bool {
        if !self.state.running {
            return false;
        }
        let advanced = sim::tick(&mut self.state.grid, &mut self.rng);
        log::debug!("Tick advanced {} tiles", advanced);
        self.autosave();
        true
    }

    /// Empty every tile at the current size, then save
    pub fn reset(&mut self) {
        self.state.grid.clear();
        log::info!("Garden reset");
        self.autosave();
    }

    /// Overwrite every tile with a random planting, then save.
    ///
    /// See `sim::reseed` for the per-tile rule. Returns the planted count.
    pub fn randomize_seed(&mut self, chance: f64) -> usize {
        let planted = sim::reseed(&mut self.state.grid, chance, &mut self.rng);
        log::info!(
            "Garden reseeded: {} of {} tiles planted",
            planted,
            self.state.grid.tiles().len()
        );
        self.autosave();
        planted
    }

    /// Flip between running and paused; returns the new running flag
    pub fn toggle_running(&mut self) -> bool {
        self.state.running = !self.state.running;
        log::info!(
            "Garden {}",
            if self.state.running { "resumed" } else { "paused" }
        );
        self.state.running
    }

    /// Save immediately, reporting the outcome
    pub fn save_now(&mut self) -> Result<(), PersistError> {
        persistence::save(&mut self.store, &self.state.grid, platform::now_ms())
    }

    fn autosave(&mut self) {
        if let Err(e) = self.save_now() {
            log::warn!("Save skipped: {}", e);
        }
    }
}
