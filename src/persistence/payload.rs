//! Saved garden payload
//!
//! Layout (JSON, single key):
//! `{"version":1,"size":N,"tiles":[{"growth":g,"planted":b},...],"timestamp":ms}`
//!
//! The unversioned legacy shape (no `version`) still loads. A payload without
//! `tiles` is treated as absent.

use serde::{Deserialize, Serialize};

use super::{PersistError, Storage};
use crate::consts::{GRID_DEFAULT, SAVE_KEY};
use crate::sim::{Grid, Tile};

/// Current save format version.
///
/// v0: legacy, no `version` field
/// v1: adds `version`
pub const SAVE_VERSION: u32 = 1;

fn default_size() -> usize {
    GRID_DEFAULT
}

/// A decoded save, not yet validated against the grid invariant
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SavePayload {
    #[serde(default)]
    pub version: u32,
    #[serde(default = "default_size")]
    pub size: usize,
    pub tiles: Vec<Tile>,
    #[serde(default)]
    pub timestamp: u64,
}

impl SavePayload {
    /// Turn the payload into a grid, sanitizing tiles and repairing any
    /// size/tile-count mismatch.
    pub fn into_grid(self) -> Grid {
        let mut tiles = self.tiles;
        tiles.iter_mut().for_each(Tile::sanitize);
        Grid::from_parts(self.size, tiles)
    }
}

#[derive(Serialize)]
struct SavePayloadRef<'a> {
    version: u32,
    size: usize,
    tiles: &'a [Tile],
    timestamp: u64,
}

/// Outcome of a load attempt
#[derive(Debug, Clone, PartialEq)]
pub enum LoadResult {
    Found(SavePayload),
    NotFound,
}

/// Encode a grid as a save payload string
pub fn encode(grid: &Grid, timestamp: u64) -> Result<String, PersistError> {
    let payload = SavePayloadRef {
        version: SAVE_VERSION,
        size: grid.size(),
        tiles: grid.tiles(),
        timestamp,
    };
    Ok(serde_json::to_string(&payload)?)
}

/// Decode a save payload string.
///
/// Anything malformed (bad JSON, missing `tiles`, a version from the future)
/// yields `NotFound`.
pub fn decode(json: &str) -> LoadResult {
    let payload: SavePayload = match serde_json::from_str(json) {
        Ok(p) => p,
        Err(e) => {
            log::warn!("Discarding malformed save: {}", e);
            return LoadResult::NotFound;
        }
    };
    if payload.version > SAVE_VERSION {
        log::warn!(
            "Save is v{}, but this build only reads up to v{}",
            payload.version,
            SAVE_VERSION
        );
        return LoadResult::NotFound;
    }
    LoadResult::Found(payload)
}

/// Write the grid under `SAVE_KEY`.
///
/// Best-effort: callers usually log the error and move on.
pub fn save<S: Storage + ?Sized>(
    store: &mut S,
    grid: &Grid,
    timestamp: u64,
) -> Result<(), PersistError> {
    let json = encode(grid, timestamp)?;
    store.set(SAVE_KEY, &json)?;
    log::debug!("Garden saved ({} planted)", grid.planted_count());
    Ok(())
}

/// Read the saved garden, degrading every failure to `NotFound`
pub fn load<S: Storage + ?Sized>(store: &S) -> LoadResult {
    match store.get(SAVE_KEY) {
        Ok(Some(json)) => decode(&json),
        Ok(None) => LoadResult::NotFound,
        Err(e) => {
            log::warn!("Could not read save: {}", e);
            LoadResult::NotFound
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStorage;
    use crate::sim::toggle_plant;

    fn found(result: LoadResult) -> SavePayload {
        match result {
            LoadResult::Found(p) => p,
            LoadResult::NotFound => panic!("expected a saved payload"),
        }
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let mut grid = Grid::new(4);
        toggle_plant(&mut grid, 0, 0);
        *grid.get_mut(2, 3) = Tile {
            growth: 73.25,
            planted: true,
        };
        let mut store = MemoryStorage::new();

        save(&mut store, &grid, 1_700_000_000_000).unwrap();
        let payload = found(load(&store));

        assert_eq!(payload.version, SAVE_VERSION);
        assert_eq!(payload.timestamp, 1_700_000_000_000);
        assert_eq!(payload.into_grid(), grid);
    }

    #[test]
    fn test_inexact_growth_survives_roundtrip() {
        let mut grid = Grid::new(1);
        *grid.get_mut(0, 0) = Tile {
            growth: 10.006904148862441,
            planted: true,
        };
        let mut store = MemoryStorage::new();

        save(&mut store, &grid, 0).unwrap();
        let back = found(load(&store)).into_grid();

        assert_eq!(back.get(0, 0).growth.to_bits(), 10.006904148862441f64.to_bits());
        assert_eq!(back, grid);
    }

    #[test]
    fn test_missing_key_is_not_found() {
        let store = MemoryStorage::new();
        assert_eq!(load(&store), LoadResult::NotFound);
    }

    #[test]
    fn test_garbage_is_not_found() {
        let store = MemoryStorage::with_entry(SAVE_KEY, "{not json");
        assert_eq!(load(&store), LoadResult::NotFound);
    }

    #[test]
    fn test_missing_tiles_is_not_found() {
        let store = MemoryStorage::with_entry(SAVE_KEY, r#"{"size":4,"timestamp":1}"#);
        assert_eq!(load(&store), LoadResult::NotFound);
    }

    #[test]
    fn test_future_version_is_not_found() {
        let json = r#"{"version":99,"size":1,"tiles":[{"growth":0,"planted":false}]}"#;
        assert_eq!(decode(json), LoadResult::NotFound);
    }

    #[test]
    fn test_legacy_payload_loads() {
        let json = r#"{"size":2,"tiles":[
            {"growth":0,"planted":false},{"growth":12.5,"planted":true},
            {"growth":0,"planted":false},{"growth":100,"planted":true}
        ],"timestamp":1699999999999}"#;
        let payload = found(decode(json));
        assert_eq!(payload.version, 0);
        let grid = payload.into_grid();
        assert_eq!(grid.size(), 2);
        assert_eq!(grid.get(0, 1).growth, 12.5);
        assert_eq!(grid.bloom_count(), 1);
    }

    #[test]
    fn test_size_defaults_when_absent() {
        let payload = found(decode(r#"{"tiles":[]}"#));
        assert_eq!(payload.size, GRID_DEFAULT);
        // Empty tile list mismatches the default size and gets repaired
        let grid = payload.into_grid();
        assert_eq!(grid.tiles().len(), GRID_DEFAULT * GRID_DEFAULT);
    }

    #[test]
    fn test_into_grid_sanitizes_tiles() {
        let json = r#"{"size":1,"tiles":[{"growth":500,"planted":false}]}"#;
        let grid = found(decode(json)).into_grid();
        assert_eq!(*grid.get(0, 0), Tile::empty());
    }

    #[test]
    fn test_save_reports_store_failure() {
        let mut store = MemoryStorage::new();
        store.set_fail_writes(true);
        let err = save(&mut store, &Grid::new(2), 0).unwrap_err();
        assert!(matches!(err, PersistError::QuotaExceeded(_)));
    }
}
