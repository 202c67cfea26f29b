//! Save/load persistence
//!
//! Features:
//! - Versioned JSON payload, legacy shape still accepted
//! - Pluggable key-value store (`Storage`)
//! - Best-effort save returning an explicit `Result`
//! - Corrupt or missing data degrades to `NotFound`

pub mod error;
pub mod payload;
pub mod storage;

pub use error::PersistError;
pub use payload::{LoadResult, SAVE_VERSION, SavePayload, decode, encode, load, save};
pub use storage::{MemoryStorage, Storage};
