//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Wall-clock time
//! - The periodic tick signal
//! - Storage (LocalStorage on web, JSON files on native)

#[cfg(not(target_arch = "wasm32"))]
pub mod file_storage;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;
pub mod ticker;

#[cfg(not(target_arch = "wasm32"))]
pub use file_storage::FileStorage;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorage;
pub use ticker::Ticker;

/// Milliseconds since the Unix epoch
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Milliseconds since the Unix epoch
#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
