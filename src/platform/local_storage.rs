//! Browser `localStorage` store

use crate::persistence::{PersistError, Storage};

/// Handle to `window.localStorage`, looked up on every access so a store that
/// appears later (or disappears, e.g. private mode) is handled gracefully.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<web_sys::Storage, PersistError> {
        web_sys::window()
            .ok_or_else(|| PersistError::Unavailable("no window".into()))?
            .local_storage()
            .map_err(|e| PersistError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| PersistError::Unavailable("localStorage disabled".into()))
    }
}

impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| PersistError::Unavailable(format!("{:?}", e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| PersistError::QuotaExceeded(format!("{:?}", e)))
    }
}
