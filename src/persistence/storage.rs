//! Key-value store abstraction
//!
//! The browser build backs this with `localStorage`, the native build with a
//! directory of JSON files (see `platform`). `MemoryStorage` serves tests and
//! headless runs.

use std::collections::HashMap;

use super::PersistError;

/// A string-keyed, string-valued durable store
pub trait Storage {
    /// Read the value under `key`; `Ok(None)` when absent
    fn get(&self, key: &str) -> Result<Option<String>, PersistError>;

    /// Write `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistError>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        (**self).set(key, value)
    }
}

/// In-process store
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    fail_writes: bool,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a single entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }

    /// Make every subsequent `set` fail as if the quota were exhausted.
    ///
    /// Test helper for exercising the best-effort save path.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Number of successful writes so far (test helper)
    pub fn write_count(&self) -> usize {
        self.writes
    }

    #[cfg(test)]
    fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        if self.fail_writes {
            return Err(PersistError::QuotaExceeded(format!(
                "write of {} bytes to '{}' refused",
                value.len(),
                key
            )));
        }
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
