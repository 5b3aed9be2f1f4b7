//! Key/value storage abstraction backing the state cells.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{ClarityError, Result};

/// Storage key of the theme cell (persistent scope).
pub const THEME_KEY: &str = "clarity-theme";
/// Storage key of the font size cell (session scope).
pub const FONT_SIZE_KEY: &str = "clarity-font-size";
/// Storage key of the personalization cell (session scope).
pub const USER_NAME_KEY: &str = "clarity-user-name";
/// Storage key of the history cell (session scope).
pub const HISTORY_KEY: &str = "clarity-chat-history";

/// Synchronous string key/value store.
///
/// Each call is atomic from the caller's point of view: a reader never sees
/// a partially written value. Removing a missing key is not an error.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;

    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }
}

/// In-memory storage, used for tests and for throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage pre-filled with `entries`.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self {
            entries: Mutex::new(entries),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|e| ClarityError::internal(format!("Failed to lock memory storage: {}", e)))
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// Reads `key`, treating storage failures like an absent value.
///
/// Cells use this on load: unreadable state degrades to the default instead
/// of failing the caller.
pub(crate) fn read_or_none(storage: &dyn KeyValueStorage, key: &str) -> Option<String> {
    match storage.get(key) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read stored state, using default");
            None
        }
    }
}

/// Logs a failed write before handing the error back to the caller.
pub(crate) fn log_write_failure(key: &str, result: Result<()>) -> Result<()> {
    if let Err(e) = &result {
        tracing::warn!(key, error = %e, "failed to persist state");
    }
    result
}
