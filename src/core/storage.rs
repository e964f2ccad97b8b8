//! Narrow key-value capability used to persist the locale preference.
//!
//! The browser implementation lives in `ui::locale` (it needs `web_sys`);
//! `MemoryStore` backs tests and any host without persistent storage.

use std::collections::HashMap;
use std::sync::Mutex;

use super::error::StorageError;

/// Persisted key-value slot access.
///
/// `get` never fails: an unreadable slot is reported as absent.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store. Survives "reloads" as long as the value is kept alive,
/// which is what tests need to simulate a page restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one entry
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut values = HashMap::new();
        values.insert(key.into(), value.into());
        Self {
            values: Mutex::new(values),
        }
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.values.lock().map(|values| values.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.values.lock().map_err(|_| StorageError::Poisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_memory_store_starts_empty() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert!(store.get("language").is_none());
    }

    #[test]
    fn test_memory_store_set_and_get() {
        let store = MemoryStore::new();
        store.set("language", "ru").unwrap();

        assert_eq!(store.get("language"), Some("ru".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_store_overwrites() {
        let store = MemoryStore::with_entry("language", "en");
        store.set("language", "ru").unwrap();

        assert_eq!(store.get("language"), Some("ru".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_store_keys_are_independent() {
        let store = MemoryStore::with_entry("language", "ru");
        assert!(store.get("lang").is_none());
    }

    #[test]
    fn test_shared_store_through_arc() {
        let store = Arc::new(MemoryStore::new());
        let handle: Arc<dyn PreferenceStore> = store.clone();

        handle.set("language", "ru").unwrap();

        assert_eq!(store.get("language"), Some("ru".to_string()));
    }
}
