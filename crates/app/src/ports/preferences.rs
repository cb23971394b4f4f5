//! Preference store port: durable string key/value settings.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use folio_domain::error::FolioError;

/// Durable key/value storage for user preferences, scoped to the origin.
///
/// Values are opaque strings; interpreting (and tolerating) whatever was
/// stored is the caller's job.
pub trait PreferenceStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Persist `value` under `key`, synchronously.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Storage`] when the backend refuses the write.
    fn set(&self, key: &str, value: &str) -> Result<(), FolioError>;

    /// Read the value stored under `key`, or `fallback` when unset.
    fn get_or(&self, key: &str, fallback: &str) -> String {
        self.get(key).unwrap_or_else(|| fallback.to_string())
    }
}

impl<T: PreferenceStore> PreferenceStore for Arc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), FolioError> {
        (**self).set(key, value)
    }
}

/// In-process store. Clones share the same map, so a clone handed to a
/// service and one kept by a test observe the same writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryPreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an existing value.
    #[must_use]
    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), FolioError> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
