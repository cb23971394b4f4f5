//! [`PreferenceStore`] backed by `window.localStorage`.

use folio_app::ports::PreferenceStore;
use folio_domain::error::FolioError;

use crate::error::BrowserError;

/// Stateless handle; the storage object is looked up on every call so the
/// handle stays `Send + Sync`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStoragePreferences;

impl LocalStoragePreferences {
    fn storage() -> Result<web_sys::Storage, BrowserError> {
        let window = web_sys::window().ok_or(BrowserError::NoWindow)?;
        window
            .local_storage()?
            .ok_or(BrowserError::StorageUnavailable)
    }
}

impl PreferenceStore for LocalStoragePreferences {
    fn get(&self, key: &str) -> Option<String> {
        match Self::storage() {
            Ok(storage) => storage.get_item(key).ok().flatten(),
            Err(err) => {
                tracing::debug!(error = %err, key, "preference read skipped");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), FolioError> {
        let storage = Self::storage().map_err(BrowserError::into_storage)?;
        storage
            .set_item(key, value)
            .map_err(|err| BrowserError::from(err).into_storage())
    }
}
