//! `localStorage`-backed preferences.
//!
//! Values are stored raw (`theme = "dark"`), not JSON-encoded, so a
//! preference saved by earlier versions of the page still reads back.

use folio_core::{FolioError, FolioResult, PreferenceStore};

/// Looks storage up on every call; private browsing modes may deny it.
pub struct LocalPreferences;

impl LocalPreferences {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl PreferenceStore for LocalPreferences {
    fn load(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn store(&mut self, key: &str, value: &str) -> FolioResult<()> {
        let storage = Self::storage()
            .ok_or_else(|| FolioError::Storage("localStorage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| FolioError::Storage(format!("{:?}", e)))
    }
}
