//! `localStorage`-backed [`PreferenceStore`].

use web_sys::Storage;

use crate::dom::{PreferenceStore, StorageError};

pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    /// Bind to `window.localStorage`. Access can throw (privacy modes), in
    /// which case every read misses and every write fails.
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        Self { storage }
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::WriteRejected { key: key.to_owned() })
    }
}
