//! localStorage-backed relay slot
//!
//! Every tab on the same origin sees the same `localStorage`, which makes a
//! single key a usable cross-tab channel without any messaging API.

use crate::relay::{RelayError, SignalStore};

pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage(&self) -> Result<web_sys::Storage, RelayError> {
        let window = web_sys::window().ok_or(RelayError::Unavailable)?;
        window
            .local_storage()
            .map_err(|e| RelayError::Storage(format!("{:?}", e)))?
            .ok_or(RelayError::Unavailable)
    }
}

impl SignalStore for LocalStorageStore {
    fn load(&self) -> Result<Option<String>, RelayError> {
        self.storage()?
            .get_item(&self.key)
            .map_err(|e| RelayError::Storage(format!("{:?}", e)))
    }

    fn store(&self, value: &str) -> Result<(), RelayError> {
        self.storage()?
            .set_item(&self.key, value)
            .map_err(|e| RelayError::Storage(format!("{:?}", e)))
    }
}
