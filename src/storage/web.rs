use crate::error::StorageError;
use super::KeyValueStore;

/// Key-value slots backed by the browser's localStorage.
pub struct BrowserStore;

impl BrowserStore {
    pub fn new() -> Self {
        Self
    }

    fn local_storage(&self) -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window object".to_string()))?
            .local_storage()
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("local storage is disabled".to_string()))
    }
}

impl Default for BrowserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for BrowserStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))
    }
}
