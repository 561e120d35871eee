#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::error::StorageError;

/// One durable string-keyed slot per key. The slot outlives the process;
/// the same key always addresses the same slot.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[cfg(target_arch = "wasm32")]
pub fn default_store() -> Box<dyn KeyValueStore> {
    Box::new(web::BrowserStore::new())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_store() -> Box<dyn KeyValueStore> {
    Box::new(file::FileStore::new(crate::configs::get_state_file()))
}
