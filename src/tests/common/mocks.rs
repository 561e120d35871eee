use std::collections::HashMap;
use std::sync::atomic::{ AtomicUsize, Ordering };
use std::sync::{ Arc, Mutex };

use crate::error::StorageError;
use crate::storage::KeyValueStore;

/// In-memory store whose clones share one slot map, so a second clone can
/// stand in for a fresh process reading the same durable data.
#[derive(Clone, Default)]
pub struct MockStore {
    slots: Arc<Mutex<HashMap<String, String>>>,
    reads: Arc<AtomicUsize>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .slots
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Raw slot contents, bypassing deserialization.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.lock().unwrap().get(key).cloned()
    }

    /// How many times any slot has been read.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl KeyValueStore for MockStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.slots.lock().unwrap().get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store whose reads and writes always fail, for exercising fallback paths.
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("backing store offline".to_string()))
    }

    fn write(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("backing store offline".to_string()))
    }
}
