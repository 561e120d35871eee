use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::error::StorageError;
use super::KeyValueStore;

/// Key-value slots backed by a single JSON object file on disk.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn load_slots(&self) -> Result<HashMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(HashMap::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load_slots()?.remove(key))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        // A file that no longer parses is abandoned; the write starts a
        // fresh slot map and overwrites it.
        let mut slots = self.load_slots().unwrap_or_else(|e| {
            log::warn!(
                "State file {} is unreadable ({}), rewriting it from scratch",
                self.path.display(),
                e
            );
            HashMap::new()
        });
        slots.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(&slots)?)?;
        Ok(())
    }
}
