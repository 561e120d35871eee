use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StorageError;
use crate::storage::KeyValueStore;

/// A value kept in sync with one durable storage slot.
///
/// The slot is read once, when the cell is materialized; every later read is
/// served from memory. Every `set` rewrites the whole slot.
pub struct PersistedState<T> {
    key: String,
    value: T,
    store: Box<dyn KeyValueStore>,
}

impl<T> PersistedState<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Builds the cell from the slot named `key`, falling back to `default`
    /// when the slot is absent, unreadable, or holds contents that no longer
    /// parse. Fallbacks are logged; they never fail the caller.
    pub fn materialize(store: Box<dyn KeyValueStore>, key: &str, default: T) -> Self {
        let value = match store.read(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(e) => {
                    log::warn!("Stored value under {:?} is malformed ({}), using default", key, e);
                    default
                }
            },
            Ok(None) => default,
            Err(e) => {
                log::warn!("Could not read stored value under {:?} ({}), using default", key, e);
                default
            }
        };

        Self {
            key: key.to_string(),
            value,
            store,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Replaces the in-memory value and rewrites the slot before returning.
    /// The in-memory value is updated even when the write fails, so readers
    /// of this cell always see what the caller last set.
    pub fn set(&mut self, value: T) -> Result<(), StorageError> {
        self.value = value;
        let raw = serde_json::to_string(&self.value)?;
        self.store.write(&self.key, &raw)
    }
}
