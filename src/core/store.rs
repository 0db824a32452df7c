//! Session persistence
//!
//! `KeyValueStore` is the get/set/remove capability the widget needs from
//! browser storage. `SessionStore` layers the single `"teacher"` slot on top
//! of it and owns the JSON encoding of the record.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::teacher::Teacher;

/// Storage key holding the serialized teacher record
pub const SESSION_KEY: &str = "teacher";

/// Storage errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage read failed: {0}")]
    ReadFailed(String),

    #[error("Storage write failed: {0}")]
    WriteFailed(String),

    #[error("Stored session record is corrupt: {0}")]
    Corrupt(String),

    #[error("Failed to serialize session record: {0}")]
    Serialize(String),
}

/// String key-value storage, origin scoped in the browser
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one raw entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Raw value under `key`, bypassing the trait
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// The persisted teacher slot
#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, SESSION_KEY)
    }

    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read and decode the stored record.
    ///
    /// Returns `StoreError::Corrupt` when a value is present but does not
    /// decode as a `Teacher`.
    pub fn load(&self) -> Result<Option<Teacher>, StoreError> {
        let Some(raw) = self.backend.get(&self.key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StoreError::Corrupt(e.to_string()))
    }

    /// Persist `teacher`, replacing any previous record
    pub fn save(&self, teacher: &Teacher) -> Result<(), StoreError> {
        let json =
            serde_json::to_string(teacher).map_err(|e| StoreError::Serialize(e.to_string()))?;
        self.backend.set(&self.key, &json)
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        self.backend.remove(&self.key)
    }
}
