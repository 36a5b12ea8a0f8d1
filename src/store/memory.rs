use crate::error::{Result, RecipefindError};
use crate::store::KeyValueStore;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-process store backed by a `HashMap`
///
/// Used for tests and for `--ephemeral` runs where nothing should be
/// written to disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    /// Whether the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().map_err(|_| {
            RecipefindError::Storage("Failed to acquire read lock on memory store".to_string())
        })?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| {
            RecipefindError::Storage("Failed to acquire write lock on memory store".to_string())
        })?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| {
            RecipefindError::Storage("Failed to acquire write lock on memory store".to_string())
        })?;
        entries.remove(key);
        Ok(())
    }
}
