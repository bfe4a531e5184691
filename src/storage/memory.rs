use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::storage::{Storage, StorageError, StorageKey};

/// In-memory store for tests and automation. Clones share the same
/// underlying map, so a test can keep a handle for assertions while the
/// runtime owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<StorageKey, String>,
    write_counts: HashMap<StorageKey, usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `write` was called for this key. Used by debounce
    /// tests to assert writes were coalesced.
    pub fn write_count(&self, key: StorageKey) -> usize {
        self.inner.lock().write_counts.get(&key).copied().unwrap_or(0)
    }

    pub fn contains(&self, key: StorageKey) -> bool {
        self.inner.lock().entries.contains_key(&key)
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        Ok(self.inner.lock().entries.get(&key).cloned())
    }

    fn write(&self, key: StorageKey, payload: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.lock();
        inner.entries.insert(key, payload.to_string());
        *inner.write_counts.entry(key).or_insert(0) += 1;
        Ok(())
    }

    fn remove(&self, key: StorageKey) -> Result<(), StorageError> {
        self.inner.lock().entries.remove(&key);
        Ok(())
    }
}
