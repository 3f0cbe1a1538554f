//! In-memory Collection Store
//!
//! Holds collections in a map. Used by tests, and able to simulate a
//! failing disk with `fail_writes`.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::ports::collection_store::{CollectionStore, StoreError, StoreResult};

/// Collection store backed by a shared map
///
/// Clones share the same contents, so a test can keep a handle after
/// moving the store into a repository.
#[derive(Debug, Clone, Default)]
pub struct MemoryCollectionStore {
    collections: Arc<Mutex<BTreeMap<String, String>>>,
    fail_writes: Arc<AtomicBool>,
    writes: Arc<Mutex<usize>>,
}

impl MemoryCollectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following write fail (or succeed again)
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.writes.lock().map(|n| *n).unwrap_or(0)
    }

    /// Put raw contents in place, bypassing failure simulation
    pub fn insert(&self, name: &str, contents: &str) {
        if let Ok(mut map) = self.collections.lock() {
            map.insert(name.to_string(), contents.to_string());
        }
    }

    fn poisoned() -> StoreError {
        StoreError::Other("memory store lock poisoned".to_string())
    }
}

impl CollectionStore for MemoryCollectionStore {
    fn read(&self, name: &str) -> StoreResult<Option<String>> {
        let map = self.collections.lock().map_err(|_| Self::poisoned())?;
        Ok(map.get(name).cloned())
    }

    fn write(&self, name: &str, contents: &str) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Other(format!(
                "simulated write failure for '{}'",
                name
            )));
        }
        let mut map = self.collections.lock().map_err(|_| Self::poisoned())?;
        map.insert(name.to_string(), contents.to_string());
        *self.writes.lock().map_err(|_| Self::poisoned())? += 1;
        Ok(())
    }

    fn names(&self) -> StoreResult<Vec<String>> {
        let map = self.collections.lock().map_err(|_| Self::poisoned())?;
        Ok(map.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_contents() {
        let store = MemoryCollectionStore::new();
        let handle = store.clone();

        store.write("areas", "[]").unwrap();

        assert_eq!(handle.read("areas").unwrap().as_deref(), Some("[]"));
        assert_eq!(handle.write_count(), 1);
    }

    #[test]
    fn armed_failure_rejects_writes() {
        let store = MemoryCollectionStore::new();
        store.fail_writes(true);

        assert!(store.write("areas", "[]").is_err());
        assert_eq!(store.read("areas").unwrap(), None);

        store.fail_writes(false);
        assert!(store.write("areas", "[]").is_ok());
    }
}
