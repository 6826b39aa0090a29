//! In-process backend; the default for tests and single-process adapters.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::{SessionStore, StoreError, StoreResult};

/// Mutexed map living for the lifetime of the process ("session").
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn put(&self, key: &str, value: String) -> StoreResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Backend("session map lock poisoned".into()))?;
        entries.insert(key.to_string(), value);
        Ok(())
    }

    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Backend("session map lock poisoned".into()))?;
        Ok(entries.get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_none() {
        let store = MemoryStore::new();
        assert!(store.get("absent").unwrap().is_none());
    }

    #[test]
    fn put_overwrites() {
        let store = MemoryStore::new();
        store.put("k", "one".into()).unwrap();
        store.put("k", "two".into()).unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));
    }

    #[test]
    fn clones_share_the_session() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.put("k", "v".into()).unwrap();
        assert_eq!(other.get("k").unwrap().as_deref(), Some("v"));
    }
}
