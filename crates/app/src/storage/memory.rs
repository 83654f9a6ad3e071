//! In-memory implementation of [`KeyValueStore`].

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use serde_json::Value;

use super::{KeyValueStore, StorageError};

/// Process-lifetime storage; contents vanish on drop.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let items = self.items.read().unwrap_or_else(PoisonError::into_inner);
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: Value) -> Result<(), StorageError> {
        let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);
        items.insert(key.to_owned(), value);
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);
        items.remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get_item("user").unwrap(), None);

        store.set_item("user", json!({"idusers": 1})).unwrap();
        assert_eq!(store.get_item("user").unwrap(), Some(json!({"idusers": 1})));

        store.set_item("user", json!({"idusers": 2})).unwrap();
        assert_eq!(store.get_item("user").unwrap(), Some(json!({"idusers": 2})));

        store.remove_item("user").unwrap();
        assert_eq!(store.get_item("user").unwrap(), None);
    }
}
