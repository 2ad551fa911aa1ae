//! In-memory key-value store.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use geoexplorer_protocols::error::StoreError;
use geoexplorer_protocols::KeyValueStore;

/// Key-value store kept in process memory. Contents are lost on drop.
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    fn id(&self) -> &str {
        "memory"
    }

    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.entries.write().await.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_missing_key() {
        let store = MemoryStore::new();
        assert!(store.get("savedLocations").await.unwrap().is_none());
        assert!(!store.contains("savedLocations").await.unwrap());
    }

    #[tokio::test]
    async fn test_set_replaces_value() {
        let store = MemoryStore::new();
        store.set("apiKeys", json!({"mappingKey": "a"})).await.unwrap();
        store.set("apiKeys", json!({"mappingKey": "b"})).await.unwrap();

        let value = store.get("apiKeys").await.unwrap().unwrap();
        assert_eq!(value["mappingKey"], "b");
    }

    #[tokio::test]
    async fn test_clear() {
        let store = MemoryStore::default();
        store.set("savedLocations", json!([])).await.unwrap();
        store.clear().await.unwrap();
        assert!(store.get("savedLocations").await.unwrap().is_none());
    }
}
