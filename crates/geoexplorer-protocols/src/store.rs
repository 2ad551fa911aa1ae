//! Persistent store protocol definitions.
//!
//! The store is a flat key-value space of JSON documents. Two keys are used:
//! [`API_KEYS`] for the credential record and [`SAVED_LOCATIONS`] for the
//! ordered favorites list.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StoreError;

/// Key holding the [`Credentials`](crate::types::Credentials) record.
pub const API_KEYS: &str = "apiKeys";

/// Key holding the ordered list of [`SavedLocation`](crate::types::SavedLocation)s.
pub const SAVED_LOCATIONS: &str = "savedLocations";

/// Core trait for key-value storage backends.
///
/// Each call is a single independent operation; no transaction spans a
/// `get` followed by a `set`.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the backend ID.
    fn id(&self) -> &str;

    /// Read the value stored under `key`, or `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Replace the value stored under `key`.
    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError>;

    /// Remove every key.
    async fn clear(&self) -> Result<(), StoreError>;

    /// Whether a value exists under `key`.
    async fn contains(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.get(key).await?.is_some())
    }
}
