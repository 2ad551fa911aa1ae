//! Favorites list lifecycle.
//!
//! Every mutation is a read of the whole list followed by a write of the
//! whole list. Nothing serialises the two steps, so two saves that both read
//! before either writes keep only one of the entries.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use geoexplorer_protocols::error::{RelayError, StoreError};
use geoexplorer_protocols::store::SAVED_LOCATIONS;
use geoexplorer_protocols::{KeyValueStore, NewLocation, SavedLocation};

/// The ordered favorites list stored under `savedLocations`.
#[derive(Clone)]
pub struct LocationBook {
    store: Arc<dyn KeyValueStore>,
}

impl LocationBook {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Append `location`, stamped with the current time.
    pub async fn save(&self, location: NewLocation) -> Result<SavedLocation, StoreError> {
        let mut locations = self.list().await?;
        let saved = location.saved_at(Utc::now());
        locations.push(saved.clone());
        self.write(&locations).await?;
        debug!("Saved location '{}' ({} total)", saved.title, locations.len());
        Ok(saved)
    }

    /// All saved locations in insertion order.
    pub async fn list(&self) -> Result<Vec<SavedLocation>, StoreError> {
        match self.store.get(SAVED_LOCATIONS).await? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(Vec::new()),
        }
    }

    /// Remove the entry at `index`. An index outside `[0, len)` leaves the
    /// list untouched.
    pub async fn delete(&self, index: i64) -> Result<SavedLocation, RelayError> {
        let mut locations = self.list().await?;
        let position = usize::try_from(index)
            .ok()
            .filter(|i| *i < locations.len())
            .ok_or_else(|| RelayError::Validation("Invalid location index".to_string()))?;

        let removed = locations.remove(position);
        self.write(&locations).await?;
        debug!("Deleted location '{}' at index {}", removed.title, position);
        Ok(removed)
    }

    async fn write(&self, locations: &[SavedLocation]) -> Result<(), StoreError> {
        let value = serde_json::to_value(locations)?;
        self.store.set(SAVED_LOCATIONS, value).await
    }
}

#[cfg(test)]
#[path = "locations_tests.rs"]
mod tests;
