//! Credential record and first-run initialisation.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};

use geoexplorer_protocols::error::{RelayError, StoreError};
use geoexplorer_protocols::store::{API_KEYS, SAVED_LOCATIONS};
use geoexplorer_protocols::{Credentials, KeyValueStore};

/// Access to the `apiKeys` record.
#[derive(Clone)]
pub struct Settings {
    store: Arc<dyn KeyValueStore>,
}

impl Settings {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Seed an empty favorites list if the store has never been used.
    ///
    /// Returns `true` when the store was initialised by this call.
    pub async fn initialize(&self) -> Result<bool, StoreError> {
        if self.store.contains(SAVED_LOCATIONS).await? {
            return Ok(false);
        }
        self.store
            .set(SAVED_LOCATIONS, Value::Array(Vec::new()))
            .await?;
        info!("Initialised empty favorites list in {} store", self.store.id());
        Ok(true)
    }

    /// Read the credential record. Absent means both keys unset.
    pub async fn load(&self) -> Result<Credentials, StoreError> {
        match self.store.get(API_KEYS).await? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(Credentials::default()),
        }
    }

    /// Trim and store both keys. Either key empty is rejected before the
    /// store is touched.
    pub async fn save(&self, credentials: Credentials) -> Result<Credentials, RelayError> {
        let credentials = Credentials::new(
            credentials.mapping_key.trim(),
            credentials.text_gen_key.trim(),
        );

        if credentials.mapping_key().is_none() {
            return Err(RelayError::Validation(
                "Please enter a Google Maps API key".to_string(),
            ));
        }
        if credentials.text_gen_key().is_none() {
            return Err(RelayError::Validation(
                "Please enter a Google Gemini API key".to_string(),
            ));
        }

        let value = serde_json::to_value(&credentials).map_err(StoreError::from)?;
        self.store.set(API_KEYS, value).await?;
        debug!("Saved API keys");
        Ok(credentials)
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
