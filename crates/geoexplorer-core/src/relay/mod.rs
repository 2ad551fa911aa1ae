//! Request dispatch.
//!
//! [`Relay::dispatch`] maps each [`RelayRequest`] variant to exactly one
//! operation and always produces exactly one [`RelayResponse`]. Surfaces reach
//! a running relay through a [`RelayClient`].

mod channel;

pub use channel::RelayClient;

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error, warn};

use geoexplorer_protocols::error::{ErrorKind, RelayError};
use geoexplorer_protocols::{KeyValueStore, LatLng, RelayRequest, RelayResponse, TextGenerator};

use crate::assistant::Assistant;
use crate::locations::LocationBook;
use crate::settings::Settings;

/// Mapping-provider name used in configuration errors.
const MAPPING_PROVIDER: &str = "Google Maps";

/// The single dispatch point between surfaces and the store/generator.
#[derive(Clone)]
pub struct Relay {
    settings: Settings,
    locations: LocationBook,
    assistant: Assistant,
}

impl Relay {
    pub fn new(store: Arc<dyn KeyValueStore>, generator: Arc<dyn TextGenerator>) -> Self {
        let settings = Settings::new(store.clone());
        Self {
            locations: LocationBook::new(store),
            assistant: Assistant::new(generator, settings.clone()),
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn locations(&self) -> &LocationBook {
        &self.locations
    }

    /// Handle one typed request.
    pub async fn dispatch(&self, request: RelayRequest) -> RelayResponse {
        let type_name = request.type_name();
        debug!("Relay handling {}", type_name);

        match self.handle(request).await {
            Ok(response) => response,
            Err(e) => {
                log_failure(type_name, &e);
                RelayResponse::failure(&e)
            }
        }
    }

    /// Handle one untyped request. Unknown discriminants produce an
    /// `unhandled` failure response.
    pub async fn dispatch_value(&self, value: Value) -> RelayResponse {
        match RelayRequest::from_value(value) {
            Ok(request) => self.dispatch(request).await,
            Err(e) => {
                log_failure("request", &e);
                RelayResponse::failure(&e)
            }
        }
    }

    async fn handle(&self, request: RelayRequest) -> Result<RelayResponse, RelayError> {
        match request {
            RelayRequest::GenerateContent { lat, lng, address } => {
                let point = checked_point(lat, lng)?;
                let content = self.assistant.describe(point, address.as_deref()).await?;
                Ok(RelayResponse::with_content(content))
            }
            RelayRequest::GenerateChatResponse {
                message,
                lat,
                lng,
                address,
            } => {
                let point = checked_point(lat, lng)?;
                let message = message.trim();
                if message.is_empty() {
                    return Err(RelayError::Validation("Message cannot be empty".to_string()));
                }
                let reply = self
                    .assistant
                    .chat(message, point, address.as_deref())
                    .await?;
                Ok(RelayResponse::with_response(reply))
            }
            RelayRequest::SaveLocation { location } => {
                checked_point(location.lat, location.lng)?;
                self.locations.save(location).await?;
                Ok(RelayResponse::ok())
            }
            RelayRequest::GetSavedLocations => {
                let locations = self.locations.list().await?;
                Ok(RelayResponse::with_locations(locations))
            }
            RelayRequest::DeleteLocation { index } => {
                self.locations.delete(index).await?;
                Ok(RelayResponse::ok())
            }
            RelayRequest::GetMapsApiKey => {
                let credentials = self.settings.load().await?;
                let key = credentials
                    .mapping_key()
                    .ok_or_else(|| RelayError::MissingCredential(MAPPING_PROVIDER.to_string()))?;
                Ok(RelayResponse::with_api_key(key))
            }
        }
    }
}

fn checked_point(lat: f64, lng: f64) -> Result<LatLng, RelayError> {
    let point = LatLng::new(lat, lng);
    if point.is_valid() {
        Ok(point)
    } else {
        Err(RelayError::Validation(format!(
            "Invalid coordinates: {}, {}",
            lat, lng
        )))
    }
}

fn log_failure(type_name: &str, e: &RelayError) {
    match e.kind() {
        ErrorKind::Validation | ErrorKind::Unhandled | ErrorKind::NotFound => {
            warn!("Relay rejected {}: {}", type_name, e)
        }
        ErrorKind::MalformedResponse => error!("Malformed response for {}: {}", type_name, e),
        _ => error!("Relay failed {}: {}", type_name, e),
    }
}

#[cfg(test)]
#[path = "relay_tests.rs"]
mod tests;
