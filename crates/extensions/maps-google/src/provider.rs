//! Google Geocoding provider implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error};

use geoexplorer_protocols::error::GeocodeError;
use geoexplorer_protocols::{LatLng, MapsProvider};

use crate::types::*;

/// Public Maps web service root.
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Google Maps provider. Map objects use the default in-process state; only
/// geocoding goes over the network.
pub struct GoogleMaps {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GoogleMaps {
    /// Create a provider for the public endpoint.
    pub fn new(api_key: impl Into<String>) -> Result<Self, GeocodeError> {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Create a provider for the API rooted at `base_url`.
    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| GeocodeError::Network(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into().trim().to_string(),
        })
    }

    /// Issue one geocoding request and return its first match.
    async fn lookup(&self, param: &str, value: &str) -> Result<GeocodeResult, GeocodeError> {
        if self.api_key.is_empty() {
            return Err(GeocodeError::MissingCredential);
        }

        let url = format!("{}/geocode/json", self.base_url);
        debug!("Google geocode: {}={}", param, value);

        let response = self
            .client
            .get(&url)
            .query(&[(param, value), ("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| GeocodeError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GeocodeError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(GeocodeError::Rejected {
                status: status.as_u16().to_string(),
                message: body,
            });
        }

        let parsed: GeocodeResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Unparseable geocoding response ({} bytes): {}", body.len(), e);
            GeocodeError::MalformedResponse(e.to_string())
        })?;

        match parsed.status.as_str() {
            STATUS_OK => parsed.results.into_iter().next().ok_or_else(|| {
                GeocodeError::MalformedResponse("OK status without results".to_string())
            }),
            STATUS_ZERO_RESULTS => Err(GeocodeError::ZeroResults(value.to_string())),
            other => Err(GeocodeError::Rejected {
                status: other.to_string(),
                message: parsed.error_message.unwrap_or_default(),
            }),
        }
    }
}

#[async_trait]
impl MapsProvider for GoogleMaps {
    fn id(&self) -> &str {
        "google"
    }

    async fn geocode(&self, address: &str) -> Result<LatLng, GeocodeError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(GeocodeError::InvalidRequest("empty address".to_string()));
        }
        let result = self.lookup("address", address).await?;
        let location = result.geometry.location;
        Ok(LatLng::new(location.lat, location.lng))
    }

    async fn reverse_geocode(&self, point: LatLng) -> Result<String, GeocodeError> {
        if !point.is_valid() {
            return Err(GeocodeError::InvalidRequest(point.to_string()));
        }
        let latlng = format!("{},{}", point.lat, point.lng);
        let result = self.lookup("latlng", &latlng).await?;
        Ok(result.formatted_address)
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
