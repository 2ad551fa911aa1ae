//! Relay wire types.
//!
//! Every request carries a `type` discriminant. Every response has the shape
//! `{success, <payload field>?, error?}`, where the payload field depends on
//! the operation: `content` for descriptions, `response` for chat replies,
//! `locations` for the favorites list and `apiKey` for the mapping
//! credential.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ErrorKind, RelayError};
use crate::types::{LatLng, NewLocation, SavedLocation};

/// Request variants understood by the relay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelayRequest {
    /// Describe the location at the given coordinates.
    GenerateContent {
        lat: f64,
        lng: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        address: Option<String>,
    },

    /// Answer a question about the location at the given coordinates.
    GenerateChatResponse {
        message: String,
        lat: f64,
        lng: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        address: Option<String>,
    },

    /// Append a location to the favorites list.
    SaveLocation { location: NewLocation },

    /// Return the favorites list.
    GetSavedLocations,

    /// Remove the favorite at `index`.
    DeleteLocation { index: i64 },

    /// Return the mapping-provider credential.
    #[serde(alias = "INJECT_MAPS_API", alias = "PREPARE_GOOGLE_MAPS_LOADER")]
    GetMapsApiKey,
}

impl RelayRequest {
    /// Discriminants accepted by [`RelayRequest::from_value`], aliases included.
    pub const TYPES: &'static [&'static str] = &[
        "GENERATE_CONTENT",
        "GENERATE_CHAT_RESPONSE",
        "SAVE_LOCATION",
        "GET_SAVED_LOCATIONS",
        "DELETE_LOCATION",
        "GET_MAPS_API_KEY",
        "INJECT_MAPS_API",
        "PREPARE_GOOGLE_MAPS_LOADER",
    ];

    pub fn describe(point: LatLng, address: Option<String>) -> Self {
        Self::GenerateContent {
            lat: point.lat,
            lng: point.lng,
            address,
        }
    }

    pub fn chat(message: impl Into<String>, point: LatLng, address: Option<String>) -> Self {
        Self::GenerateChatResponse {
            message: message.into(),
            lat: point.lat,
            lng: point.lng,
            address,
        }
    }

    /// Parse an untyped message.
    ///
    /// An unknown discriminant yields [`RelayError::Unhandled`]; a known one
    /// with bad fields yields [`RelayError::Validation`].
    pub fn from_value(value: Value) -> Result<Self, RelayError> {
        let tag = match value.get("type") {
            Some(Value::String(tag)) => tag.clone(),
            Some(other) => return Err(RelayError::Unhandled(other.to_string())),
            None => return Err(RelayError::Validation("Request is missing a type".to_string())),
        };

        if !Self::TYPES.contains(&tag.as_str()) {
            return Err(RelayError::Unhandled(tag));
        }

        serde_json::from_value(value)
            .map_err(|e| RelayError::Validation(format!("Invalid {} request: {}", tag, e)))
    }

    /// Canonical discriminant of this request.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::GenerateContent { .. } => "GENERATE_CONTENT",
            Self::GenerateChatResponse { .. } => "GENERATE_CHAT_RESPONSE",
            Self::SaveLocation { .. } => "SAVE_LOCATION",
            Self::GetSavedLocations => "GET_SAVED_LOCATIONS",
            Self::DeleteLocation { .. } => "DELETE_LOCATION",
            Self::GetMapsApiKey => "GET_MAPS_API_KEY",
        }
    }
}

/// Response produced for every relay request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayResponse {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<SavedLocation>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
}

impl RelayResponse {
    /// Success without payload.
    pub fn ok() -> Self {
        Self {
            success: true,
            ..Default::default()
        }
    }

    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::ok()
        }
    }

    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            response: Some(response.into()),
            ..Self::ok()
        }
    }

    pub fn with_locations(locations: Vec<SavedLocation>) -> Self {
        Self {
            locations: Some(locations),
            ..Self::ok()
        }
    }

    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::ok()
        }
    }

    pub fn failure(error: &RelayError) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
            error_kind: Some(error.kind()),
            ..Default::default()
        }
    }

    /// Turn a failed response back into an error.
    pub fn into_result(self) -> Result<Self, RelayError> {
        if self.success {
            Ok(self)
        } else {
            Err(RelayError::Failed {
                kind: self.error_kind.unwrap_or(ErrorKind::Transport),
                message: self.error.unwrap_or_else(|| "Unknown error".to_string()),
            })
        }
    }

    pub fn into_content(self) -> Result<String, RelayError> {
        self.into_result()?
            .content
            .ok_or_else(|| missing_payload("content"))
    }

    pub fn into_response(self) -> Result<String, RelayError> {
        self.into_result()?
            .response
            .ok_or_else(|| missing_payload("response"))
    }

    pub fn into_locations(self) -> Result<Vec<SavedLocation>, RelayError> {
        Ok(self.into_result()?.locations.unwrap_or_default())
    }

    pub fn into_api_key(self) -> Result<String, RelayError> {
        self.into_result()?
            .api_key
            .ok_or_else(|| missing_payload("apiKey"))
    }
}

fn missing_payload(field: &str) -> RelayError {
    RelayError::Failed {
        kind: ErrorKind::MalformedResponse,
        message: format!("Relay response is missing `{}`", field),
    }
}

#[cfg(test)]
#[path = "relay_tests.rs"]
mod tests;
