//! Geocoding API types.

use serde::Deserialize;

/// Geocoding response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// One geocoding match.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    pub formatted_address: String,
    pub geometry: Geometry,
    #[serde(default)]
    pub place_id: Option<String>,
}

/// Match geometry.
#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: Location,
    #[serde(default)]
    pub location_type: Option<String>,
}

/// Coordinates of a match.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// Status returned when the lookup succeeded.
pub const STATUS_OK: &str = "OK";

/// Status returned when nothing matched.
pub const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";
