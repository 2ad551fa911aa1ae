//! Coordinates and saved locations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether both components are finite and within WGS84 bounds.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Latitude: {:.6}, Longitude: {:.6}", self.lat, self.lng)
    }
}

/// A location the user asked to save. The timestamp is assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLocation {
    pub title: String,
    pub lat: f64,
    pub lng: f64,
}

impl NewLocation {
    pub fn new(title: impl Into<String>, point: LatLng) -> Self {
        Self {
            title: title.into(),
            lat: point.lat,
            lng: point.lng,
        }
    }

    /// Stamp the entry with its save time.
    pub fn saved_at(self, timestamp: DateTime<Utc>) -> SavedLocation {
        SavedLocation {
            title: self.title,
            lat: self.lat,
            lng: self.lng,
            timestamp,
        }
    }
}

/// A favorited location as persisted under `savedLocations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedLocation {
    pub title: String,
    pub lat: f64,
    pub lng: f64,
    /// ISO-8601 save time.
    pub timestamp: DateTime<Utc>,
}

impl SavedLocation {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

#[cfg(test)]
#[path = "location_tests.rs"]
mod tests;
