//! # GeoExplorer Maps - Google
//!
//! [`MapsProvider`](geoexplorer_protocols::MapsProvider) backed by the Google
//! Maps Geocoding web service.

mod provider;
mod types;

pub use provider::{GoogleMaps, DEFAULT_BASE_URL};
pub use types::*;
