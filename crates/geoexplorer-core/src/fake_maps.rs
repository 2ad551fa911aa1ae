//! Deterministic in-process mapping provider.

use async_trait::async_trait;

use geoexplorer_protocols::error::GeocodeError;
use geoexplorer_protocols::{LatLng, MapsProvider};

/// Point every address lookup resolves near.
pub const FAKE_ORIGIN: LatLng = LatLng {
    lat: 38.8977,
    lng: -77.0365,
};

/// Mapping provider that never leaves the process.
///
/// Address lookups land within 0.005 degrees of [`FAKE_ORIGIN`], offset by a
/// hash of the address so the same query always gives the same point.
/// Reverse lookups describe the coarse region of the coordinates.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeMaps;

impl FakeMaps {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MapsProvider for FakeMaps {
    fn id(&self) -> &str {
        "fake"
    }

    async fn geocode(&self, address: &str) -> Result<LatLng, GeocodeError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(GeocodeError::InvalidRequest("empty address".to_string()));
        }
        Ok(LatLng::new(
            FAKE_ORIGIN.lat + jitter(address.bytes()),
            FAKE_ORIGIN.lng + jitter(address.bytes().rev()),
        ))
    }

    async fn reverse_geocode(&self, point: LatLng) -> Result<String, GeocodeError> {
        if !point.is_valid() {
            return Err(GeocodeError::InvalidRequest(point.to_string()));
        }

        let region = if point.lat > 30.0 {
            "North America"
        } else if point.lat > 0.0 {
            "Equatorial Region"
        } else {
            "Southern Hemisphere"
        };
        let hemisphere = if point.lng > 0.0 {
            "Eastern Hemisphere"
        } else {
            "Western Hemisphere"
        };

        Ok(format!(
            "{:.4}, {:.4}, {}, {}",
            point.lat, point.lng, region, hemisphere
        ))
    }
}

/// Offset in `[-0.005, 0.005)` derived from `bytes`.
fn jitter(bytes: impl Iterator<Item = u8>) -> f64 {
    let hash = bytes.fold(17u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));
    (hash % 1000) as f64 / 100_000.0 - 0.005
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoexplorer_protocols::ErrorKind;

    #[tokio::test]
    async fn test_geocode_is_deterministic_and_near_origin() {
        let maps = FakeMaps::new();
        let a = maps.geocode("1600 Pennsylvania Ave").await.unwrap();
        let b = maps.geocode("1600 Pennsylvania Ave").await.unwrap();
        assert_eq!(a, b);
        assert!((a.lat - FAKE_ORIGIN.lat).abs() <= 0.005);
        assert!((a.lng - FAKE_ORIGIN.lng).abs() <= 0.005);
    }

    #[tokio::test]
    async fn test_geocode_empty_is_invalid_request() {
        let err = FakeMaps::new().geocode("   ").await.unwrap_err();
        assert!(matches!(err, GeocodeError::InvalidRequest(_)));
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_reverse_geocode_regions() {
        let maps = FakeMaps::new();
        assert_eq!(
            maps.reverse_geocode(LatLng::new(38.8920621, -77.0199124)).await.unwrap(),
            "38.8921, -77.0199, North America, Western Hemisphere"
        );
        assert_eq!(
            maps.reverse_geocode(LatLng::new(1.3521, 103.8198)).await.unwrap(),
            "1.3521, 103.8198, Equatorial Region, Eastern Hemisphere"
        );
        assert_eq!(
            maps.reverse_geocode(LatLng::new(-33.8688, 151.2093)).await.unwrap(),
            "-33.8688, 151.2093, Southern Hemisphere, Eastern Hemisphere"
        );
        assert_eq!(
            maps.reverse_geocode(LatLng::new(0.0, 0.0)).await.unwrap(),
            "0.0000, 0.0000, Southern Hemisphere, Western Hemisphere"
        );
    }

    #[tokio::test]
    async fn test_reverse_geocode_invalid_point() {
        let err = FakeMaps::new()
            .reverse_geocode(LatLng::new(f64::NAN, 0.0))
            .await
            .unwrap_err();
        assert!(matches!(err, GeocodeError::InvalidRequest(_)));
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
}
