use super::*;

struct NullMaps;

#[async_trait]
impl MapsProvider for NullMaps {
    fn id(&self) -> &str {
        "null"
    }

    async fn geocode(&self, address: &str) -> Result<LatLng, GeocodeError> {
        Err(GeocodeError::ZeroResults(address.to_string()))
    }

    async fn reverse_geocode(&self, point: LatLng) -> Result<String, GeocodeError> {
        Err(GeocodeError::ZeroResults(point.to_string()))
    }
}

#[test]
fn test_default_map_options() {
    let options = MapOptions::default();
    assert_eq!(options.center, LatLng::new(38.8920621, -77.0199124));
    assert_eq!(options.zoom, 13);
    assert_eq!(options.map_type, MapType::Roadmap);
}

#[test]
fn test_map_view_center_and_zoom() {
    let mut map = NullMaps.create_map(MapOptions::default());
    map.set_center(LatLng::new(51.5, -0.12));
    map.set_zoom(9);
    assert_eq!(map.center(), LatLng::new(51.5, -0.12));
    assert_eq!(map.zoom(), 9);
}

#[test]
fn test_apply_style() {
    let mut map = MapView::new(MapOptions::default());
    assert!(map.apply_style("satellite"));
    assert_eq!(map.map_type(), MapType::Satellite);
    assert!(map.apply_style("default"));
    assert_eq!(map.map_type(), MapType::Roadmap);
    assert!(!map.apply_style("neon"));
    assert_eq!(map.map_type(), MapType::Roadmap);
}

#[test]
fn test_layers_toggle() {
    let mut map = MapView::new(MapOptions::default());
    assert!(!map.has_layer(MapLayer::Traffic));
    map.set_layer(MapLayer::Traffic, true);
    map.set_layer(MapLayer::Transit, true);
    assert!(map.has_layer(MapLayer::Traffic));
    map.set_layer(MapLayer::Traffic, false);
    assert!(!map.has_layer(MapLayer::Traffic));
    assert!(map.has_layer(MapLayer::Transit));
}

#[test]
fn test_marker_lifecycle() {
    let mut marker = NullMaps.create_marker(MarkerOptions::at(LatLng::new(1.0, 2.0)).with_title("Pin"));
    assert!(marker.is_attached());
    assert_eq!(marker.title(), Some("Pin"));
    marker.set_position(LatLng::new(3.0, 4.0));
    assert_eq!(marker.position(), LatLng::new(3.0, 4.0));
    marker.detach();
    assert!(!marker.is_attached());
}

#[test]
fn test_markers_have_distinct_ids() {
    let a = Marker::new(MarkerOptions::at(LatLng::new(0.0, 0.0)));
    let b = Marker::new(MarkerOptions::at(LatLng::new(0.0, 0.0)));
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_info_window_open_close() {
    let marker = Marker::new(MarkerOptions::at(LatLng::new(0.0, 0.0)));
    let mut window = NullMaps.create_info_window(InfoWindowOptions { max_width: Some(300) });
    assert_eq!(window.max_width(), Some(300));
    assert!(!window.is_open());

    window.set_content("Loading information...");
    window.set_position(marker.position());
    window.open(Some(&marker));
    assert!(window.is_open());
    assert_eq!(window.anchor(), Some(marker.id()));
    assert_eq!(window.content(), "Loading information...");

    window.close();
    assert!(!window.is_open());
    assert!(window.anchor().is_none());
}

#[tokio::test]
async fn test_provider_geocode_failure_is_tagged() {
    let err = NullMaps.geocode("nowhere").await.unwrap_err();
    assert_eq!(err.kind(), crate::error::ErrorKind::NotFound);
}
