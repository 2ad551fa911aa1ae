//! Mapping capability protocol definitions.
//!
//! Map objects are plain state holders created synchronously; rendering is
//! left to whatever front end displays them. Geocoding is a single-shot
//! asynchronous lookup.

use std::collections::BTreeSet;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::GeocodeError;
use crate::types::LatLng;

/// Core trait for mapping providers.
#[async_trait]
pub trait MapsProvider: Send + Sync {
    /// Returns the provider ID.
    fn id(&self) -> &str;

    /// Create a map view.
    fn create_map(&self, options: MapOptions) -> MapView {
        MapView::new(options)
    }

    /// Create a marker.
    fn create_marker(&self, options: MarkerOptions) -> Marker {
        Marker::new(options)
    }

    /// Create an info window.
    fn create_info_window(&self, options: InfoWindowOptions) -> InfoWindow {
        InfoWindow::new(options)
    }

    /// Resolve an address to coordinates.
    async fn geocode(&self, address: &str) -> Result<LatLng, GeocodeError>;

    /// Resolve coordinates to a formatted address.
    async fn reverse_geocode(&self, point: LatLng) -> Result<String, GeocodeError>;
}

/// Base map imagery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapType {
    #[default]
    Roadmap,
    Satellite,
    Terrain,
    Hybrid,
}

/// Overlay layers that can be toggled on a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapLayer {
    Traffic,
    Transit,
    Bicycling,
}

/// Options used to create a [`MapView`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapOptions {
    pub center: LatLng,
    pub zoom: u8,
    #[serde(default)]
    pub map_type: MapType,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            center: LatLng::new(38.8920621, -77.0199124),
            zoom: 13,
            map_type: MapType::Roadmap,
        }
    }
}

/// Map view state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    center: LatLng,
    zoom: u8,
    map_type: MapType,
    layers: BTreeSet<MapLayer>,
}

impl MapView {
    pub fn new(options: MapOptions) -> Self {
        Self {
            center: options.center,
            zoom: options.zoom,
            map_type: options.map_type,
            layers: BTreeSet::new(),
        }
    }

    pub fn center(&self) -> LatLng {
        self.center
    }

    pub fn set_center(&mut self, center: LatLng) {
        self.center = center;
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: u8) {
        self.zoom = zoom;
    }

    pub fn map_type(&self) -> MapType {
        self.map_type
    }

    pub fn set_map_type(&mut self, map_type: MapType) {
        self.map_type = map_type;
    }

    /// Apply a named style from the style picker. Returns `false` for names
    /// it does not know, leaving the view unchanged.
    pub fn apply_style(&mut self, style: &str) -> bool {
        let map_type = match style {
            "default" | "roadmap" => MapType::Roadmap,
            "satellite" => MapType::Satellite,
            "terrain" => MapType::Terrain,
            "hybrid" => MapType::Hybrid,
            _ => return false,
        };
        self.map_type = map_type;
        true
    }

    pub fn set_layer(&mut self, layer: MapLayer, visible: bool) {
        if visible {
            self.layers.insert(layer);
        } else {
            self.layers.remove(&layer);
        }
    }

    pub fn has_layer(&self, layer: MapLayer) -> bool {
        self.layers.contains(&layer)
    }
}

/// Options used to create a [`Marker`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerOptions {
    pub position: LatLng,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl MarkerOptions {
    pub fn at(position: LatLng) -> Self {
        Self {
            position,
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// A marker placed on a map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    id: String,
    position: LatLng,
    title: Option<String>,
    attached: bool,
}

impl Marker {
    pub fn new(options: MarkerOptions) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            position: options.position,
            title: options.title,
            attached: true,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn set_position(&mut self, position: LatLng) {
        self.position = position;
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Remove the marker from its map.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

/// Options used to create an [`InfoWindow`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InfoWindowOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<u32>,
}

/// A popup bubble anchored on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoWindow {
    content: String,
    position: Option<LatLng>,
    max_width: Option<u32>,
    anchor: Option<String>,
    open: bool,
}

impl InfoWindow {
    pub fn new(options: InfoWindowOptions) -> Self {
        Self {
            content: String::new(),
            position: None,
            max_width: options.max_width,
            anchor: None,
            open: false,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn position(&self) -> Option<LatLng> {
        self.position
    }

    pub fn set_position(&mut self, position: LatLng) {
        self.position = Some(position);
    }

    pub fn max_width(&self) -> Option<u32> {
        self.max_width
    }

    /// Open the window, optionally anchored to a marker.
    pub fn open(&mut self, anchor: Option<&Marker>) {
        self.anchor = anchor.map(|m| m.id().to_string());
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.anchor = None;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }
}

#[cfg(test)]
#[path = "maps_tests.rs"]
mod tests;
