//! Per-surface view state.
//!
//! A [`Surface`] is what one front end (full-page app, popup, CLI session)
//! holds while it is open: the map view, the current marker and info window,
//! the last loaded favorites and the chat transcript. All persistent work
//! goes through the relay.

mod chat;

pub use chat::ChatTranscript;

use std::sync::Arc;

use tracing::{debug, warn};

use geoexplorer_protocols::error::RelayError;
use geoexplorer_protocols::maps::{InfoWindowOptions, MapOptions, MarkerOptions};
use geoexplorer_protocols::{
    ChatMessage, InfoWindow, LatLng, MapView, MapsProvider, Marker, NewLocation, RelayRequest,
    SavedLocation,
};

use crate::relay::RelayClient;

/// Info window text while a description is being generated.
pub const LOADING_MESSAGE: &str = "Loading information...";

/// Shown in place of an address the geocoder could not resolve.
pub const ADDRESS_UNAVAILABLE: &str = "Not available";

/// Title used when no name can be derived for a saved location.
pub const DEFAULT_TITLE: &str = "Unnamed Location";

/// Transcript entry appended when a chat reply fails.
pub const CHAT_APOLOGY: &str =
    "Sorry, I couldn't process your request. Please check your API keys in the options page.";

const INFO_WINDOW_MAX_WIDTH: u32 = 300;
const SELECTED_ZOOM: u8 = 15;

/// View state owned by a single surface.
pub struct Surface {
    relay: RelayClient,
    maps: Arc<dyn MapsProvider>,
    map: MapView,
    marker: Option<Marker>,
    info_window: InfoWindow,
    current: Option<LatLng>,
    address: Option<String>,
    saved: Vec<SavedLocation>,
    chat: ChatTranscript,
}

impl Surface {
    pub fn new(relay: RelayClient, maps: Arc<dyn MapsProvider>, options: MapOptions) -> Self {
        let map = maps.create_map(options);
        let info_window = maps.create_info_window(InfoWindowOptions {
            max_width: Some(INFO_WINDOW_MAX_WIDTH),
        });
        Self {
            relay,
            maps,
            map,
            marker: None,
            info_window,
            current: None,
            address: None,
            saved: Vec::new(),
            chat: ChatTranscript::new(),
        }
    }

    pub fn map(&self) -> &MapView {
        &self.map
    }

    /// Map view for style and layer changes.
    pub fn map_mut(&mut self) -> &mut MapView {
        &mut self.map
    }

    pub fn marker(&self) -> Option<&Marker> {
        self.marker.as_ref()
    }

    pub fn info_window(&self) -> &InfoWindow {
        &self.info_window
    }

    /// The last clicked or searched point.
    pub fn current_position(&self) -> Option<LatLng> {
        self.current
    }

    /// Address of the current position as displayed to the user.
    pub fn address_display(&self) -> &str {
        self.address.as_deref().unwrap_or(ADDRESS_UNAVAILABLE)
    }

    pub fn saved_locations(&self) -> &[SavedLocation] {
        &self.saved
    }

    pub fn chat(&self) -> &ChatTranscript {
        &self.chat
    }

    pub fn toggle_chat(&mut self) -> bool {
        self.chat.toggle()
    }

    /// Fetch the mapping credential a front end needs to load its map.
    pub async fn fetch_mapping_credential(&self) -> Result<String, RelayError> {
        self.relay.send(RelayRequest::GetMapsApiKey).await?.into_api_key()
    }

    /// Select `point`: move the marker, look up its address and ask for a
    /// description. The info window ends up holding either the description
    /// or the error.
    pub async fn handle_map_click(&mut self, point: LatLng) -> Result<(), RelayError> {
        self.select_point(point)?;
        self.info_window.set_content(LOADING_MESSAGE);

        self.address = self.lookup_address(point).await;

        let heading = self
            .address
            .clone()
            .unwrap_or_else(|| "Location Information".to_string());
        let result = self
            .relay
            .send(RelayRequest::describe(point, self.address.clone()))
            .await
            .and_then(|response| response.into_content());

        match result {
            Ok(content) => {
                self.info_window
                    .set_content(format!("{}\n\n{}", heading, content));
                Ok(())
            }
            Err(e) => {
                self.info_window.set_content(format!(
                    "{}\n\nError retrieving information: {}",
                    heading, e
                ));
                Err(e)
            }
        }
    }

    /// Make `point` the current position: the previous marker is detached
    /// and the info window is moved onto a new one. The known address is
    /// cleared.
    pub fn select_point(&mut self, point: LatLng) -> Result<(), RelayError> {
        if !point.is_valid() {
            return Err(RelayError::Validation(format!("Invalid coordinates: {}", point)));
        }
        self.current = Some(point);
        self.address = None;

        if let Some(mut previous) = self.marker.take() {
            previous.detach();
        }
        let marker = self.maps.create_marker(MarkerOptions::at(point));
        self.info_window.set_position(point);
        self.info_window.open(Some(&marker));
        self.marker = Some(marker);
        Ok(())
    }

    /// Geocode `query`, centre the map on it and select it.
    pub async fn search_location(&mut self, query: &str) -> Result<LatLng, RelayError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(RelayError::Validation(
                "Please enter a location to search".to_string(),
            ));
        }

        let point = self.maps.geocode(query).await?;
        debug!("Search '{}' resolved to {}", query, point);
        self.map.set_center(point);
        self.handle_map_click(point).await?;
        Ok(point)
    }

    /// Centre the map on a saved location and select it.
    pub async fn select_saved_location(&mut self, index: usize) -> Result<(), RelayError> {
        let point = self
            .saved
            .get(index)
            .map(SavedLocation::position)
            .ok_or_else(|| RelayError::Validation("Invalid location index".to_string()))?;
        self.map.set_center(point);
        self.map.set_zoom(SELECTED_ZOOM);
        self.handle_map_click(point).await
    }

    /// Title suggested when saving the current position: the first segment
    /// of its address.
    pub async fn suggested_title(&self) -> Result<String, RelayError> {
        let point = self.current.ok_or_else(no_selection)?;
        let address = match self.address {
            Some(ref address) => Some(address.clone()),
            None => self.lookup_address(point).await,
        };
        Ok(address
            .as_deref()
            .and_then(|a| a.split(',').next())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_TITLE)
            .to_string())
    }

    /// Save the current position and reload the favorites list.
    ///
    /// A blank `title` falls back to [`Surface::suggested_title`].
    pub async fn save_current_location(
        &mut self,
        title: Option<&str>,
    ) -> Result<&[SavedLocation], RelayError> {
        let point = self.current.ok_or_else(no_selection)?;
        let title = match title.map(str::trim).filter(|t| !t.is_empty()) {
            Some(title) => title.to_string(),
            None => self.suggested_title().await?,
        };

        self.relay
            .send(RelayRequest::SaveLocation {
                location: NewLocation::new(title, point),
            })
            .await?
            .into_result()?;
        self.load_saved_locations().await
    }

    /// Reload the favorites list from the relay.
    pub async fn load_saved_locations(&mut self) -> Result<&[SavedLocation], RelayError> {
        self.saved = self
            .relay
            .send(RelayRequest::GetSavedLocations)
            .await?
            .into_locations()?;
        Ok(&self.saved)
    }

    /// Delete the favorite at `index` and reload the list.
    pub async fn delete_saved_location(
        &mut self,
        index: usize,
    ) -> Result<&[SavedLocation], RelayError> {
        let index = i64::try_from(index)
            .map_err(|_| RelayError::Validation("Invalid location index".to_string()))?;
        self.relay
            .send(RelayRequest::DeleteLocation { index })
            .await?
            .into_result()?;
        self.load_saved_locations().await
    }

    /// Ask the assistant about the area at the map centre.
    ///
    /// Blank input is rejected without touching the transcript. Otherwise the
    /// user message is recorded, followed by either the reply or an apology.
    pub async fn submit_chat(&mut self, input: &str) -> Result<(), RelayError> {
        let message = input.trim();
        if message.is_empty() {
            return Err(RelayError::Validation("Message cannot be empty".to_string()));
        }
        self.chat.push(ChatMessage::user(message));

        let center = self.map.center();
        let address = self.lookup_address(center).await;
        let result = self
            .relay
            .send(RelayRequest::chat(message, center, address))
            .await
            .and_then(|response| response.into_response());

        match result {
            Ok(reply) => {
                self.chat.push(ChatMessage::assistant(reply));
                Ok(())
            }
            Err(e) => {
                warn!("Chat request failed: {}", e);
                self.chat.push(ChatMessage::system(CHAT_APOLOGY));
                Err(e)
            }
        }
    }

    /// Best-effort reverse geocode.
    async fn lookup_address(&self, point: LatLng) -> Option<String> {
        match self.maps.reverse_geocode(point).await {
            Ok(address) => Some(address),
            Err(e) => {
                warn!("Reverse geocoding failed for {}: {}", point, e);
                None
            }
        }
    }
}

fn no_selection() -> RelayError {
    RelayError::Validation("No location selected".to_string())
}

#[cfg(test)]
#[path = "surface_tests.rs"]
mod tests;
