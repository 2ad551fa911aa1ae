//! Component wiring from configuration.

use std::sync::Arc;

use tracing::{info, warn};

use geoexplorer_config::{Config, ConfigLoader};
use geoexplorer_core::{FakeMaps, MemoryStore, Relay, RelayClient, Surface};
use geoexplorer_maps_google::GoogleMaps;
use geoexplorer_protocols::maps::{MapOptions, MapType};
use geoexplorer_protocols::{KeyValueStore, LatLng, MapsProvider, RelayRequest};
use geoexplorer_provider_gemini::GeminiGenerator;
use geoexplorer_store_sqlite::SqliteStore;

/// Everything a command needs: the configuration and a running relay.
pub(crate) struct App {
    pub config: Config,
    pub relay: Relay,
    pub client: RelayClient,
    store_id: String,
}

impl App {
    /// Open the configured store, seed it on first use and start the relay.
    pub async fn build(config: Config) -> Result<Self, Box<dyn std::error::Error>> {
        let store = open_store(&config).await?;
        let store_id = store.id().to_string();

        let generator = GeminiGenerator::with_endpoint(&config.gemini.base_url, &config.gemini.model)?;
        info!("Text generator: Gemini model {}", generator.model());

        let relay = Relay::new(store, Arc::new(generator));
        if relay.settings().initialize().await? {
            info!("First run: open `geoexplorer settings set` to configure API keys");
        }
        let client = relay.clone().spawn();

        Ok(Self {
            config,
            relay,
            client,
            store_id,
        })
    }

    pub fn store_id(&self) -> &str {
        &self.store_id
    }

    /// Map options from the `[maps]` section.
    pub fn map_options(&self) -> MapOptions {
        MapOptions {
            center: LatLng::new(self.config.maps.center_lat, self.config.maps.center_lng),
            zoom: self.config.maps.zoom,
            map_type: MapType::Roadmap,
        }
    }

    /// Build the mapping provider. The Google provider needs the mapping
    /// key, which is fetched through the relay like any surface would.
    pub async fn maps(&self, fake: bool) -> Result<Arc<dyn MapsProvider>, Box<dyn std::error::Error>> {
        if fake {
            return Ok(Arc::new(FakeMaps::new()));
        }
        let api_key = self
            .client
            .send(RelayRequest::GetMapsApiKey)
            .await?
            .into_api_key()?;
        Ok(Arc::new(GoogleMaps::with_base_url(
            &self.config.maps.base_url,
            api_key,
        )?))
    }

    /// A fresh surface centred on the configured map centre.
    pub async fn surface(&self, fake_maps: bool) -> Result<Surface, Box<dyn std::error::Error>> {
        let maps = self.maps(fake_maps).await?;
        Ok(Surface::new(self.client.clone(), maps, self.map_options()))
    }
}

async fn open_store(config: &Config) -> Result<Arc<dyn KeyValueStore>, Box<dyn std::error::Error>> {
    match config.storage.backend.as_str() {
        "memory" => {
            warn!("Using in-memory storage; saved locations are lost on exit");
            Ok(Arc::new(MemoryStore::new()))
        }
        _ => {
            let path = ConfigLoader::storage_path(config);
            info!("Using sqlite storage at {}", path.display());
            Ok(Arc::new(SqliteStore::open(path).await?))
        }
    }
}
