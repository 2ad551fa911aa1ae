//! # GeoExplorer Core
//!
//! Implementations behind the GeoExplorer relay.
//!
//! ## Components
//!
//! - [`Relay`] - Single dispatch point for [`RelayRequest`](geoexplorer_protocols::RelayRequest)s
//! - [`RelayClient`] - Channel handle used by surfaces to reach a running relay
//! - [`LocationBook`] - Save/list/delete lifecycle of the favorites list
//! - [`Settings`] - Credential record and first-run initialisation
//! - [`Assistant`] - Prompt construction on top of a [`TextGenerator`](geoexplorer_protocols::TextGenerator)
//! - [`Surface`] - Per-surface view state (map, marker, info window, chat)
//! - [`MemoryStore`] / [`FakeMaps`] - In-process store and deterministic geocoder

pub mod assistant;
pub mod fake_maps;
pub mod locations;
pub mod prompts;
pub mod relay;
pub mod settings;
pub mod store;
pub mod surface;

#[cfg(test)]
pub(crate) mod testing;

pub use assistant::Assistant;
pub use fake_maps::FakeMaps;
pub use locations::LocationBook;
pub use relay::{Relay, RelayClient};
pub use settings::Settings;
pub use store::MemoryStore;
pub use surface::{ChatTranscript, Surface};
