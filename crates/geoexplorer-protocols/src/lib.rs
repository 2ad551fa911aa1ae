//! # GeoExplorer Protocols
//!
//! Core protocol definitions (traits and wire types) for GeoExplorer.
//! Contains only interface definitions - no implementations.
//!
//! ## Core Traits
//!
//! - [`KeyValueStore`] - Trait for persistent key-value storage
//! - [`TextGenerator`] - Trait for remote text-generation clients
//! - [`MapsProvider`] - Trait for mapping capabilities (map objects, geocoding)
//!
//! ## Wire Types
//!
//! - [`RelayRequest`] / [`RelayResponse`] - Messages exchanged with the relay

pub mod error;
pub mod generator;
pub mod maps;
pub mod relay;
pub mod store;
pub mod types;

// Re-export core traits
pub use generator::TextGenerator;
pub use maps::{InfoWindow, MapView, MapsProvider, Marker};
pub use relay::{RelayRequest, RelayResponse};
pub use store::KeyValueStore;
pub use error::{ErrorKind, GenerationError, GeocodeError, RelayError, StoreError};
pub use types::*;
