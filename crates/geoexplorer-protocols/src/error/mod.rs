//! Error types for the GeoExplorer protocol layer.

mod kind;
mod store;
mod generation;
mod geocode;
mod relay;

pub use kind::*;
pub use store::*;
pub use generation::*;
pub use geocode::*;
pub use relay::*;
