//! Common types used across GeoExplorer.

mod location;
mod credentials;
mod chat;

pub use location::*;
pub use credentials::*;
pub use chat::*;
