//! SQLite key-value store for GeoExplorer.
//!
//! Persists the credential record and the favorites list across restarts.

mod schema;
mod store;

pub use store::SqliteStore;
