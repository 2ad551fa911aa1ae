//! # GeoExplorer API
//!
//! HTTP surface over a running relay.
//!
//! - `POST /relay` - submit a raw relay request, receive the relay response
//! - `GET /settings`, `PUT /settings` - read and replace the API keys
//! - `GET /health` - liveness and version

pub mod error;
pub mod http;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use http::routes::create_router;
pub use server::{ApiServer, ServerConfig};
pub use state::AppState;
