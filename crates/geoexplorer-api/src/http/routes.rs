//! HTTP route definitions.

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::http::handlers::{get_settings, put_settings, relay};
use crate::http::monitoring;
use crate::state::AppState;

/// Create the router.
///
/// ```text
/// POST   /relay     - Dispatch one relay request
/// GET    /settings  - Read the stored API keys
/// PUT    /settings  - Replace the stored API keys
/// GET    /health    - Health check
/// ```
///
/// Cross-origin access is limited to the state's allowed origins.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(state.allowed_origins());

    Router::new()
        .route("/relay", post(relay))
        .route("/settings", get(get_settings).put(put_settings))
        .route("/health", get(monitoring::health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter(|origin| origin.as_str() != "*")
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid allowed origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([header::CONTENT_TYPE])
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
