//! Relay and settings handlers.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::info;

use geoexplorer_protocols::error::RelayError;
use geoexplorer_protocols::{Credentials, MaskedCredentials, RelayResponse};

use crate::error::{status_for, ApiError};
use crate::state::AppState;

/// Dispatch a raw relay request.
///
/// The body is always a relay response, including for bodies that are not
/// JSON; the status reflects its error kind.
pub async fn relay(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<RelayResponse>), ApiError> {
    state.increment_requests();
    let Json(request) = payload.map_err(|rejection| {
        RelayError::Validation(format!("Invalid request body: {}", rejection.body_text()))
    })?;
    let response = state.relay.send_raw(request).await?;

    let status = match response.error_kind {
        Some(kind) if !response.success => status_for(kind),
        _ => StatusCode::OK,
    };
    Ok((status, Json(response)))
}

/// Report which API keys are stored. Keys are masked.
pub async fn get_settings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MaskedCredentials>, ApiError> {
    Ok(Json(state.settings.load().await?.masked()))
}

/// Replace the stored API keys. Both keys are required.
pub async fn put_settings(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<MaskedCredentials>, ApiError> {
    let Json(credentials) = payload.map_err(|rejection| {
        RelayError::Validation(format!("Invalid settings body: {}", rejection.body_text()))
    })?;
    let saved = state.settings.save(credentials).await?;
    info!("API keys updated");
    Ok(Json(saved.masked()))
}
