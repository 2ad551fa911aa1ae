//! API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use geoexplorer_protocols::error::{ErrorKind, RelayError, StoreError};
use geoexplorer_protocols::RelayResponse;

/// Errors returned by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Relay(#[from] RelayError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Relay(e) => e.kind(),
            Self::Store(e) => e.kind(),
        }
    }
}

/// HTTP status used for a failure of the given kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation | ErrorKind::Unhandled => StatusCode::BAD_REQUEST,
        ErrorKind::Configuration => StatusCode::PRECONDITION_FAILED,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Transport | ErrorKind::MalformedResponse => StatusCode::BAD_GATEWAY,
        ErrorKind::Storage => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let relay_error = match self {
            Self::Relay(e) => e,
            Self::Store(e) => RelayError::Store(e),
        };
        let status = status_for(relay_error.kind());
        (status, Json(RelayResponse::failure(&relay_error))).into_response()
    }
}
