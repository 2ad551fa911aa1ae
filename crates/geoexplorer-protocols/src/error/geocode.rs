//! Geocoding errors.

use thiserror::Error;

use super::ErrorKind;

#[derive(Debug, Error)]
pub enum GeocodeError {
    /// The provider answered but matched nothing.
    #[error("No results for {0}")]
    ZeroResults(String),

    #[error("Maps API key not configured. Please visit the settings page.")]
    MissingCredential,

    #[error("Geocoding request rejected: {status} - {message}")]
    Rejected { status: String, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed geocoding response: {0}")]
    MalformedResponse(String),

    #[error("Invalid geocoding request: {0}")]
    InvalidRequest(String),
}

impl GeocodeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ZeroResults(_) => ErrorKind::NotFound,
            Self::MissingCredential => ErrorKind::Configuration,
            Self::Rejected { .. } | Self::Network(_) => ErrorKind::Transport,
            Self::MalformedResponse(_) => ErrorKind::MalformedResponse,
            Self::InvalidRequest(_) => ErrorKind::Validation,
        }
    }
}
