//! Remote text generation errors.

use thiserror::Error;

use super::ErrorKind;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("{0} API key not configured. Please visit the settings page.")]
    MissingCredential(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl GenerationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingCredential(_) => ErrorKind::Configuration,
            Self::Network(_) | Self::ApiError { .. } => ErrorKind::Transport,
            Self::MalformedResponse(_) => ErrorKind::MalformedResponse,
        }
    }
}

#[cfg(test)]
#[path = "generation_tests.rs"]
mod tests;
