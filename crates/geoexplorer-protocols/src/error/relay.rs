//! Relay errors.

use thiserror::Error;

use super::{ErrorKind, GenerationError, GeocodeError, StoreError};

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("{0}")]
    Validation(String),

    #[error("Unhandled request type: {0}")]
    Unhandled(String),

    #[error("{0} API key not configured. Please visit the settings page.")]
    MissingCredential(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Geocode(#[from] GeocodeError),

    #[error("Relay channel closed")]
    ChannelClosed,

    /// A failure reported by the relay on the other side of the channel.
    #[error("{message}")]
    Failed { kind: ErrorKind, message: String },
}

impl RelayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Unhandled(_) => ErrorKind::Unhandled,
            Self::MissingCredential(_) => ErrorKind::Configuration,
            Self::Store(e) => e.kind(),
            Self::Generation(e) => e.kind(),
            Self::Geocode(e) => e.kind(),
            Self::ChannelClosed => ErrorKind::Transport,
            Self::Failed { kind, .. } => *kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_verbatim() {
        let err = RelayError::Validation("Invalid location index".to_string());
        assert_eq!(err.to_string(), "Invalid location index");
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_unhandled() {
        let err = RelayError::Unhandled("API_KEYS_UPDATED".to_string());
        assert!(err.to_string().contains("API_KEYS_UPDATED"));
        assert_eq!(err.kind(), ErrorKind::Unhandled);
    }

    #[test]
    fn test_kind_delegates_to_source() {
        let err = RelayError::from(GenerationError::MalformedResponse("x".to_string()));
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);

        let err = RelayError::from(StoreError::Storage("disk full".to_string()));
        assert_eq!(err.kind(), ErrorKind::Storage);
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_failed_keeps_remote_kind() {
        let err = RelayError::Failed {
            kind: ErrorKind::Configuration,
            message: "Gemini API key not configured.".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(err.to_string(), "Gemini API key not configured.");
    }

    #[test]
    fn test_missing_credential() {
        let err = RelayError::MissingCredential("Google Maps".to_string());
        assert!(err.to_string().starts_with("Google Maps API key not configured"));
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }
}
