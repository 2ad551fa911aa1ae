//! Persistent store errors.

use thiserror::Error;

use super::ErrorKind;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Connection error: {0}")]
    Connection(String),
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Storage
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error() {
        let err = StoreError::Storage("quota exceeded".to_string());
        let display = err.to_string();
        assert!(display.contains("Storage error"));
        assert!(display.contains("quota exceeded"));
    }

    #[test]
    fn test_serialization_error_from_serde() {
        let serde_err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let err = StoreError::from(serde_err);
        assert!(matches!(err, StoreError::Serialization(_)));
        assert_eq!(err.kind(), ErrorKind::Storage);
    }

    #[test]
    fn test_connection_error() {
        let err = StoreError::Connection("database is locked".to_string());
        assert!(err.to_string().contains("Connection error"));
    }
}
