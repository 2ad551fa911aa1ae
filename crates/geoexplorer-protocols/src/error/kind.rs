//! Error classification shared by every surface.

use serde::{Deserialize, Serialize};

/// Coarse error category reported to callers alongside the message.
///
/// Surfaces pick their user-facing wording from this tag: configuration
/// errors point at settings, transport and malformed-response errors ask the
/// user to try again, validation errors are shown inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A required credential is absent.
    Configuration,
    /// Network failure or non-success status from a remote provider.
    Transport,
    /// The remote call succeeded but the payload lacks the expected field.
    MalformedResponse,
    /// Input rejected before any store or network access.
    Validation,
    /// The relay received a request it has no handler for.
    Unhandled,
    /// The persistent store failed to read or write.
    Storage,
    /// A geocoding lookup matched nothing.
    NotFound,
}

impl ErrorKind {
    /// Whether the caller may reasonably retry the same request.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport | Self::MalformedResponse | Self::Storage)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Configuration => "configuration",
            Self::Transport => "transport",
            Self::MalformedResponse => "malformed_response",
            Self::Validation => "validation",
            Self::Unhandled => "unhandled",
            Self::Storage => "storage",
            Self::NotFound => "not_found",
        };
        f.write_str(s)
    }
}
