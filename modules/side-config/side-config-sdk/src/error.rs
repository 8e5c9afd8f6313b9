//! Error types for the host configuration store.

use thiserror::Error;

/// Errors returned by a [`ConfigStoreClient`](crate::ConfigStoreClient).
#[derive(Debug, Clone, Error)]
pub enum ConfigStoreError {
    /// The transport answered with a non-success HTTP status.
    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },

    /// The store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Storage-side failure (I/O, encoding).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ConfigStoreError {
    /// Create an `Http` error.
    pub fn http(status: u16, status_text: impl Into<String>) -> Self {
        Self::Http {
            status,
            status_text: status_text.into(),
        }
    }

    /// Create an `Unavailable` error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Create an `Internal` error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Transport status code. `0` when the request never produced a response.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Self::Http { status, .. } => *status,
            Self::Unavailable(_) | Self::Internal(_) => 0,
        }
    }

    /// Transport status text, or the failure message when there is no HTTP status.
    #[must_use]
    pub fn status_text(&self) -> &str {
        match self {
            Self::Http { status_text, .. } => status_text,
            Self::Unavailable(message) | Self::Internal(message) => message,
        }
    }
}
