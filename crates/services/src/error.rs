//! Shared error types for the services crate.

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Errors emitted while talking to the review backend.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BackendError {
    #[error("backend request failed with status {0}")]
    HttpStatus(StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Raised only by the in-memory test backend.
    #[cfg(any(test, feature = "test-support"))]
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

impl BackendError {
    /// Status code when the backend answered but rejected the request.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            BackendError::HttpStatus(status) => Some(*status),
            _ => None,
        }
    }
}

/// Errors emitted while building `BackendConfig`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid backend url {raw:?}: {source}")]
    InvalidUrl {
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error("backend url must use http or https, got {0:?}")]
    UnsupportedScheme(String),
    #[error("invalid timeout seconds: {0:?}")]
    InvalidTimeout(String),
}
