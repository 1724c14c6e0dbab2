//! Error types for the catalog client.

use thiserror::Error;

/// Errors that can occur while talking to the music catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Locator is not a bare id, a playlist URI or a playlist URL
    #[error("Invalid playlist URL or ID: {0}")]
    InvalidLocator(String),

    /// Catalog answered with a non-success status
    #[error("Catalog request failed ({status}): {status_text}")]
    CatalogRequestFailed { status: u16, status_text: String },

    /// Request never got a response (connect, timeout, TLS, ...)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Failed to parse catalog response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Invalid catalog base URL
    #[error("Invalid catalog URL: {0}")]
    InvalidBaseUrl(String),
}

impl CatalogError {
    /// Whether the failure came from the network or the catalog rather than the caller's input
    pub fn is_request_failure(&self) -> bool {
        matches!(
            self,
            Self::CatalogRequestFailed { .. } | Self::Request(_) | Self::ParseError(_)
        )
    }
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
