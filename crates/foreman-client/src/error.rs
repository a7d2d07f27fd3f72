//! Error types for the Foreman client

use thiserror::Error;

/// Errors that can occur when talking to a Foreman server
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Server answered with a non-200 status
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body, kept for diagnostics
        body: String,
    },

    /// Response violates the paging contract
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
