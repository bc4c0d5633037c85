//! Client error types

use thiserror::Error;

/// Message shown whenever the menu cannot be fetched
pub const LOAD_FAILED_MESSAGE: &str = "Unable to load menu.";

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid client configuration
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Listing endpoint not found (wrong base URL)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-success status
    #[error("Server error ({status}): {body}")]
    Server { status: u16, body: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
