//! Errors returned by transports.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("request failed: {0}")]
    Transport(#[source] Box<ureq::Transport>),

    #[error("failed to encode API request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to read API response: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to decode API response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("invalid API URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("object not found: {0}")]
    NotFound(String),
}
