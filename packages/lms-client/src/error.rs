//! Error types for the LMS client.

use thiserror::Error;

/// Result type for LMS client operations.
pub type Result<T> = std::result::Result<T, LmsError>;

/// LMS client errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LmsError {
    /// No bearer token available; nothing was sent
    #[error("Unauthorized: No token found")]
    MissingCredential,

    /// Configuration error (missing base URL, malformed URL)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection refused, DNS, aborted body)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response. `message` is the backend's own text when it sent one.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// 2xx response whose payload reports failure
    #[error("{0}")]
    Rejected(String),

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for LmsError {
    fn from(err: reqwest::Error) -> Self {
        LmsError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for LmsError {
    fn from(err: serde_json::Error) -> Self {
        LmsError::Parse(err.to_string())
    }
}
