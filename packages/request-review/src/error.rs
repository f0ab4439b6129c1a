//! Error types for the review workflow.

use lms_client::LmsError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReviewError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    /// No credential in the session; detected before any network call
    #[error("Unauthorized: No token found")]
    MissingCredential,

    /// Transport failure or backend-reported failure
    #[error(transparent)]
    Backend(LmsError),

    /// Action not allowed in the controller's current state
    #[error("{0}")]
    InvalidTransition(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<LmsError> for ReviewError {
    fn from(err: LmsError) -> Self {
        match err {
            LmsError::MissingCredential => ReviewError::MissingCredential,
            other => ReviewError::Backend(other),
        }
    }
}

impl ReviewError {
    /// Banner text for a failed operation. Precondition failures are shown
    /// as-is, everything else gets the operation's context prefix.
    pub fn banner(&self, context: &str) -> String {
        match self {
            ReviewError::MissingCredential => self.to_string(),
            other => format!("{}: {}", context, other),
        }
    }
}
