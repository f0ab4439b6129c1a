//! Administrator bearer credential.

use std::fmt;

use crate::error::{LmsError, Result};

/// Bearer token attached to every LMS request.
///
/// Constructed explicitly and handed to each call; an absent or blank token
/// is rejected up front as [`LmsError::MissingCredential`] so no request is
/// ever sent unauthenticated.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Key under which the dashboard persists the token client-side.
    pub const SESSION_KEY: &'static str = "SuperAdminToken";

    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(LmsError::MissingCredential);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Build from whatever the session store returned.
    pub fn from_session(token: Option<String>) -> Result<Self> {
        token.map_or(Err(LmsError::MissingCredential), Self::new)
    }

    pub fn token(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_tokens_are_missing() {
        assert_eq!(Credential::new("   "), Err(LmsError::MissingCredential));
        assert_eq!(Credential::from_session(None), Err(LmsError::MissingCredential));
        assert_eq!(
            Credential::from_session(Some(String::new())),
            Err(LmsError::MissingCredential)
        );
    }

    #[test]
    fn token_is_trimmed_and_redacted() {
        let credential = Credential::new(" abc.def \n").unwrap();
        assert_eq!(credential.token(), "abc.def");
        assert_eq!(format!("{:?}", credential), "Credential(***)");
    }
}
