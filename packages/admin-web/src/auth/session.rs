//! Where the administrator token lives between page loads.
//!
//! The login screen (outside this app) persists the token in browser
//! storage. Server-side renders have no browser, so they read
//! `LMS_ADMIN_TOKEN` instead.

use lms_client::Credential;

/// Raw token from the session store, if any.
#[cfg(feature = "web")]
pub fn stored_token() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(Credential::SESSION_KEY).ok().flatten()
}

#[cfg(not(feature = "web"))]
pub fn stored_token() -> Option<String> {
    std::env::var("LMS_ADMIN_TOKEN").ok()
}

/// The stored token as a credential. Blank tokens count as missing.
pub fn read_credential() -> Option<Credential> {
    match Credential::from_session(stored_token()) {
        Ok(credential) => Some(credential),
        Err(err) => {
            tracing::debug!(error = %err, "No administrator credential in session");
            None
        }
    }
}
