//! Authentication context provider

use dioxus::prelude::*;
use lms_client::Credential;

use super::session::read_credential;

/// Credential context shared by every review page
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Bearer credential of the signed-in administrator (if any)
    pub credential: Signal<Option<Credential>>,
    /// Whether the session store has not been read yet
    pub loading: Signal<bool>,
}

impl AuthContext {
    /// Check if a credential is available
    pub fn is_authenticated(&self) -> bool {
        self.credential.read().is_some()
    }

    /// Snapshot of the credential for an API call
    pub fn credential(&self) -> Option<Credential> {
        self.credential.read().clone()
    }

    /// Re-read the credential from the session store
    pub fn refresh(mut self) {
        self.credential.set(read_credential());
        self.loading.set(false);
    }
}

/// Auth provider component that wraps the app
#[component]
pub fn AuthProvider(children: Element) -> Element {
    // Create auth signals
    let credential = use_signal(|| None::<Credential>);
    let loading = use_signal(|| true);

    // Provide to children
    let auth = use_context_provider(|| AuthContext { credential, loading });

    // Load initial auth state (client only; effects do not run during SSR)
    use_effect(move || {
        auth.refresh();
    });

    children
}

/// Hook to access the auth context
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}
