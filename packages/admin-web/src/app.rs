//! Root application component

use dioxus::prelude::*;
use request_review::ReviewConfig;

use crate::auth::AuthProvider;
use crate::config::config_or_default;
use crate::routes::Route;

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// Root application component
#[component]
pub fn App() -> Element {
    // Shared configuration and API client for every review page
    let config = use_context_provider(config_or_default);
    use_context_provider(move || config.client());

    rsx! {
        // Global styles
        document::Script { src: TAILWIND_CDN }

        // Auth context provider wraps the entire app
        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Hook to access the review configuration
pub fn use_config() -> ReviewConfig {
    use_context::<ReviewConfig>()
}
