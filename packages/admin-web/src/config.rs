//! Dashboard configuration

use anyhow::{Context, Result};
use request_review::ReviewConfig;

/// Load the review configuration.
///
/// The browser has no process environment, so the web build reads the values
/// baked in at compile time instead.
pub fn load_config() -> Result<ReviewConfig> {
    #[cfg(feature = "web")]
    let loaded = ReviewConfig::from_lookup(|key| match key {
        "LMS_API_URL" => option_env!("LMS_API_URL").map(str::to_string),
        "REVIEW_PAGE_SIZE" => option_env!("REVIEW_PAGE_SIZE").map(str::to_string),
        _ => None,
    });

    #[cfg(not(feature = "web"))]
    let loaded = ReviewConfig::from_env();

    loaded.context("Failed to load review configuration")
}

/// Configuration for the app root. Falls back to defaults with a warning so
/// a bad page size never blanks the dashboard.
pub fn config_or_default() -> ReviewConfig {
    load_config().unwrap_or_else(|err| {
        tracing::warn!(error = %format!("{:#}", err), "Using default review configuration");
        ReviewConfig::default()
    })
}
