use std::env;

use dotenvy::dotenv;
use lms_client::{LmsClient, DEFAULT_BASE_URL};

use crate::error::{Result, ReviewError};
use crate::pagination::DEFAULT_PAGE_SIZE;

/// Review dashboard configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewConfig {
    pub api_url: String,
    pub page_size: usize,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ReviewConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key/value source. Unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let api_url = lookup("LMS_API_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_url);

        let page_size = match lookup("REVIEW_PAGE_SIZE") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|size| *size > 0)
                .ok_or_else(|| {
                    ReviewError::Config(format!(
                        "REVIEW_PAGE_SIZE must be a positive number, got `{}`",
                        raw
                    ))
                })?,
            None => defaults.page_size,
        };

        Ok(Self { api_url, page_size })
    }

    pub fn client(&self) -> LmsClient {
        LmsClient::new(self.api_url.clone())
    }
}
