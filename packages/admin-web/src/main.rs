//! LMS Admin - request review dashboard
//!
//! Dioxus fullstack application for reviewing student enrollment requests
//! and teacher video requests. Talks to the LMS REST API directly from the
//! browser with the administrator's stored token.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! LMS_API_URL=http://localhost:5000/api dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod app;
mod auth;
mod components;
mod config;
mod pages;
mod routes;
mod state;

fn main() {
    // Initialize logging (the browser build logs through dioxus)
    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::EnvFilter;

        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .try_init();
    }

    // Launch the Dioxus app
    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}
