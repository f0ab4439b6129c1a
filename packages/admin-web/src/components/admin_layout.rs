//! Admin layout wrapper

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::routes::Route;
use super::{AdminNav, LoadingSpinner};

/// Admin layout component that provides navigation around every review page
#[component]
pub fn AdminLayout() -> Element {
    let auth = use_auth();

    // Wait until the session store has been read
    if *auth.loading.read() {
        return rsx! {
            div {
                class: "min-h-screen flex items-center justify-center bg-gray-100",
                LoadingSpinner {}
            }
        };
    }

    rsx! {
        div {
            class: "min-h-screen bg-gray-100",

            // Navigation
            AdminNav {}

            // Main content
            main {
                class: "p-6 max-w-6xl mx-auto",
                Outlet::<Route> {}
            }
        }
    }
}
