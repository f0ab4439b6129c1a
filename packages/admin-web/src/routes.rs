//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::AdminLayout;
use crate::pages::admin::{EnrollmentRequests, NotFound, VideoRequests};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[nest("/admin")]
        #[layout(AdminLayout)]
            #[route("/requests/enrollments")]
            EnrollmentRequests {},

            #[route("/requests/videos")]
            VideoRequests {},
        #[end_layout]
    #[end_nest]

    #[redirect("/", || Route::EnrollmentRequests {})]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
