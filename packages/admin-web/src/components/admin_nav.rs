//! Top bar with the request category tabs

use dioxus::prelude::*;
use lms_client::Category;
use request_review::CategoryLabels;

use crate::auth::use_auth;
use crate::routes::Route;

const CATEGORIES: [Category; 2] = [Category::Enrollment, Category::Video];

fn category_route(category: Category) -> Route {
    match category {
        Category::Enrollment => Route::EnrollmentRequests {},
        Category::Video => Route::VideoRequests {},
    }
}

/// Admin navigation bar
#[component]
pub fn AdminNav() -> Element {
    let auth = use_auth();
    let signed_in = auth.is_authenticated();

    rsx! {
        header {
            class: "bg-white border-b border-gray-200",
            div {
                class: "max-w-6xl mx-auto px-6 pt-4 flex items-end justify-between",
                div {
                    span { class: "block text-lg font-bold text-blue-700 mb-3", "LMS Admin" }
                    div {
                        class: "flex gap-1",
                        for category in CATEGORIES {
                            CategoryTab { key: "{category.path()}", category }
                        }
                    }
                }

                div {
                    class: "flex items-center gap-3 pb-3 text-sm",
                    span {
                        class: if signed_in { "text-gray-600" } else { "text-red-600" },
                        if signed_in { "Signed in" } else { "No session" }
                    }
                    button {
                        class: "px-3 py-1.5 rounded text-gray-600 hover:text-gray-900 hover:bg-gray-100",
                        onclick: move |_| auth.refresh(),
                        "Reload session"
                    }
                }
            }
        }
    }
}

#[component]
fn CategoryTab(category: Category) -> Element {
    let route = use_route::<Route>();
    let target = category_route(category);
    let selected = route == target;

    rsx! {
        Link {
            to: target,
            class: if selected {
                "px-4 py-2 rounded-t-md text-sm font-medium border border-b-0 border-gray-200 bg-gray-100 text-blue-800"
            } else {
                "px-4 py-2 rounded-t-md text-sm font-medium text-gray-600 hover:text-gray-900"
            },
            "{category.tab_title()}"
        }
    }
}
