//! Loading components

use dioxus::prelude::*;

/// Block loading spinner with a caption
#[component]
pub fn LoadingSpinner(#[props(default = "Loading...".to_string())] message: String) -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center py-8",
            div {
                class: "flex space-x-2",
                div { class: "w-3 h-3 bg-blue-500 rounded-full animate-bounce" }
                div { class: "w-3 h-3 bg-blue-500 rounded-full animate-bounce", style: "animation-delay: 0.1s" }
                div { class: "w-3 h-3 bg-blue-500 rounded-full animate-bounce", style: "animation-delay: 0.2s" }
            }
            p { class: "mt-4 text-sm text-gray-500", "{message}" }
        }
    }
}

/// Inline loading indicator for buttons
#[component]
pub fn LoadingDots() -> Element {
    rsx! {
        span {
            class: "inline-flex space-x-1",
            span { class: "w-1.5 h-1.5 bg-white rounded-full animate-bounce" }
            span { class: "w-1.5 h-1.5 bg-white rounded-full animate-bounce", style: "animation-delay: 0.1s" }
            span { class: "w-1.5 h-1.5 bg-white rounded-full animate-bounce", style: "animation-delay: 0.2s" }
        }
    }
}
