//! Inline error banner

use dioxus::prelude::*;

/// Red banner shown next to the list or modal that failed, with one action
/// (retry or dismiss).
#[component]
pub fn ErrorBanner(message: String, action_label: String, on_action: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "flex items-start justify-between bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg mb-4",
            span { "{message}" }
            button {
                class: "ml-4 text-red-500 hover:text-red-700 text-sm font-medium",
                onclick: move |_| on_action.call(()),
                "{action_label}"
            }
        }
    }
}
