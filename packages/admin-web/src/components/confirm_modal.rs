//! Confirmation modal for approve/decline

use dioxus::prelude::*;
use lms_client::RequestStatus;

use super::LoadingDots;

/// Centered "Confirm Action" dialog.
///
/// Both buttons are disabled while `busy` so a double click cannot submit
/// the same change twice.
#[component]
pub fn ConfirmModal(
    prompt: String,
    target: RequestStatus,
    busy: bool,
    on_cancel: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    let confirm_class = match target {
        RequestStatus::Approved => "px-4 py-2 rounded text-sm text-white bg-green-600 hover:bg-green-700 disabled:opacity-50",
        _ => "px-4 py-2 rounded text-sm text-white bg-red-600 hover:bg-red-700 disabled:opacity-50",
    };

    rsx! {
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center bg-black/40",
            div {
                class: "bg-white rounded-lg shadow-xl w-full max-w-md",
                div {
                    class: "flex items-center justify-between px-6 py-4 border-b border-gray-200",
                    h2 { class: "text-lg font-semibold text-gray-900", "Confirm Action" }
                    button {
                        class: "text-gray-400 hover:text-gray-600 disabled:opacity-50",
                        disabled: busy,
                        onclick: move |_| on_cancel.call(()),
                        "\u{2715}"
                    }
                }
                div {
                    class: "px-6 py-4 text-gray-700",
                    p { "{prompt}" }
                }
                div {
                    class: "flex justify-end gap-2 px-6 py-4 border-t border-gray-200",
                    button {
                        class: "px-4 py-2 rounded text-sm bg-gray-200 text-gray-800 hover:bg-gray-300 disabled:opacity-50",
                        disabled: busy,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: confirm_class,
                        disabled: busy,
                        onclick: move |_| on_confirm.call(()),
                        if busy {
                            LoadingDots {}
                        } else {
                            "Confirm"
                        }
                    }
                }
            }
        }
    }
}
