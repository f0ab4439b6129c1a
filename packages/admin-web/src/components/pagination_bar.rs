//! Page navigation control

use dioxus::prelude::*;

/// Prev / numbered pages / Next. Renders nothing for a single page.
#[component]
pub fn PaginationBar(
    current: usize,
    total: usize,
    on_select: EventHandler<usize>,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    if total <= 1 {
        return rsx! {};
    }

    rsx! {
        nav {
            class: "flex justify-center items-center gap-1 mt-4",
            button {
                class: "px-3 py-1 rounded text-sm border border-gray-300 disabled:opacity-50",
                disabled: current == 1,
                onclick: move |_| on_prev.call(()),
                "Prev"
            }
            for page in 1..=total {
                button {
                    key: "{page}",
                    class: if page == current {
                        "px-3 py-1 rounded text-sm bg-blue-600 text-white"
                    } else {
                        "px-3 py-1 rounded text-sm border border-gray-300 hover:bg-gray-100"
                    },
                    onclick: move |_| on_select.call(page),
                    "{page}"
                }
            }
            button {
                class: "px-3 py-1 rounded text-sm border border-gray-300 disabled:opacity-50",
                disabled: current == total,
                onclick: move |_| on_next.call(()),
                "Next"
            }
        }
    }
}
