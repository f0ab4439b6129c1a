//! Admin request review pages

use dioxus::prelude::*;
use lms_client::{Category, ListKind, LmsClient, RequestStatus};
use request_review::{CategoryLabels, Request};

use crate::app::use_config;
use crate::auth::use_auth;
use crate::components::{ConfirmModal, ErrorBanner, LoadingSpinner, PaginationBar};
use crate::routes::Route;
use crate::state::use_review_board;

/// Student enrollment requests page
#[component]
pub fn EnrollmentRequests() -> Element {
    rsx! {
        RequestReview { category: Category::Enrollment }
    }
}

/// Teacher video requests page
#[component]
pub fn VideoRequests() -> Element {
    rsx! {
        RequestReview { category: Category::Video }
    }
}

/// Review screen for one category: pending/all tabs, paged table, and the
/// approve/decline confirmation.
#[component]
fn RequestReview(category: Category) -> Element {
    let auth = use_auth();
    let config = use_config();
    let client = use_context::<LmsClient>();
    let board = use_review_board(category, config.page_size);

    // Load on mount, and again whenever the session credential changes
    let effect_client = client.clone();
    use_effect(move || {
        let credential = auth.credential.read().clone();
        board.reload(effect_client.clone(), credential);
    });

    let refresh_client = client.clone();
    let retry_client = client.clone();
    let confirm_client = client;

    let store = board.store.read();
    let view = *board.view.read();
    let approval = board.approval.read();

    let active = view.active();
    let rows = view.visible(&store).to_vec();
    let first_row = view.row_number(0);
    let total_pages = view.total_pages(store.list(active).len());
    let busy = approval.is_busy() || store.is_loading();
    let pending_count = store.pending_count();
    let approval_error = approval.error().map(str::to_string);
    let store_error = store.error().map(str::to_string);
    let loading = store.is_loading();
    let modal = approval
        .change()
        .map(|change| (approval.prompt().unwrap_or_default(), change.target));
    let submitting = approval.is_busy();

    rsx! {
        div {
            div {
                class: "flex items-center justify-between mb-6",
                h1 { class: "text-2xl font-bold text-gray-900", "{category.tab_title()}" }
                button {
                    class: "px-3 py-1.5 bg-white border border-gray-300 text-sm rounded hover:bg-gray-50 disabled:opacity-50",
                    disabled: busy,
                    onclick: move |_| board.reload(refresh_client.clone(), auth.credential()),
                    "Refresh"
                }
            }

            if let Some(error) = approval_error {
                ErrorBanner {
                    message: error,
                    action_label: "Dismiss",
                    on_action: move |_| board.dismiss_error()
                }
            }

            div {
                class: "bg-white rounded-lg shadow-sm border border-gray-200 p-4",

                // List tabs
                div {
                    class: "flex gap-2 border-b border-gray-200 mb-4",
                    TabButton {
                        label: "Pending",
                        active: active == ListKind::Pending,
                        badge: pending_count,
                        on_select: move |_| board.switch_tab(ListKind::Pending)
                    }
                    TabButton {
                        label: "All",
                        active: active == ListKind::All,
                        badge: 0,
                        on_select: move |_| board.switch_tab(ListKind::All)
                    }
                }

                if loading {
                    LoadingSpinner { message: "Loading requests..." }
                } else if let Some(error) = store_error {
                    ErrorBanner {
                        message: error,
                        action_label: "Retry",
                        on_action: move |_| board.reload(retry_client.clone(), auth.credential())
                    }
                } else {
                    RequestTable {
                        category,
                        rows,
                        first_row,
                        show_actions: active == ListKind::Pending,
                        disabled: busy,
                        on_action: move |(request, target): (Request, RequestStatus)| {
                            board.request_action(request, target)
                        }
                    }
                    PaginationBar {
                        current: view.current_page(),
                        total: total_pages,
                        on_select: move |page| board.set_page(page),
                        on_prev: move |_| board.prev_page(),
                        on_next: move |_| board.next_page()
                    }
                }
            }

            if let Some((prompt, target)) = modal {
                ConfirmModal {
                    prompt,
                    target,
                    busy: submitting,
                    on_cancel: move |_| board.cancel(),
                    on_confirm: move |_| board.confirm(confirm_client.clone(), auth.credential())
                }
            }
        }
    }
}

#[component]
fn TabButton(
    label: &'static str,
    active: bool,
    badge: usize,
    on_select: EventHandler<()>,
) -> Element {
    rsx! {
        button {
            class: if active {
                "px-4 py-2 -mb-px text-sm font-medium border-b-2 border-blue-600 text-blue-700"
            } else {
                "px-4 py-2 -mb-px text-sm font-medium text-gray-500 hover:text-gray-700"
            },
            onclick: move |_| on_select.call(()),
            "{label}"
            if badge > 0 {
                span {
                    class: "ml-2 px-2 py-0.5 rounded-full bg-red-600 text-white text-xs",
                    "{badge}"
                }
            }
        }
    }
}

#[component]
fn RequestTable(
    category: Category,
    rows: Vec<Request>,
    first_row: usize,
    show_actions: bool,
    disabled: bool,
    on_action: EventHandler<(Request, RequestStatus)>,
) -> Element {
    let is_video = category == Category::Video;

    rsx! {
        div {
            class: "overflow-x-auto",
            table {
                class: "min-w-full divide-y divide-gray-200",
                thead {
                    class: "bg-gray-50",
                    tr {
                        th { class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase", "#" }
                        th { class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase", "{category.subject_label()}" }
                        if is_video {
                            th { class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Video Title" }
                        }
                        th { class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Course Name" }
                        th { class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Date" }
                        th { class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Status" }
                        if show_actions {
                            th { class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Actions" }
                        }
                    }
                }
                tbody {
                    class: "bg-white divide-y divide-gray-200",
                    if rows.is_empty() {
                        tr {
                            td {
                                colspan: "8",
                                class: "px-4 py-12 text-center text-gray-500",
                                "{category.empty_message()}"
                            }
                        }
                    }
                    for (index, request) in rows.into_iter().enumerate() {
                        RequestRow {
                            key: "{request.id}",
                            request,
                            serial: first_row + index,
                            is_video,
                            show_actions,
                            disabled,
                            on_action
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RequestRow(
    request: Request,
    serial: usize,
    is_video: bool,
    show_actions: bool,
    disabled: bool,
    on_action: EventHandler<(Request, RequestStatus)>,
) -> Element {
    let status_class = match request.status {
        RequestStatus::Pending => "text-purple-700",
        RequestStatus::Approved => "text-green-700",
        RequestStatus::Declined => "text-red-700",
    };
    let approve_request = request.clone();
    let decline_request = request.clone();

    rsx! {
        tr {
            class: "hover:bg-gray-50",
            td { class: "px-4 py-3 text-sm font-bold text-gray-900", "{serial}" }
            td { class: "px-4 py-3 text-sm text-gray-700", "{request.subject_display()}" }
            if is_video {
                td { class: "px-4 py-3 text-sm text-gray-700", "{request.title_display()}" }
            }
            td { class: "px-4 py-3 text-sm text-gray-700", "{request.target_display()}" }
            td { class: "px-4 py-3 text-sm text-gray-500", "{request.created_display()}" }
            td { class: "px-4 py-3 text-sm font-medium {status_class}", "{request.status}" }
            if show_actions {
                td {
                    class: "px-4 py-3",
                    div {
                        class: "flex gap-2",
                        button {
                            class: "px-2 py-1 bg-green-100 text-green-700 text-xs rounded hover:bg-green-200 disabled:opacity-50",
                            disabled,
                            onclick: move |_| on_action.call((approve_request.clone(), RequestStatus::Approved)),
                            "Approve"
                        }
                        button {
                            class: "px-2 py-1 bg-red-100 text-red-700 text-xs rounded hover:bg-red-200 disabled:opacity-50",
                            disabled,
                            onclick: move |_| on_action.call((decline_request.clone(), RequestStatus::Declined)),
                            "Decline"
                        }
                    }
                }
            }
        }
    }
}

/// Fallback for unknown paths
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "min-h-screen flex flex-col items-center justify-center bg-gray-100",
            h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Page not found" }
            p { class: "text-gray-600 mb-6", "/{path}" }
            Link {
                to: Route::EnrollmentRequests {},
                class: "text-blue-600 hover:text-blue-700 font-medium",
                "Back to requests"
            }
        }
    }
}
