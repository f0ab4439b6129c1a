//! Per-page review state

use dioxus::prelude::*;
use lms_client::{Category, Credential, ListKind, LmsClient, RequestStatus};
use request_review::{
    approval, fetch_lists, ApprovalController, PaginatedView, Request, RequestStore,
};

/// Signals backing one category's review page.
///
/// Wraps the workflow types from `request_review` so event handlers can
/// drive them without holding a signal borrow across an await.
#[derive(Clone, Copy)]
pub struct ReviewBoard {
    pub store: Signal<RequestStore>,
    pub approval: Signal<ApprovalController>,
    pub view: Signal<PaginatedView>,
}

/// Create the board for `category`. Must be called from a component body.
pub fn use_review_board(category: Category, page_size: usize) -> ReviewBoard {
    let store = use_signal(|| RequestStore::new(category));
    let approval = use_signal(|| ApprovalController::new(category));
    let view = use_signal(|| PaginatedView::new(page_size));

    ReviewBoard {
        store,
        approval,
        view,
    }
}

impl ReviewBoard {
    pub fn category(&self) -> Category {
        self.store.peek().category()
    }

    /// Reload both lists in the background.
    pub fn reload(self, client: LmsClient, credential: Option<Credential>) {
        spawn(async move {
            self.load_now(&client, credential.as_ref()).await;
        });
    }

    /// Stage an approve/decline for confirmation. Ignored while busy.
    pub fn request_action(mut self, request: Request, target: RequestStatus) {
        let _ = self.approval.write().request_action(request, target);
    }

    pub fn cancel(mut self) {
        let _ = self.approval.write().cancel();
    }

    pub fn dismiss_error(mut self) {
        self.approval.write().dismiss_error();
    }

    /// Submit the staged change, then reload the lists.
    pub fn confirm(mut self, client: LmsClient, credential: Option<Credential>) {
        let Ok(change) = self.approval.write().begin_submit() else {
            return;
        };

        spawn(async move {
            let outcome = approval::submit(&client, credential.as_ref(), &change).await;
            if outcome.is_ok() {
                self.load_now(&client, credential.as_ref()).await;
            }
            let _ = self.approval.write().finish_submit(outcome);
        });
    }

    pub fn switch_tab(mut self, kind: ListKind) {
        self.view.write().switch_tab(kind);
    }

    pub fn set_page(mut self, page: usize) {
        let len = self.active_len();
        self.view.write().set_page(page, len);
    }

    pub fn next_page(mut self) {
        let len = self.active_len();
        self.view.write().next_page(len);
    }

    pub fn prev_page(mut self) {
        self.view.write().prev_page();
    }

    fn active_len(&self) -> usize {
        let kind = self.view.peek().active();
        self.store.peek().list(kind).len()
    }

    /// A newer load started meanwhile (refresh, session reload) supersedes
    /// this one; the store drops the older outcome.
    async fn load_now(mut self, client: &LmsClient, credential: Option<&Credential>) {
        let category = self.category();
        let ticket = self.store.write().begin_load();
        let outcome = fetch_lists(client, category, credential).await;
        let _ = self.store.write().finish_load(ticket, outcome);

        let len = self.active_len();
        self.view.write().clamp_to(len);
    }
}
