//! Confirm-then-submit controller for a single status change.
//!
//! ```text
//! Idle ──request_action──► Confirming ──confirm──► Submitting ──► Idle
//!   ▲                          │
//!   └─────────cancel───────────┘
//! ```
//!
//! The controller never edits a list. A successful change is followed by a
//! full reload of the owning store so the UI shows backend truth.

use lms_client::{Category, Credential, RequestStatus};
use tracing::{debug, info, warn};

use crate::backend::RequestBackend;
use crate::error::{Result, ReviewError};
use crate::model::{CategoryLabels, Request};
use crate::store::RequestStore;

const UPDATE_CONTEXT: &str = "Error updating request status";

/// A requested status change for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChange {
    pub category: Category,
    pub request: Request,
    pub target: RequestStatus,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ApprovalState {
    #[default]
    Idle,
    Confirming(StatusChange),
    Submitting(StatusChange),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApprovalController {
    category: Category,
    state: ApprovalState,
    error: Option<String>,
}

impl ApprovalController {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            state: ApprovalState::Idle,
            error: None,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn state(&self) -> &ApprovalState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, ApprovalState::Idle)
    }

    /// True while a mutation is in flight; the UI disables its controls.
    pub fn is_busy(&self) -> bool {
        matches!(self.state, ApprovalState::Submitting(_))
    }

    /// The change being confirmed or submitted, if any.
    pub fn change(&self) -> Option<&StatusChange> {
        match &self.state {
            ApprovalState::Idle => None,
            ApprovalState::Confirming(change) | ApprovalState::Submitting(change) => Some(change),
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Confirmation question for the modal.
    pub fn prompt(&self) -> Option<String> {
        self.change().map(|change| {
            format!(
                "Are you sure you want to {} this {}?",
                change.target.verb(),
                self.category.noun()
            )
        })
    }

    /// Ask to move `request` to `target`. Only accepted from `Idle`, for a
    /// pending request and a final target; anything else leaves the state
    /// untouched.
    pub fn request_action(&mut self, request: Request, target: RequestStatus) -> Result<()> {
        match &self.state {
            ApprovalState::Idle => {}
            ApprovalState::Confirming(_) => {
                return Err(self.reject("another action is awaiting confirmation"));
            }
            ApprovalState::Submitting(_) => {
                return Err(self.reject("a status change is already being submitted"));
            }
        }
        if !target.is_terminal() {
            return Err(self.reject("requests can only be approved or declined"));
        }
        if request.status.is_terminal() {
            return Err(self.reject(&format!(
                "request {} is already {}",
                request.id, request.status
            )));
        }

        self.error = None;
        self.state = ApprovalState::Confirming(StatusChange {
            category: self.category,
            request,
            target,
        });
        Ok(())
    }

    /// Back out of the confirmation step.
    pub fn cancel(&mut self) -> Result<()> {
        match self.state {
            ApprovalState::Confirming(_) => {
                self.state = ApprovalState::Idle;
                Ok(())
            }
            _ => Err(self.reject("nothing to cancel")),
        }
    }

    /// Move `Confirming` to `Submitting` and hand out the change to send.
    pub fn begin_submit(&mut self) -> Result<StatusChange> {
        match std::mem::take(&mut self.state) {
            ApprovalState::Confirming(change) => {
                self.state = ApprovalState::Submitting(change.clone());
                Ok(change)
            }
            other => {
                self.state = other;
                Err(self.reject("no action to confirm"))
            }
        }
    }

    /// Leave `Submitting` with the mutation's outcome. Always ends in `Idle`.
    pub fn finish_submit(&mut self, outcome: Result<()>) -> Result<()> {
        if !self.is_busy() {
            return Err(self.reject("no status change in flight"));
        }
        self.state = ApprovalState::Idle;
        if let Err(err) = &outcome {
            self.error = Some(err.banner(UPDATE_CONTEXT));
        }
        outcome
    }

    /// Submit the pending confirmation, then reload `store`.
    ///
    /// The reload starts only after the mutation succeeded. A failed reload
    /// is reported by the store, not here.
    pub async fn confirm<B>(
        &mut self,
        backend: &B,
        credential: Option<&Credential>,
        store: &mut RequestStore,
    ) -> Result<()>
    where
        B: RequestBackend + ?Sized,
    {
        if store.category() != self.category {
            return Err(self.reject("store belongs to another category"));
        }

        let change = self.begin_submit()?;
        let outcome = submit(backend, credential, &change).await;
        if outcome.is_ok() {
            // Refresh errors surface through the store's banner
            let _ = store.load(backend, credential).await;
        }
        self.finish_submit(outcome)
    }

    fn reject(&self, reason: &str) -> ReviewError {
        debug!(category = ?self.category, reason, "Ignoring approval action");
        ReviewError::InvalidTransition(reason.to_string())
    }
}

/// Send one status change to the backend.
pub async fn submit<B>(
    backend: &B,
    credential: Option<&Credential>,
    change: &StatusChange,
) -> Result<()>
where
    B: RequestBackend + ?Sized,
{
    let credential = credential.ok_or(ReviewError::MissingCredential)?;

    match backend
        .update_status(credential, change.category, &change.request.id, change.target)
        .await
    {
        Ok(()) => {
            info!(
                category = ?change.category,
                id = %change.request.id,
                status = %change.target,
                "Request status updated"
            );
            Ok(())
        }
        Err(err) => {
            warn!(
                category = ?change.category,
                id = %change.request.id,
                error = %err,
                "Request status update failed"
            );
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending(id: &str) -> Request {
        Request::new(id, RequestStatus::Pending)
    }

    #[test]
    fn request_then_cancel_returns_to_idle() {
        let mut controller = ApprovalController::new(Category::Enrollment);
        controller
            .request_action(pending("r1"), RequestStatus::Approved)
            .unwrap();
        assert!(matches!(controller.state(), ApprovalState::Confirming(_)));

        controller.cancel().unwrap();
        assert!(controller.is_idle());
        assert!(controller.error().is_none());
    }

    #[test]
    fn prompt_names_the_action_and_category() {
        let mut enrollment = ApprovalController::new(Category::Enrollment);
        enrollment
            .request_action(pending("r1"), RequestStatus::Declined)
            .unwrap();
        assert_eq!(
            enrollment.prompt().as_deref(),
            Some("Are you sure you want to decline this request?")
        );

        let mut video = ApprovalController::new(Category::Video);
        video.request_action(pending("v1"), RequestStatus::Approved).unwrap();
        assert_eq!(
            video.prompt().as_deref(),
            Some("Are you sure you want to approve this video?")
        );
    }

    #[test]
    fn rejects_pending_target_and_terminal_requests() {
        let mut controller = ApprovalController::new(Category::Enrollment);
        assert!(controller
            .request_action(pending("r1"), RequestStatus::Pending)
            .is_err());
        assert!(controller
            .request_action(Request::new("r2", RequestStatus::Approved), RequestStatus::Declined)
            .is_err());
        assert!(controller.is_idle());
    }

    #[test]
    fn second_request_while_submitting_is_ignored() {
        let mut controller = ApprovalController::new(Category::Enrollment);
        controller
            .request_action(pending("r1"), RequestStatus::Declined)
            .unwrap();
        controller.begin_submit().unwrap();

        let result = controller.request_action(pending("r2"), RequestStatus::Approved);
        assert!(matches!(result, Err(ReviewError::InvalidTransition(_))));

        let change = controller.change().unwrap();
        assert_eq!(change.request.id.as_str(), "r1");
        assert_eq!(change.target, RequestStatus::Declined);
        assert!(controller.is_busy());
    }

    #[test]
    fn cancel_and_confirm_need_a_confirmation() {
        let mut controller = ApprovalController::new(Category::Video);
        assert!(controller.cancel().is_err());
        assert!(controller.begin_submit().is_err());
        assert!(controller.is_idle());

        controller.request_action(pending("v1"), RequestStatus::Approved).unwrap();
        controller.begin_submit().unwrap();
        assert!(controller.cancel().is_err());
        assert!(controller.is_busy());
    }

    #[test]
    fn finish_submit_failure_sets_banner_and_returns_to_idle() {
        let mut controller = ApprovalController::new(Category::Enrollment);
        controller.request_action(pending("r1"), RequestStatus::Approved).unwrap();
        controller.begin_submit().unwrap();

        let result = controller.finish_submit(Err(ReviewError::InvalidTransition("gone".into())));
        assert!(result.is_err());
        assert!(controller.is_idle());
        assert_eq!(controller.error(), Some("Error updating request status: gone"));

        controller.dismiss_error();
        assert!(controller.error().is_none());
    }
}
