//! In-memory stand-in for the LMS backend.

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;
use lms_client::LmsError;
use request_review::{
    Category, Credential, ListKind, Request, RequestBackend, RequestId, RequestStatus,
    ReviewError,
};

/// One call received by the fake, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Fetch(Category, ListKind),
    Update(Category, RequestId, RequestStatus),
}

#[derive(Default)]
pub struct FakeBackend {
    requests: RefCell<HashMap<Category, Vec<Request>>>,
    fetch_failures: RefCell<HashMap<(Category, ListKind), ReviewError>>,
    update_failure: RefCell<Option<ReviewError>>,
    calls: RefCell<Vec<Call>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_requests(self, category: Category, requests: Vec<Request>) -> Self {
        self.requests.borrow_mut().insert(category, requests);
        self
    }

    pub fn fail_fetch(&self, category: Category, kind: ListKind, err: ReviewError) {
        self.fetch_failures.borrow_mut().insert((category, kind), err);
    }

    pub fn fail_update(&self, err: ReviewError) {
        *self.update_failure.borrow_mut() = Some(err);
    }

    pub fn clear_failures(&self) {
        self.fetch_failures.borrow_mut().clear();
        *self.update_failure.borrow_mut() = None;
    }

    /// Simulate a change made outside the dashboard.
    pub fn set_status(&self, category: Category, id: &str, status: RequestStatus) {
        if let Some(request) = self
            .requests
            .borrow_mut()
            .get_mut(&category)
            .and_then(|list| list.iter_mut().find(|r| r.id.as_str() == id))
        {
            request.status = status;
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn update_calls(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, Call::Update(..)))
            .count()
    }
}

pub fn network_error() -> ReviewError {
    ReviewError::Backend(LmsError::Network("connection reset".into()))
}

#[async_trait(?Send)]
impl RequestBackend for FakeBackend {
    async fn fetch_requests(
        &self,
        _credential: &Credential,
        category: Category,
        kind: ListKind,
    ) -> request_review::Result<Vec<Request>> {
        self.calls.borrow_mut().push(Call::Fetch(category, kind));

        if let Some(err) = self.fetch_failures.borrow().get(&(category, kind)) {
            return Err(err.clone());
        }

        let list = self
            .requests
            .borrow()
            .get(&category)
            .cloned()
            .unwrap_or_default();

        Ok(match kind {
            ListKind::Pending => list.into_iter().filter(Request::is_pending).collect(),
            ListKind::All => list,
        })
    }

    async fn update_status(
        &self,
        _credential: &Credential,
        category: Category,
        id: &RequestId,
        status: RequestStatus,
    ) -> request_review::Result<()> {
        self.calls
            .borrow_mut()
            .push(Call::Update(category, id.clone(), status));

        if let Some(err) = self.update_failure.borrow().clone() {
            return Err(err);
        }

        let mut requests = self.requests.borrow_mut();
        let request = requests
            .get_mut(&category)
            .and_then(|list| list.iter_mut().find(|r| &r.id == id))
            .ok_or_else(|| {
                ReviewError::Backend(LmsError::Api {
                    status: 404,
                    message: "Request not found".into(),
                })
            })?;

        if request.status.is_terminal() {
            return Err(ReviewError::Backend(LmsError::Rejected(
                "Request already reviewed".into(),
            )));
        }
        request.status = status;
        Ok(())
    }
}
