//! Data-access seam between the workflow and the LMS API.

use async_trait::async_trait;
use lms_client::{Category, Credential, ListKind, LmsClient, RequestStatus};

use crate::error::Result;
use crate::model::{Request, RequestId};

/// Backend operations the review workflow depends on.
///
/// Futures are not required to be `Send`: the dashboard runs on a single
/// event loop (the browser's, or a current-thread runtime in tests).
#[async_trait(?Send)]
pub trait RequestBackend {
    /// Fetch one of the two lists of a category.
    async fn fetch_requests(
        &self,
        credential: &Credential,
        category: Category,
        kind: ListKind,
    ) -> Result<Vec<Request>>;

    /// Set the status of a single request.
    async fn update_status(
        &self,
        credential: &Credential,
        category: Category,
        id: &RequestId,
        status: RequestStatus,
    ) -> Result<()>;
}

#[async_trait(?Send)]
impl RequestBackend for LmsClient {
    async fn fetch_requests(
        &self,
        credential: &Credential,
        category: Category,
        kind: ListKind,
    ) -> Result<Vec<Request>> {
        let records = self.list_requests(credential, category, kind).await?;
        Ok(records.into_iter().map(Request::from).collect())
    }

    async fn update_status(
        &self,
        credential: &Credential,
        category: Category,
        id: &RequestId,
        status: RequestStatus,
    ) -> Result<()> {
        LmsClient::update_status(self, credential, category, id.as_str(), status).await?;
        Ok(())
    }
}
