//! Pure LMS admin REST API client.
//!
//! A minimal client for the request-review endpoints of the LMS backend:
//! listing pending and all enrollment/video requests and updating a request's
//! status. Every call takes an explicit [`Credential`]; responses are
//! normalized so callers see one `Result` shape regardless of which success
//! convention an endpoint uses.
//!
//! # Example
//!
//! ```rust,ignore
//! use lms_client::{Category, Credential, ListKind, LmsClient, RequestStatus};
//!
//! let client = LmsClient::from_env()?;
//! let credential = Credential::new(token)?;
//!
//! let pending = client
//!     .list_requests(&credential, Category::Enrollment, ListKind::Pending)
//!     .await?;
//! client
//!     .update_status(&credential, Category::Enrollment, &pending[0].id, RequestStatus::Approved)
//!     .await?;
//! ```

pub mod credential;
mod envelope;
pub mod error;
pub mod types;

pub use credential::Credential;
pub use error::{LmsError, Result};
pub use types::{Category, ListKind, Reference, RequestRecord, RequestStatus, StatusUpdate};

use reqwest::{Client, RequestBuilder, Url};
use serde_json::Value;
use tracing::debug;

/// Fallback base URL used when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// LMS admin API client.
#[derive(Clone)]
pub struct LmsClient {
    http_client: Client,
    base_url: String,
}

impl LmsClient {
    /// Create a client rooted at `base_url` (e.g. `https://lms.example.com/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create from environment variable `LMS_API_URL`.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("LMS_API_URL")
            .map_err(|_| LmsError::Config("LMS_API_URL not set".into()))?;
        Ok(Self::new(base_url))
    }

    /// Use a preconfigured reqwest client (proxies, custom headers).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http_client = client;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /{category}/{pending|all}`
    pub async fn list_requests(
        &self,
        credential: &Credential,
        category: Category,
        kind: ListKind,
    ) -> Result<Vec<RequestRecord>> {
        let url = self.endpoint(&[category.path(), kind.path()])?;
        let payload = self
            .send(self.http_client.get(url).bearer_auth(credential.token()))
            .await?;

        let records: Vec<RequestRecord> = envelope::list_data(payload)?;
        debug!(?category, ?kind, count = records.len(), "Fetched request list");
        Ok(records)
    }

    /// `PUT /{category}/update/{id}` with body `{ "status": ... }`
    pub async fn update_status(
        &self,
        credential: &Credential,
        category: Category,
        id: &str,
        status: RequestStatus,
    ) -> Result<()> {
        let url = self.endpoint(&[category.path(), "update", id])?;
        self.send(
            self.http_client
                .put(url)
                .bearer_auth(credential.token())
                .json(&StatusUpdate { status }),
        )
        .await?;

        debug!(?category, id, %status, "Updated request status");
        Ok(())
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            LmsError::Config(format!("invalid base URL `{}`: {}", self.base_url, e))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                LmsError::Config(format!("base URL `{}` cannot hold a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Value> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        envelope::interpret(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn credential() -> Credential {
        Credential::new("admin-token").unwrap()
    }

    #[tokio::test]
    async fn lists_pending_enrollments_with_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/enrollment/pending"))
            .and(header("authorization", "Bearer admin-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{
                    "_id": "r1",
                    "userID": { "_id": "u1", "name": "Asha" },
                    "courseID": { "_id": "c1", "name": "Algebra" },
                    "status": "Pending",
                    "createdAt": "2024-03-05T10:00:00.000Z"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = LmsClient::new(server.uri());
        let records = client
            .list_requests(&credential(), Category::Enrollment, ListKind::Pending)
            .await
            .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "r1");
        assert_eq!(records[0].status, RequestStatus::Pending);
    }

    #[tokio::test]
    async fn base_path_is_preserved() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/videos/all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let client = LmsClient::new(format!("{}/api/", server.uri()));
        let records = client
            .list_requests(&credential(), Category::Video, ListKind::All)
            .await
            .unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn update_sends_status_body() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/videos/update/v9"))
            .and(header("authorization", "Bearer admin-token"))
            .and(body_json(json!({ "status": "Declined" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let client = LmsClient::new(server.uri());
        client
            .update_status(&credential(), Category::Video, "v9", RequestStatus::Declined)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn backend_message_is_surfaced_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/enrollment/update/r1"))
            .respond_with(
                ResponseTemplate::new(403).set_body_json(json!({ "message": "Admins only" })),
            )
            .mount(&server)
            .await;

        let client = LmsClient::new(server.uri());
        let err = client
            .update_status(&credential(), Category::Enrollment, "r1", RequestStatus::Approved)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            LmsError::Api {
                status: 403,
                message: "Admins only".into()
            }
        );
        assert_eq!(err.to_string(), "Admins only");
    }

    #[tokio::test]
    async fn html_maintenance_page_is_a_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/enrollment/all"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<html>maintenance</html>")
                    .insert_header("content-type", "text/html"),
            )
            .mount(&server)
            .await;

        let client = LmsClient::new(server.uri());
        let err = client
            .list_requests(&credential(), Category::Enrollment, ListKind::All)
            .await
            .unwrap_err();
        assert!(matches!(err, LmsError::Parse(_)));
    }

    #[tokio::test]
    async fn empty_list_body_is_a_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/videos/pending"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = LmsClient::new(server.uri());
        let result = client
            .list_requests(&credential(), Category::Video, ListKind::Pending)
            .await;
        assert!(matches!(result, Err(LmsError::Parse(_))));
    }

    #[tokio::test]
    async fn http_style_status_field_is_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/videos/all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": 200,
                "data": [{ "_id": "v1", "status": "Approved" }]
            })))
            .mount(&server)
            .await;

        let client = LmsClient::new(server.uri());
        let records = client
            .list_requests(&credential(), Category::Video, ListKind::All)
            .await
            .unwrap();
        assert_eq!(records.len(), 1);
    }

    #[tokio::test]
    async fn bad_date_keeps_the_rest_of_the_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/enrollment/all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    { "_id": "r1", "status": "Pending", "createdAt": "2024-03-05T10:00:00.000Z" },
                    { "_id": "r2", "status": "Pending", "createdAt": "not a date" }
                ]
            })))
            .mount(&server)
            .await;

        let client = LmsClient::new(server.uri());
        let records = client
            .list_requests(&credential(), Category::Enrollment, ListKind::All)
            .await
            .unwrap();

        assert_eq!(records.len(), 2);
        assert!(records[0].created_at.is_some());
        assert!(records[1].created_at.is_none());
    }

    #[tokio::test]
    async fn unreachable_server_is_a_network_error() {
        let client = LmsClient::new("http://127.0.0.1:9");
        let err = client
            .list_requests(&credential(), Category::Enrollment, ListKind::All)
            .await
            .unwrap_err();
        assert!(matches!(err, LmsError::Network(_)));
    }

    #[test]
    fn malformed_base_url_is_a_config_error() {
        let client = LmsClient::new("not a url");
        assert!(matches!(
            client.endpoint(&["enrollment", "all"]),
            Err(LmsError::Config(_))
        ));
    }
}
