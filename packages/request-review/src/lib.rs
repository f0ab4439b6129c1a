//! # Request review
//!
//! Review workflow for LMS enrollment requests (students asking to join a
//! course) and video requests (teachers uploading course videos).
//!
//! - [`RequestStore`] holds the pending and all lists of one category and
//!   reloads them wholesale.
//! - [`ApprovalController`] drives one approve/decline through a
//!   confirmation step and reloads the store afterwards.
//! - [`PaginatedView`] pages through whichever list is on screen.
//!
//! All backend access goes through [`RequestBackend`], implemented for
//! [`lms_client::LmsClient`]. Each component exposes both an `async` method
//! (`load`, `confirm`) and a begin/finish pair for UI event loops that must
//! not hold a borrow across an await.
//!
//! ```rust,ignore
//! let client = ReviewConfig::from_env()?.client();
//! let mut store = RequestStore::new(Category::Enrollment);
//! store.load(&client, Some(&credential)).await?;
//!
//! let mut controller = ApprovalController::new(Category::Enrollment);
//! controller.request_action(store.pending()[0].clone(), RequestStatus::Approved)?;
//! controller.confirm(&client, Some(&credential), &mut store).await?;
//! ```

pub mod approval;
pub mod backend;
pub mod config;
pub mod error;
pub mod model;
pub mod pagination;
pub mod store;

pub use approval::{ApprovalController, ApprovalState, StatusChange};
pub use backend::RequestBackend;
pub use config::ReviewConfig;
pub use error::{Result, ReviewError};
pub use model::{CategoryLabels, Request, RequestId, NOT_AVAILABLE};
pub use pagination::{PaginatedView, DEFAULT_PAGE_SIZE};
pub use store::{fetch_lists, LoadTicket, RequestLists, RequestStore};

pub use lms_client::{Category, Credential, ListKind, RequestStatus};
