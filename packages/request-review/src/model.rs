//! Domain model shared by the store, the controller and the views.

use std::fmt;

use chrono::{DateTime, Utc};
use lms_client::{Category, Reference, RequestRecord, RequestStatus};

/// Placeholder shown for unresolved names and timestamps.
pub const NOT_AVAILABLE: &str = "N/A";

/// Backend-assigned request id. Unique within one category only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(String);

impl RequestId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RequestId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RequestId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// An enrollment or video request awaiting (or past) review.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub id: RequestId,
    /// Student (enrollment) or teacher (video) name
    pub subject_name: Option<String>,
    /// Course name
    pub target_name: Option<String>,
    /// Video title; enrollments have none
    pub title: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub status: RequestStatus,
}

impl Request {
    pub fn new(id: impl Into<RequestId>, status: RequestStatus) -> Self {
        Self {
            id: id.into(),
            subject_name: None,
            target_name: None,
            title: None,
            created_at: None,
            status,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    pub fn subject_display(&self) -> &str {
        self.subject_name.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn target_display(&self) -> &str {
        self.target_name.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn title_display(&self) -> &str {
        self.title.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// `MM/DD/YYYY`, the dashboard's date format.
    pub fn created_display(&self) -> String {
        self.created_at
            .map(|at| at.format("%m/%d/%Y").to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }
}

impl From<RequestRecord> for Request {
    fn from(record: RequestRecord) -> Self {
        let name = |reference: Option<Reference>| {
            reference.and_then(|r| r.name().map(str::to_string))
        };

        Self {
            id: RequestId(record.id),
            subject_name: name(record.subject),
            target_name: name(record.course),
            title: record.title.filter(|t| !t.trim().is_empty()),
            created_at: record.created_at,
            status: record.status,
        }
    }
}

/// Display vocabulary per category.
pub trait CategoryLabels {
    /// Noun used in confirmation prompts
    fn noun(&self) -> &'static str;
    /// Header of the subject column
    fn subject_label(&self) -> &'static str;
    fn tab_title(&self) -> &'static str;
    fn empty_message(&self) -> &'static str;
}

impl CategoryLabels for Category {
    fn noun(&self) -> &'static str {
        match self {
            Category::Enrollment => "request",
            Category::Video => "video",
        }
    }

    fn subject_label(&self) -> &'static str {
        match self {
            Category::Enrollment => "Student Name",
            Category::Video => "Teacher",
        }
    }

    fn tab_title(&self) -> &'static str {
        match self {
            Category::Enrollment => "Student Requests",
            Category::Video => "Teacher Video Requests",
        }
    }

    fn empty_message(&self) -> &'static str {
        match self {
            Category::Enrollment => "No Request found",
            Category::Video => "No videos found",
        }
    }
}
