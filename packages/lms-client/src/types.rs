use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Review status of an enrollment or video request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum RequestStatus {
    Pending,
    Approved,
    Declined,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Approved => "Approved",
            RequestStatus::Declined => "Declined",
        }
    }

    /// Approved and Declined are final; nothing moves out of them.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RequestStatus::Pending)
    }

    /// Imperative verb used in confirmation prompts.
    pub fn verb(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "reopen",
            RequestStatus::Approved => "approve",
            RequestStatus::Declined => "decline",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for RequestStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(RequestStatus::Pending),
            "approved" => Ok(RequestStatus::Approved),
            "declined" => Ok(RequestStatus::Declined),
            _ => Err(format!("unknown request status `{}`", value)),
        }
    }
}

/// Request namespace. Each category has its own endpoints and id space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Enrollment,
    Video,
}

impl Category {
    /// First path segment of the category's endpoints.
    pub fn path(&self) -> &'static str {
        match self {
            Category::Enrollment => "enrollment",
            Category::Video => "videos",
        }
    }
}

/// Which of the two lists of a category to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ListKind {
    #[default]
    Pending,
    All,
}

impl ListKind {
    pub fn path(&self) -> &'static str {
        match self {
            ListKind::Pending => "pending",
            ListKind::All => "all",
        }
    }
}

/// Foreign reference as the backend sends it: populated, bare id, or null.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Reference {
    Populated {
        #[serde(rename = "_id", default)]
        id: Option<String>,
        #[serde(default)]
        name: Option<String>,
    },
    Id(String),
}

impl Reference {
    /// Display name, only available when the reference was populated.
    pub fn name(&self) -> Option<&str> {
        match self {
            Reference::Populated { name, .. } => name.as_deref().filter(|n| !n.trim().is_empty()),
            Reference::Id(_) => None,
        }
    }
}

/// A single enrollment or video request as returned by the list endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestRecord {
    #[serde(rename = "_id")]
    pub id: String,
    /// `userID` on enrollments, `teacherID` on videos.
    #[serde(rename = "userID", alias = "teacherID", default)]
    pub subject: Option<Reference>,
    #[serde(rename = "courseID", default)]
    pub course: Option<Reference>,
    #[serde(default)]
    pub title: Option<String>,
    pub status: RequestStatus,
    /// `None` when missing or not an RFC 3339 timestamp.
    #[serde(rename = "createdAt", default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

/// One malformed date must not fail the whole list.
fn lenient_timestamp<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(Value::as_str)
        .and_then(|text| DateTime::parse_from_rfc3339(text).ok())
        .map(|parsed| parsed.with_timezone(&Utc)))
}

/// Body of the `PUT .../update/{id}` call.
#[derive(Debug, Clone, Serialize)]
pub struct StatusUpdate {
    pub status: RequestStatus,
}
