//! Enquiry (lead) model: messages submitted from listing detail pages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A lead captured from a listing enquiry form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enquiry {
    /// Unique identifier (UUIDv7, store-assigned).
    pub id: String,

    /// The listing this enquiry is about.
    pub listing_id: String,

    /// "banquet" or "vendor".
    pub listing_kind: String,

    pub name: String,

    pub email: String,

    #[serde(default)]
    pub phone: Option<String>,

    /// Planned event date, as supplied by the visitor.
    #[serde(default)]
    pub event_date: Option<String>,

    #[serde(default)]
    pub message: Option<String>,

    pub created: DateTime<Utc>,

    pub updated: DateTime<Utc>,
}

/// Input for submitting an enquiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnquiry {
    pub listing_id: String,
    pub listing_kind: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub event_date: Option<String>,
    pub message: Option<String>,
}
