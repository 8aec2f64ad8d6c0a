//! Vendor approval requests.
//!
//! State machine: `pending -> {approved, rejected}`. Both outcomes are
//! terminal; re-processing a terminal request is a Conflict.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Approval request lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    /// Whether no further transition is defined from this state.
    pub fn is_terminal(self) -> bool {
        matches!(self, ApprovalStatus::Approved | ApprovalStatus::Rejected)
    }
}

/// A request from a prospective vendor to join the marketplace.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalRequest {
    /// Unique identifier (UUIDv7, store-assigned).
    pub id: String,

    pub vendor_name: String,

    pub email: String,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub message: Option<String>,

    pub status: ApprovalStatus,

    /// Reviewer notes recorded at processing time.
    #[serde(default)]
    pub notes: Option<String>,

    /// Set exactly once, when the request leaves `pending`.
    #[serde(default)]
    pub processed_at: Option<DateTime<Utc>>,

    pub created: DateTime<Utc>,

    pub updated: DateTime<Utc>,
}

/// Input for submitting an approval request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApprovalRequest {
    pub vendor_name: String,
    pub email: String,
    pub category: Option<String>,
    pub message: Option<String>,
}
