//! Admin account model with its append-only action log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role whose records are protected from deletion.
pub const ROLE_SUPERADMIN: &str = "superadmin";

/// An administrator account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    /// Unique identifier (UUIDv7, store-assigned).
    pub id: String,

    pub name: String,

    pub email: String,

    /// "superadmin" or "admin".
    pub role: String,

    /// Append-only action log, insertion-ordered.
    #[serde(default)]
    pub actions: Vec<ActionLogEntry>,

    pub created: DateTime<Utc>,

    pub updated: DateTime<Utc>,
}

impl Admin {
    /// Superadmin accounts cannot be deleted.
    pub fn is_protected(&self) -> bool {
        self.role == ROLE_SUPERADMIN
    }
}

/// One audited admin action. Entries are appended, never rewritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionLogEntry {
    /// What was done (e.g. "approve_vendor").
    pub action: String,

    /// What it was done to (entity id or resource name).
    pub target: String,

    /// When, in UTC (serialized as RFC3339).
    pub timestamp: DateTime<Utc>,
}

/// Input for creating an admin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdmin {
    pub name: String,
    pub email: String,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "admin".to_string()
}

/// Input for updating an admin. The action log is not writable here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAdmin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}
