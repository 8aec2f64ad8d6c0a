//! Vendor model: photographers, decorators, caterers, and the rest of
//! the wedding-services directory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::STATUS_ACTIVE;

/// A service vendor listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    /// Unique identifier (UUIDv7, store-assigned).
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Vendor category facet (e.g. "Photography", "Catering").
    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub city: Option<String>,

    #[serde(default)]
    pub state: Option<String>,

    #[serde(default)]
    pub country: Option<String>,

    /// Starting price in rupees; 0 means unpriced.
    #[serde(default)]
    pub price_starting_at: u64,

    /// Offered service labels, in display order.
    #[serde(default)]
    pub services: Vec<String>,

    #[serde(default)]
    pub image_url: Option<String>,

    /// Paid placement flag; affects display order only.
    #[serde(default)]
    pub is_premium: bool,

    /// Editorial placement flag; affects display order only.
    #[serde(default)]
    pub is_featured: bool,

    /// "active" is the only publicly browsable status.
    pub status: String,

    pub created: DateTime<Utc>,

    pub updated: DateTime<Utc>,
}

impl Vendor {
    /// Whether this vendor is publicly browsable.
    pub fn is_active(&self) -> bool {
        self.status == STATUS_ACTIVE
    }
}

/// Input for creating a vendor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVendor {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    #[serde(default)]
    pub price_starting_at: u64,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    STATUS_ACTIVE.to_string()
}

/// Input for updating a vendor. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVendor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_starting_at: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_premium: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
