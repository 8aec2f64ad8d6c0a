//! Banquet venue model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::STATUS_ACTIVE;

/// A banquet venue listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banquet {
    /// Unique identifier (UUIDv7, store-assigned).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Marketing description.
    #[serde(default)]
    pub description: String,

    /// Venue type facet (e.g. "Lawn", "Hotel").
    #[serde(default)]
    pub venue_type: Option<String>,

    #[serde(default)]
    pub city: Option<String>,

    #[serde(default)]
    pub state: Option<String>,

    #[serde(default)]
    pub country: Option<String>,

    /// Starting price in rupees; 0 means unpriced.
    #[serde(default)]
    pub price_starting_at: u64,

    /// Seated guest capacity.
    #[serde(default)]
    pub capacity: Option<u32>,

    /// Amenity labels, in display order.
    #[serde(default)]
    pub amenities: Vec<String>,

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

    /// Store-assigned creation timestamp.
    pub created: DateTime<Utc>,

    /// Store-assigned last-write timestamp.
    pub updated: DateTime<Utc>,
}

impl Banquet {
    /// Whether this venue is publicly browsable.
    pub fn is_active(&self) -> bool {
        self.status == STATUS_ACTIVE
    }
}

/// Input for creating a banquet venue.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBanquet {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub venue_type: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    #[serde(default)]
    pub price_starting_at: u64,
    pub capacity: Option<u32>,
    #[serde(default)]
    pub amenities: Vec<String>,
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

/// Input for updating a banquet venue. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBanquet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_starting_at: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_premium: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
