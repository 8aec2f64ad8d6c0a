//! Listing engine types.

use serde::{Deserialize, Serialize};

use crate::models::{Banquet, Vendor};

/// A browsable listing, generalizing banquet venues and vendors.
///
/// Items reaching the engine are already status-gated upstream: an
/// inactive listing never appears in the collection handed to
/// [`super::derive_facets`] or [`super::apply_filters`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Facet source: venue type for banquets, vendor category otherwise.
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
    #[serde(default)]
    pub capacity: Option<u32>,
    /// Amenities (banquets) or offered services (vendors), display order.
    #[serde(default)]
    pub amenities_or_services: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub is_featured: bool,
}

impl From<Banquet> for ListingItem {
    fn from(b: Banquet) -> Self {
        Self {
            id: b.id,
            name: b.name,
            description: b.description,
            category: b.venue_type,
            city: b.city,
            state: b.state,
            country: b.country,
            price_starting_at: b.price_starting_at,
            capacity: b.capacity,
            amenities_or_services: b.amenities,
            image_url: b.image_url,
            is_premium: b.is_premium,
            is_featured: b.is_featured,
        }
    }
}

impl From<Vendor> for ListingItem {
    fn from(v: Vendor) -> Self {
        Self {
            id: v.id,
            name: v.name,
            description: v.description,
            category: v.category,
            city: v.city,
            state: v.state,
            country: v.country,
            price_starting_at: v.price_starting_at,
            capacity: None,
            amenities_or_services: v.services,
            image_url: v.image_url,
            is_premium: v.is_premium,
            is_featured: v.is_featured,
        }
    }
}

/// Committed filter selections for a listing page.
///
/// Absent fields mean "no constraint". Unknown keys are rejected at the
/// query boundary rather than silently accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FilterState {
    pub city: Option<String>,
    pub venue_type: Option<String>,
    pub category: Option<String>,
    pub min_capacity: Option<u32>,
    pub max_capacity: Option<u32>,
    pub search: Option<String>,
}

impl FilterState {
    /// True when no predicate constrains the result.
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }
}

/// A filterable dimension. Adding a variant forces every derivation
/// site to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    City,
    VenueType,
    Category,
    ServiceArea,
    PriceRange,
}

/// One price bucket offered by the price facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBucket {
    /// Display label, e.g. `"₹5000-₹10000"` or `"> ₹15000"`.
    pub label: String,
    pub min: u64,
    /// None for the open-ended top bucket.
    pub max: Option<u64>,
}

/// Derived facet values for a listing collection.
///
/// Always computed from the full active collection, never the filtered
/// subset, so options stay stable while the user narrows results.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetOptions {
    pub cities: Vec<String>,
    /// Venue types for banquets, vendor categories for vendors.
    pub categories: Vec<String>,
    pub service_areas: Vec<String>,
    pub price_ranges: Vec<PriceBucket>,
}
