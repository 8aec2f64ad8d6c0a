//! Listing query engine.
//!
//! Shared by the banquet and vendor directories:
//! - Facet derivation from the full active collection
//! - Multi-predicate AND filtering
//! - Promoted-item display ordering
//!
//! All functions are pure and synchronous; collections are page-sized,
//! so every pass is a plain linear scan.

mod facets;
mod filter;
mod ordering;
mod types;

pub use facets::derive_facets;
pub use filter::apply_filters;
pub use ordering::order_for_display;
pub use types::{Facet, FacetOptions, FilterState, ListingItem, PriceBucket};
