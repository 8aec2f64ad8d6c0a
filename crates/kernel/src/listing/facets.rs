//! Facet derivation.
//!
//! Facet options come from the full active collection so they never
//! shrink as filters are applied; only the match count downstream is
//! filter-sensitive.

use std::collections::BTreeSet;

use super::types::{Facet, FacetOptions, ListingItem, PriceBucket};

/// Derive facet options from the active listing collection.
pub fn derive_facets(items: &[ListingItem]) -> FacetOptions {
    FacetOptions {
        cities: string_values(items, Facet::City),
        categories: string_values(items, Facet::Category),
        service_areas: string_values(items, Facet::ServiceArea),
        price_ranges: price_buckets(items),
    }
}

/// Distinct non-blank values for a string-valued facet.
///
/// Set semantics; the sorted output is for stable rendering only.
fn string_values(items: &[ListingItem], facet: Facet) -> Vec<String> {
    let mut values = BTreeSet::new();

    for item in items {
        let value = match facet {
            Facet::City => item.city.as_deref(),
            // Banquets carry their venue type in the category slot, so
            // both dimensions read the same field.
            Facet::VenueType | Facet::Category => item.category.as_deref(),
            Facet::ServiceArea => item.state.as_deref(),
            Facet::PriceRange => None,
        };

        if let Some(v) = value {
            if !v.trim().is_empty() {
                values.insert(v.to_string());
            }
        }
    }

    values.into_iter().collect()
}

/// Derive the three price buckets from priced items.
///
/// Unpriced items (`price_starting_at == 0`) are excluded; if nothing is
/// priced, no ranges are offered.
fn price_buckets(items: &[ListingItem]) -> Vec<PriceBucket> {
    let prices: Vec<u64> = items
        .iter()
        .map(|i| i.price_starting_at)
        .filter(|&p| p > 0)
        .collect();

    let Some(&min) = prices.iter().min() else {
        return Vec::new();
    };
    // min exists, so max does too.
    let max = prices.iter().max().copied().unwrap_or(min);

    let mid = (min + max) / 2;

    vec![
        PriceBucket {
            label: format!("₹{min}-₹{mid}"),
            min,
            max: Some(mid),
        },
        PriceBucket {
            label: format!("₹{}-₹{max}", mid + 1),
            min: mid + 1,
            max: Some(max),
        },
        PriceBucket {
            label: format!("> ₹{max}"),
            min: max,
            max: None,
        },
    ]
}
