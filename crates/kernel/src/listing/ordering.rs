//! Promoted-item display ordering.
//!
//! Business rule, implemented literally: featured listings lead, the
//! first six non-promoted listings follow, then premium placements, then
//! the remaining non-promoted listings. Promotion never relaxes filter
//! matching; it only affects placement.

use super::types::ListingItem;

/// Non-promoted listings surfaced ahead of premium placements.
const LEADING_NORMAL: usize = 6;

/// Order filtered results for display.
///
/// Output is a permutation of the input; each partition keeps its
/// relative order from the input.
pub fn order_for_display(filtered: Vec<ListingItem>) -> Vec<ListingItem> {
    let mut featured = Vec::new();
    let mut premium = Vec::new();
    let mut normal = Vec::new();

    for item in filtered {
        if item.is_featured {
            featured.push(item);
        } else if item.is_premium {
            premium.push(item);
        } else {
            normal.push(item);
        }
    }

    let trailing_normal = normal.split_off(normal.len().min(LEADING_NORMAL));

    let mut ordered = featured;
    ordered.extend(normal);
    ordered.extend(premium);
    ordered.extend(trailing_normal);
    ordered
}
