//! Listing filter predicates.
//!
//! All predicates AND together; each one passes when its filter field is
//! unset. Filtering never reorders: output preserves the input's
//! relative order, so repeated applications are stable.

use super::types::{FilterState, ListingItem};

/// Apply the committed filter state to a listing collection.
pub fn apply_filters(items: &[ListingItem], filters: &FilterState) -> Vec<ListingItem> {
    items
        .iter()
        .filter(|item| matches(item, filters))
        .cloned()
        .collect()
}

fn matches(item: &ListingItem, filters: &FilterState) -> bool {
    matches_search(item, filters.search.as_deref())
        && matches_exact(item.city.as_deref(), filters.city.as_deref())
        && matches_exact(item.category.as_deref(), filters.venue_type.as_deref())
        && matches_exact(item.category.as_deref(), filters.category.as_deref())
        && matches_capacity(item.capacity, filters.min_capacity, filters.max_capacity)
}

/// Case-insensitive substring search over a fixed field order:
/// name, description, city, state, country, category, then each
/// amenity/service label.
fn matches_search(item: &ListingItem, query: Option<&str>) -> bool {
    let Some(query) = query else {
        return true;
    };
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }

    let contains = |field: &str| field.to_lowercase().contains(&query);

    contains(&item.name)
        || contains(&item.description)
        || item.city.as_deref().is_some_and(contains)
        || item.state.as_deref().is_some_and(contains)
        || item.country.as_deref().is_some_and(contains)
        || item.category.as_deref().is_some_and(contains)
        || item.amenities_or_services.iter().any(|s| contains(s))
}

/// Exact equality when the filter is set; a blank stored value never
/// matches a non-empty filter.
fn matches_exact(stored: Option<&str>, filter: Option<&str>) -> bool {
    match filter {
        None => true,
        Some(wanted) => stored.is_some_and(|v| v == wanted),
    }
}

/// Inclusive capacity bounds; an absent bound is unbounded on that side.
/// An item without a capacity fails any set bound.
fn matches_capacity(capacity: Option<u32>, min: Option<u32>, max: Option<u32>) -> bool {
    if min.is_none() && max.is_none() {
        return true;
    }
    let Some(capacity) = capacity else {
        return false;
    };

    min.is_none_or(|m| capacity >= m) && max.is_none_or(|m| capacity <= m)
}

#[cfg(test)]
// Tests are allowed to use unwrap/expect freely.
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::listing::testing::item;
    use serde_json::json;

    fn ids(items: &[ListingItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn empty_filter_returns_all_in_order() {
        let items = vec![
            item(json!({"id": "1"})),
            item(json!({"id": "2"})),
            item(json!({"id": "3"})),
        ];

        let out = apply_filters(&items, &FilterState::default());
        assert_eq!(ids(&out), vec!["1", "2", "3"]);
    }

    #[test]
    fn city_filter_is_exact_equality() {
        let items = vec![
            item(json!({"id": "1", "city": "Delhi"})),
            item(json!({"id": "2", "city": "Pune"})),
            item(json!({"id": "3", "city": "Pune"})),
        ];

        let filters = FilterState {
            city: Some("Pune".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&items, &filters)), vec!["2", "3"]);
    }

    #[test]
    fn blank_stored_value_never_matches_set_filter() {
        let items = vec![
            item(json!({"id": "1"})),
            item(json!({"id": "2", "city": "Pune"})),
        ];

        let filters = FilterState {
            city: Some("Pune".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&items, &filters)), vec!["2"]);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let items = vec![
            item(json!({"id": "1", "name": "Rosewood Gardens"})),
            item(json!({"id": "2", "description": "rosewood panelling throughout"})),
            item(json!({"id": "3", "amenitiesOrServices": ["Rosewood stage"]})),
            item(json!({"id": "4", "name": "Lotus Hall"})),
        ];

        let filters = FilterState {
            search: Some("ROSEWOOD".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&items, &filters)), vec!["1", "2", "3"]);
    }

    #[test]
    fn blank_search_matches_everything() {
        let items = vec![item(json!({"id": "1"})), item(json!({"id": "2"}))];

        let filters = FilterState {
            search: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(apply_filters(&items, &filters).len(), 2);
    }

    #[test]
    fn capacity_bounds_are_inclusive() {
        let items = vec![
            item(json!({"id": "1", "capacity": 100})),
            item(json!({"id": "2", "capacity": 200})),
            item(json!({"id": "3", "capacity": 300})),
            item(json!({"id": "4"})),
        ];

        let filters = FilterState {
            min_capacity: Some(100),
            max_capacity: Some(200),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&items, &filters)), vec!["1", "2"]);

        let open_below = FilterState {
            max_capacity: Some(200),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&items, &open_below)), vec!["1", "2"]);
    }

    #[test]
    fn missing_capacity_fails_set_bounds() {
        let items = vec![item(json!({"id": "1"}))];

        let filters = FilterState {
            min_capacity: Some(1),
            ..Default::default()
        };
        assert!(apply_filters(&items, &filters).is_empty());
    }

    #[test]
    fn predicates_and_together() {
        let items = vec![
            item(json!({"id": "1", "city": "Pune", "category": "Lawn", "capacity": 500})),
            item(json!({"id": "2", "city": "Pune", "category": "Hotel", "capacity": 500})),
            item(json!({"id": "3", "city": "Pune", "category": "Lawn", "capacity": 50})),
        ];

        let filters = FilterState {
            city: Some("Pune".to_string()),
            venue_type: Some("Lawn".to_string()),
            min_capacity: Some(100),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&items, &filters)), vec!["1"]);
    }

    #[test]
    fn filtering_preserves_relative_order() {
        let items = vec![
            item(json!({"id": "3", "city": "Pune"})),
            item(json!({"id": "1", "city": "Pune"})),
            item(json!({"id": "2", "city": "Pune"})),
        ];

        let filters = FilterState {
            city: Some("Pune".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&items, &filters)), vec!["3", "1", "2"]);
    }

    #[test]
    fn unconstrained_detection() {
        assert!(FilterState::default().is_unconstrained());
        let set = FilterState {
            search: Some("x".to_string()),
            ..Default::default()
        };
        assert!(!set.is_unconstrained());
    }
}
