//! Component catalog listing helpers.
//!
//! Category filtering happens in the store query; free-text search is a
//! post-filter over the fetched page, so both the store-backed listing and
//! the static fallback catalog share [`matches_search`].

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Default number of components returned by a list call.
pub const DEFAULT_LIST_LIMIT: usize = 100;

/// Upper bound on the caller-supplied `limit`.
pub const MAX_LIST_LIMIT: usize = 1000;

/// Clamp a caller-supplied limit into `1..=MAX_LIST_LIMIT`, defaulting to
/// [`DEFAULT_LIST_LIMIT`] when absent.
pub fn clamp_limit(limit: Option<usize>) -> usize {
    limit
        .unwrap_or(DEFAULT_LIST_LIMIT)
        .clamp(1, MAX_LIST_LIMIT)
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

/// Normalize a category filter.
///
/// Blank values and the pseudo-category `all` (any case) mean "no filter".
/// Anything else is returned untouched: category matching is exact and
/// case-sensitive.
pub fn category_filter(category: Option<&str>) -> Option<&str> {
    match category {
        Some(c) if !c.trim().is_empty() && !c.eq_ignore_ascii_case("all") => Some(c),
        _ => None,
    }
}

/// Lowercase a search term, dropping empty input.
pub fn search_term(search: Option<&str>) -> Option<String> {
    search.filter(|s| !s.is_empty()).map(str::to_lowercase)
}

/// Case-insensitive substring match over name, description and category.
///
/// `term` must already be lowercased (see [`search_term`]).
pub fn matches_search(term: &str, name: &str, description: &str, category: &str) -> bool {
    [name, description, category]
        .iter()
        .any(|field| field.to_lowercase().contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_defaults_and_clamps() {
        assert_eq!(clamp_limit(None), DEFAULT_LIST_LIMIT);
        assert_eq!(clamp_limit(Some(0)), 1);
        assert_eq!(clamp_limit(Some(5)), 5);
        assert_eq!(clamp_limit(Some(1_000_000)), MAX_LIST_LIMIT);
    }

    #[test]
    fn all_category_means_no_filter() {
        assert_eq!(category_filter(Some("All")), None);
        assert_eq!(category_filter(Some("all")), None);
        assert_eq!(category_filter(Some("  ")), None);
        assert_eq!(category_filter(None), None);
        assert_eq!(category_filter(Some("Sensors")), Some("Sensors"));
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let term = search_term(Some("TEMPERATURE")).unwrap();
        assert!(matches_search(&term, "DHT22", "Measures Temperature", "Sensors"));
        assert!(!matches_search(&term, "ESP32", "Wi-Fi board", "Microcontrollers"));

        let term = search_term(Some("sensor")).unwrap();
        assert!(matches_search(&term, "HC-SR04", "distance", "Sensors"));
    }

    #[test]
    fn empty_search_is_ignored() {
        assert_eq!(search_term(Some("")), None);
        assert_eq!(search_term(None), None);
    }
}
