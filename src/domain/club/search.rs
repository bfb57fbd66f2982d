//! Search and sort parameters for the public club directory.

use serde::{Deserialize, Serialize};

/// Sort order for club directory results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClubSort {
    /// Most recently created first. This is the default.
    #[default]
    Newest,
    /// Oldest first.
    Oldest,
    /// Most expensive membership first.
    HighestFee,
    /// Cheapest membership first.
    LowestFee,
}

impl ClubSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClubSort::Newest => "newest",
            ClubSort::Oldest => "oldest",
            ClubSort::HighestFee => "highest_fee",
            ClubSort::LowestFee => "lowest_fee",
        }
    }
}

/// Filters applied when searching approved clubs.
///
/// All fields are optional. An empty query returns the full approved
/// directory in the requested sort order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClubSearch {
    /// Case-insensitive substring match on the club name.
    pub search: Option<String>,
    /// Case-insensitive exact match on category.
    pub category: Option<String>,
    /// Result ordering. Defaults to newest first.
    #[serde(default)]
    pub sort: ClubSort,
}

impl ClubSearch {
    /// Normalized search term, or None when blank.
    pub fn term(&self) -> Option<&str> {
        self.search.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Normalized category filter, or None when blank.
    pub fn category_filter(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_defaults_to_newest() {
        assert_eq!(ClubSort::default(), ClubSort::Newest);
    }

    #[test]
    fn sort_deserializes_from_snake_case() {
        let sort: ClubSort = serde_json::from_str("\"highest_fee\"").unwrap();
        assert_eq!(sort, ClubSort::HighestFee);
    }

    #[test]
    fn blank_search_term_is_none() {
        let search = ClubSearch {
            search: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(search.term(), None);
    }

    #[test]
    fn search_term_is_trimmed() {
        let search = ClubSearch {
            search: Some("  chess  ".to_string()),
            ..Default::default()
        };
        assert_eq!(search.term(), Some("chess"));
    }

    #[test]
    fn blank_category_is_none() {
        let search = ClubSearch {
            category: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(search.category_filter(), None);
    }

    #[test]
    fn category_filter_is_trimmed() {
        let search = ClubSearch {
            category: Some(" Sports ".to_string()),
            ..Default::default()
        };
        assert_eq!(search.category_filter(), Some("Sports"));
    }

    #[test]
    fn empty_query_has_no_filters() {
        let search = ClubSearch::default();
        assert_eq!(search.term(), None);
        assert_eq!(search.category_filter(), None);
        assert_eq!(search.sort, ClubSort::Newest);
    }
}
