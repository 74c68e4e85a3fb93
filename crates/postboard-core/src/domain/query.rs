//! Listing criteria shared by every repository implementation.

/// Ordering of post listings by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Interpret the `sortOrder` query parameter.
    ///
    /// `desc` and `z-a` (any case) select descending order; anything else,
    /// including no value at all, is ascending.
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("desc" | "z-a") => Self::Descending,
            _ => Self::Ascending,
        }
    }
}

/// Search and sort criteria for listing posts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    /// Case-insensitive substring of the name; `None` matches everything.
    pub search: Option<String>,
    pub sort: SortOrder,
}

impl PostFilter {
    /// Build a filter from raw query parameters. A blank search term means no filter.
    pub fn from_params(search: Option<&str>, sort_order: Option<&str>) -> Self {
        Self {
            search: search
                .filter(|term| !term.trim().is_empty())
                .map(str::to_string),
            sort: SortOrder::from_param(sort_order),
        }
    }

    /// Whether a post name passes the search term.
    pub fn matches(&self, name: &str) -> bool {
        match &self.search {
            Some(term) => name.to_lowercase().contains(&term.to_lowercase()),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_aliases() {
        assert_eq!(SortOrder::from_param(Some("DESC")), SortOrder::Descending);
        assert_eq!(SortOrder::from_param(Some("Z-A")), SortOrder::Descending);
        assert_eq!(SortOrder::from_param(Some("a-z")), SortOrder::Ascending);
        assert_eq!(SortOrder::from_param(Some("sideways")), SortOrder::Ascending);
        assert_eq!(SortOrder::from_param(None), SortOrder::Ascending);
    }

    #[test]
    fn test_blank_search_is_dropped() {
        let filter = PostFilter::from_params(Some("   "), None);
        assert!(filter.search.is_none());
        assert!(filter.matches("anything"));
    }

    #[test]
    fn test_search_ignores_case() {
        let filter = PostFilter::from_params(Some("FoO"), Some("asc"));
        assert!(filter.matches("a food post"));
        assert!(!filter.matches("bar"));
    }
}
