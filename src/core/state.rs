use crate::core::models::{
    FilterAttribute,
    FilterState,
};

/// Single owner of the browse inputs: free-text search, per-attribute
/// selections, and the favorites-only flag. The GUI mutates it through the
/// setters and the sync controller reads it when building a fetch.
pub struct BrowseState {
    search_query: String,
    filters: FilterState,
    show_favorites_only: bool,
    clear_filters_on_favorites_toggle: bool,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self::new(false)
    }
}

impl BrowseState {
    /// `clear_filters_on_favorites_toggle` selects between the two observed
    /// behaviors of entering the favorites-only view: `false` preserves the
    /// active search/filters, `true` resets them.
    pub fn new(clear_filters_on_favorites_toggle: bool) -> Self {
        Self {
            search_query: String::new(),
            filters: FilterState::default(),
            show_favorites_only: false,
            clear_filters_on_favorites_toggle,
        }
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Exposed for the search box widget; changes flow through the same
    /// field `set_search_query` writes.
    pub fn search_query_mut(&mut self) -> &mut String {
        &mut self.search_query
    }

    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.search_query = text.into();
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn set_filter_values(&mut self, attr: FilterAttribute, values: Vec<String>) {
        self.filters.set_selected(attr, values);
    }

    /// Resets search text and every selection. The favorites-only flag is
    /// deliberately left alone.
    pub fn clear_all(&mut self) {
        self.search_query.clear();
        self.filters.clear();
    }

    pub fn show_favorites_only(&self) -> bool {
        self.show_favorites_only
    }

    pub fn toggle_favorites_only(&mut self) {
        self.show_favorites_only = !self.show_favorites_only;
        if self.show_favorites_only && self.clear_filters_on_favorites_toggle {
            self.clear_all();
        }
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search_query.is_empty() || !self.filters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_filter_values_touches_only_that_attribute() {
        let mut state = BrowseState::default();
        state.set_search_query("palm");
        state.set_filter_values(FilterAttribute::Zone, vec!["Tropical".to_string()]);

        let before_search = state.search_query().to_string();
        let before: Vec<Vec<String>> = FilterAttribute::ALL
            .iter()
            .map(|attr| state.filters().selected(*attr).to_vec())
            .collect();

        state.set_filter_values(FilterAttribute::Strata, vec!["Canopy".to_string()]);

        assert_eq!(state.search_query(), before_search);
        for (i, attr) in FilterAttribute::ALL.iter().enumerate() {
            if *attr == FilterAttribute::Strata {
                assert_eq!(state.filters().selected(*attr), ["Canopy".to_string()]);
            } else {
                assert_eq!(state.filters().selected(*attr), before[i].as_slice());
            }
        }
    }

    #[test]
    fn clear_all_always_deactivates_filters() {
        let mut state = BrowseState::default();
        state.set_search_query("banana");
        state.set_filter_values(FilterAttribute::Lifecycle, vec!["Perennial".to_string()]);
        state.toggle_favorites_only();

        state.clear_all();

        assert!(!state.has_active_filters());
        assert!(state.show_favorites_only(), "clear_all must not touch the favorites flag");
    }

    #[test]
    fn favorites_toggle_preserves_filters_by_default() {
        let mut state = BrowseState::default();
        state.set_search_query("fern");
        state.set_filter_values(FilterAttribute::Origin, vec!["Asia".to_string()]);

        state.toggle_favorites_only();

        assert!(state.show_favorites_only());
        assert_eq!(state.search_query(), "fern");
        assert_eq!(state.filters().selected(FilterAttribute::Origin), ["Asia".to_string()]);
    }

    #[test]
    fn favorites_toggle_can_clear_filters_on_entry() {
        let mut state = BrowseState::new(true);
        state.set_search_query("fern");
        state.set_filter_values(FilterAttribute::Origin, vec!["Asia".to_string()]);

        state.toggle_favorites_only();
        assert!(state.show_favorites_only());
        assert!(!state.has_active_filters());

        // Leaving the favorites view never clears.
        state.set_search_query("palm");
        state.toggle_favorites_only();
        assert_eq!(state.search_query(), "palm");
    }

    #[test]
    fn empty_search_is_not_an_active_filter() {
        let mut state = BrowseState::default();
        assert!(!state.has_active_filters());
        state.set_search_query("");
        assert!(!state.has_active_filters());
        state.set_search_query("a");
        assert!(state.has_active_filters());
    }
}
