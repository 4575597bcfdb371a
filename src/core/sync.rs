use std::time::{
    Duration,
    Instant,
};

use crate::{
    core::{
        models::PlantQuery,
        state::BrowseState,
    },
    favorites::FavoritesStore,
};

pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

/// Trailing-edge debounce for the plants fetch. Every state change pushes
/// the deadline out by the full delay; only a quiet window fires.
#[derive(Debug, Default)]
pub struct Debouncer {
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + DEBOUNCE_DELAY);
    }

    /// Returns true exactly once per elapsed deadline.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|deadline| deadline.saturating_duration_since(now))
    }
}

/// Monotonic tag for in-flight fetches. A response is applied only when its
/// sequence number is still the latest issued, so a slow stale fetch can
/// never overwrite fresher data.
#[derive(Debug, Default)]
pub struct FetchSequence {
    issued: u64,
}

impl FetchSequence {
    pub fn next(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.issued
    }

    /// Retires any outstanding fetch without issuing a new one.
    pub fn invalidate(&mut self) {
        self.issued += 1;
    }
}

/// What a fired debounce cycle should do.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchPlan {
    /// Issue the query to the catalog.
    Fetch(PlantQuery),
    /// Favorites-only with nothing favorited: skip the network entirely and
    /// display the empty list. Must be indistinguishable from a zero-match
    /// response.
    ShowEmpty,
}

pub fn plan_fetch(state: &BrowseState, favorites: &FavoritesStore) -> FetchPlan {
    if state.show_favorites_only() && favorites.is_empty() {
        return FetchPlan::ShowEmpty;
    }

    let ids = if state.show_favorites_only() { Some(favorites.sorted_ids()) } else { None };

    FetchPlan::Fetch(PlantQuery {
        search: state.search_query().to_string(),
        filters: state.filters().clone(),
        ids,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::FilterAttribute;

    #[test]
    fn debounce_fires_once_on_trailing_edge() {
        let start = Instant::now();
        let mut debouncer = Debouncer::default();

        // A burst of changes inside the window keeps pushing the deadline.
        debouncer.schedule(start);
        debouncer.schedule(start + Duration::from_millis(100));
        debouncer.schedule(start + Duration::from_millis(200));

        assert!(!debouncer.fire(start + Duration::from_millis(450)));
        assert!(debouncer.fire(start + Duration::from_millis(500)));
        assert!(!debouncer.fire(start + Duration::from_millis(600)), "fires at most once");
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn debounce_remaining_counts_down() {
        let start = Instant::now();
        let mut debouncer = Debouncer::default();
        assert_eq!(debouncer.remaining(start), None);

        debouncer.schedule(start);
        assert_eq!(debouncer.remaining(start), Some(DEBOUNCE_DELAY));
        assert_eq!(
            debouncer.remaining(start + Duration::from_millis(250)),
            Some(Duration::from_millis(50))
        );
    }

    #[test]
    fn stale_sequence_numbers_are_rejected() {
        let mut sequence = FetchSequence::default();
        let first = sequence.next();
        let second = sequence.next();

        // Query A resolves after query B was issued: A must be discarded.
        assert!(!sequence.is_current(first));
        assert!(sequence.is_current(second));

        sequence.invalidate();
        assert!(!sequence.is_current(second));
    }

    #[test]
    fn favorites_only_with_empty_store_skips_network() {
        let mut state = BrowseState::default();
        state.toggle_favorites_only();
        let favorites = FavoritesStore::detached();

        assert_eq!(plan_fetch(&state, &favorites), FetchPlan::ShowEmpty);
    }

    #[test]
    fn favorites_only_sends_ids_alongside_active_filters() {
        let mut state = BrowseState::default();
        state.set_filter_values(FilterAttribute::Zone, vec!["Tropical".to_string()]);
        state.toggle_favorites_only();

        let mut favorites = FavoritesStore::detached();
        favorites.toggle("Ficus elastica");

        let plan = plan_fetch(&state, &favorites);
        let FetchPlan::Fetch(query) = plan else {
            panic!("expected a fetch plan");
        };
        assert_eq!(query.ids, Some(vec!["Ficus elastica".to_string()]));
        assert_eq!(query.filters.selected(FilterAttribute::Zone), ["Tropical".to_string()]);
    }

    #[test]
    fn normal_view_sends_no_ids() {
        let mut state = BrowseState::default();
        state.set_search_query("fig");

        let mut favorites = FavoritesStore::detached();
        favorites.toggle("Ficus elastica");

        let FetchPlan::Fetch(query) = plan_fetch(&state, &favorites) else {
            panic!("expected a fetch plan");
        };
        assert_eq!(query.ids, None);
        assert_eq!(query.search, "fig");
    }
}
