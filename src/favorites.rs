use std::collections::BTreeSet;

use crate::persistence::{
    load_json_or_default,
    save_json,
};

const FAVORITES_FILE: &str = "favorites.json";

/// Set of favorited botanical names, mirrored to a JSON array on disk after
/// every mutation. The ordered set keeps redundant writes byte-stable.
pub struct FavoritesStore {
    ids: BTreeSet<String>,
    filename: Option<&'static str>,
}

impl FavoritesStore {
    /// Loads the persisted set; absent or malformed data yields an empty set.
    pub fn load() -> Self {
        let ids = load_json_or_default::<Vec<String>>(FAVORITES_FILE);
        Self { ids: ids.into_iter().collect(), filename: Some(FAVORITES_FILE) }
    }

    /// An in-memory store with no backing file, for tests.
    pub fn detached() -> Self {
        Self { ids: BTreeSet::new(), filename: None }
    }

    /// Flips membership for `id` and rewrites the slot. Returns the new
    /// membership state.
    pub fn toggle(&mut self, id: &str) -> bool {
        let favorited = if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        };

        self.persist();
        favorited
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn sorted_ids(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }

    fn persist(&self) {
        let Some(filename) = self.filename else {
            return;
        };

        if let Err(e) = save_json(&self.sorted_ids(), filename) {
            eprintln!("Failed to save favorites: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_membership() {
        let mut favorites = FavoritesStore::detached();

        assert!(favorites.toggle("Ficus elastica"));
        assert!(favorites.contains("Ficus elastica"));
        assert_eq!(favorites.len(), 1);

        assert!(!favorites.toggle("Ficus elastica"));
        assert!(!favorites.contains("Ficus elastica"));
        assert!(favorites.is_empty());
    }

    #[test]
    fn double_toggle_restores_serialized_value() {
        let mut favorites = FavoritesStore::detached();
        favorites.toggle("Musa acuminata");
        favorites.toggle("Ficus elastica");

        let before = serde_json::to_string(&favorites.sorted_ids()).unwrap();
        favorites.toggle("Colocasia esculenta");
        favorites.toggle("Colocasia esculenta");
        let after = serde_json::to_string(&favorites.sorted_ids()).unwrap();

        assert_eq!(before, after);
    }

    #[test]
    fn ids_come_back_sorted() {
        let mut favorites = FavoritesStore::detached();
        favorites.toggle("Musa acuminata");
        favorites.toggle("Colocasia esculenta");
        favorites.toggle("Ficus elastica");

        assert_eq!(
            favorites.sorted_ids(),
            vec!["Colocasia esculenta", "Ficus elastica", "Musa acuminata"]
        );
    }
}
