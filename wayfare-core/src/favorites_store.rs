//! Favorite books, persisted after every change.

use chrono::{Local, NaiveDate};
use uuid::Uuid;

use crate::display::format_added_date;
use crate::error::{WayfareError, WayfareResult};
use crate::favorite::{CategoryFilter, Favorite, NewFavorite, Rating};
use crate::migrate::migrate_favorites;
use crate::storage::{FAVORITES_KEY, KeyValueStore, decode_value, load_value, save_json};

pub struct FavoritesStore<S: KeyValueStore> {
    storage: S,
    favorites: Vec<Favorite>,
    persist_warning: Option<WayfareError>,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Load favorites from `storage`, assigning ids to records saved
    /// before favorites had them. Unreadable data loads as an empty list
    /// and is not written back.
    pub fn load(storage: S) -> Self {
        let mut value = load_value(&storage, FAVORITES_KEY);
        let migrated = value.as_mut().is_some_and(migrate_favorites);
        let favorites: Option<Vec<Favorite>> = decode_value(FAVORITES_KEY, value);
        let migrated = migrated && favorites.is_some();
        let favorites = favorites.unwrap_or_default();

        tracing::debug!("Loaded {} favorites", favorites.len());

        let mut store = FavoritesStore {
            storage,
            favorites,
            persist_warning: None,
        };

        if migrated {
            store.persist();
        }

        store
    }

    /// All favorites in insertion order.
    pub fn favorites(&self) -> &[Favorite] {
        &self.favorites
    }

    pub fn favorite(&self, id: Uuid) -> Option<&Favorite> {
        self.favorites.iter().find(|f| f.id == id)
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn take_persist_warning(&mut self) -> Option<WayfareError> {
        self.persist_warning.take()
    }

    /// Add a favorite dated today.
    pub fn add_favorite(&mut self, new: NewFavorite) -> WayfareResult<Favorite> {
        self.add_favorite_on(new, Local::now().date_naive())
    }

    pub fn add_favorite_on(&mut self, new: NewFavorite, date: NaiveDate) -> WayfareResult<Favorite> {
        let name = new.name.trim().to_string();
        if name.is_empty() {
            return Err(WayfareError::Validation("Please enter a book name".into()));
        }
        let rating = Rating::new(new.rating)?;

        let favorite = Favorite {
            id: Uuid::new_v4(),
            name,
            category: new.category,
            rating,
            notes: new.notes.trim().to_string(),
            date_added: format_added_date(date),
        };

        self.favorites.push(favorite.clone());
        tracing::debug!("Total favorites: {}", self.favorites.len());
        self.persist();
        Ok(favorite)
    }

    /// Unknown ids are ignored.
    pub fn delete_favorite(&mut self, id: Uuid) {
        self.favorites.retain(|f| f.id != id);
        tracing::debug!("Favorite deleted. Total remaining: {}", self.favorites.len());
        self.persist();
    }

    /// Delete by position in the unfiltered [`favorites`](Self::favorites)
    /// listing. Out-of-range indexes are ignored.
    pub fn delete_at(&mut self, index: usize) {
        if index < self.favorites.len() {
            self.favorites.remove(index);
            self.persist();
        }
    }

    /// Favorites whose category passes `category` and whose name or notes
    /// contain `term`, ignoring case. Insertion order is kept.
    pub fn search(&self, term: &str, category: CategoryFilter) -> Vec<&Favorite> {
        let term = term.to_lowercase();
        self.favorites
            .iter()
            .filter(|f| category.accepts(f.category) && f.matches_term(&term))
            .collect()
    }

    /// Empty the list and erase it from storage. Callers confirm first.
    pub fn clear_all(&mut self) {
        self.favorites.clear();
        tracing::debug!("All favorites cleared");

        if let Err(e) = self.storage.remove(FAVORITES_KEY) {
            tracing::warn!("Error clearing favorites: {e}");
            self.persist_warning = Some(e);
        }
    }

    fn persist(&mut self) {
        if let Err(e) = save_json(&mut self.storage, FAVORITES_KEY, &self.favorites) {
            tracing::warn!("Error saving favorites: {e}");
            self.persist_warning = Some(e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorite::FavoriteCategory;
    use crate::storage::MemoryStore;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn store_with(entries: &[(&str, FavoriteCategory, &str)]) -> FavoritesStore<MemoryStore> {
        let mut store = FavoritesStore::load(MemoryStore::new());
        for (name, category, notes) in entries {
            store
                .add_favorite_on(NewFavorite::new(*name, *category, 4).with_notes(*notes), day())
                .unwrap();
        }
        store
    }

    fn names(favorites: &[&Favorite]) -> Vec<String> {
        favorites.iter().map(|f| f.name.clone()).collect()
    }

    #[test]
    fn test_add_favorite() {
        let mut store = store_with(&[]);
        let favorite = store
            .add_favorite_on(NewFavorite::new(" Dune ", FavoriteCategory::SciFi, 5), day())
            .unwrap();

        assert_eq!(favorite.name, "Dune");
        assert_eq!(favorite.date_added, "10/16/2026");
        assert_eq!(store.len(), 1);
        assert!(store.storage().get(FAVORITES_KEY).unwrap().is_some());
    }

    #[test]
    fn test_add_favorite_with_empty_name_fails() {
        let mut store = store_with(&[("Dune", FavoriteCategory::SciFi, "")]);
        let err = store
            .add_favorite(NewFavorite::new("", FavoriteCategory::Fiction, 3))
            .unwrap_err();
        assert!(matches!(err, WayfareError::Validation(_)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_favorite_rejects_bad_rating() {
        let mut store = store_with(&[]);
        assert!(
            store
                .add_favorite(NewFavorite::new("Dune", FavoriteCategory::SciFi, 0))
                .is_err()
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_at_last_of_three_keeps_order() {
        let mut store = store_with(&[
            ("Emma", FavoriteCategory::Fiction, ""),
            ("Dune", FavoriteCategory::SciFi, ""),
            ("Rebecca", FavoriteCategory::Mystery, ""),
        ]);

        store.delete_at(2);
        let remaining: Vec<&str> = store.favorites().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(remaining, vec!["Emma", "Dune"]);

        store.delete_at(10);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_delete_favorite_by_id_from_filtered_view() {
        let mut store = store_with(&[
            ("Emma", FavoriteCategory::Fiction, ""),
            ("Dune", FavoriteCategory::SciFi, ""),
            ("Hyperion", FavoriteCategory::SciFi, ""),
        ]);

        let filtered = store.search("", CategoryFilter::Only(FavoriteCategory::SciFi));
        let hyperion = filtered[1].id;

        store.delete_favorite(hyperion);
        let remaining: Vec<&str> = store.favorites().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(remaining, vec!["Emma", "Dune"]);

        store.delete_favorite(Uuid::new_v4());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_search_empty_term_returns_all_in_order() {
        let store = store_with(&[
            ("Emma", FavoriteCategory::Fiction, ""),
            ("Dune", FavoriteCategory::SciFi, ""),
            ("Rebecca", FavoriteCategory::Mystery, ""),
        ]);

        let all = store.search("", CategoryFilter::All);
        assert_eq!(names(&all), vec!["Emma", "Dune", "Rebecca"]);
    }

    #[test]
    fn test_search_is_case_insensitive_on_name_and_notes() {
        let store = store_with(&[
            ("Emma", FavoriteCategory::Fiction, "Austen at her best"),
            ("Dune", FavoriteCategory::SciFi, "spice and SAND"),
            ("Persuasion", FavoriteCategory::Fiction, "also AUSTEN"),
        ]);

        assert_eq!(names(&store.search("DUNE", CategoryFilter::All)), vec!["Dune"]);
        assert_eq!(names(&store.search("sand", CategoryFilter::All)), vec!["Dune"]);
        assert_eq!(
            names(&store.search("austen", CategoryFilter::All)),
            vec!["Emma", "Persuasion"]
        );
        assert!(store.search("tolkien", CategoryFilter::All).is_empty());
    }

    #[test]
    fn test_search_combines_term_and_category() {
        let store = store_with(&[
            ("Emma", FavoriteCategory::Fiction, "Austen"),
            ("Jane Austen: A Life", FavoriteCategory::Biography, ""),
        ]);

        let only_bios = store.search("austen", CategoryFilter::Only(FavoriteCategory::Biography));
        assert_eq!(names(&only_bios), vec!["Jane Austen: A Life"]);
        assert!(store.search("", CategoryFilter::Only(FavoriteCategory::Fantasy)).is_empty());
    }

    #[test]
    fn test_clear_all_erases_storage() {
        let mut store = store_with(&[("Emma", FavoriteCategory::Fiction, "")]);
        store.clear_all();
        assert!(store.is_empty());
        assert_eq!(store.storage().get(FAVORITES_KEY).unwrap(), None);
    }

    #[test]
    fn test_reload_roundtrip() {
        let store = store_with(&[
            ("Emma", FavoriteCategory::Fiction, "Austen"),
            ("Dune", FavoriteCategory::SciFi, ""),
        ]);
        let before = store.favorites().to_vec();

        let reloaded = FavoritesStore::load(store.storage().clone());
        assert_eq!(reloaded.favorites(), before.as_slice());
    }

    #[test]
    fn test_legacy_favorites_get_stable_ids() {
        let mut storage = MemoryStore::new();
        storage
            .set(
                FAVORITES_KEY,
                r#"[{"name":"Emma","category":"fiction","rating":4,"notes":"","dateAdded":"1/5/2026"}]"#,
            )
            .unwrap();

        let first = FavoritesStore::load(storage);
        let id = first.favorites()[0].id;
        let saved = first.storage().get(FAVORITES_KEY).unwrap();

        let second = FavoritesStore::load(first.storage().clone());
        assert_eq!(second.favorites()[0].id, id);
        assert_eq!(second.storage().get(FAVORITES_KEY).unwrap(), saved);
    }

    #[test]
    fn test_malformed_storage_loads_empty() {
        let mut storage = MemoryStore::new();
        storage.set(FAVORITES_KEY, "not json at all").unwrap();
        assert!(FavoritesStore::load(storage).is_empty());
    }

    #[test]
    fn test_unreadable_legacy_favorites_stay_in_storage() {
        let saved = r#"[{"name":"Emma","category":"fiction","rating":4},{"name":["Dune"],"category":"sci-fi","rating":5}]"#;
        let mut storage = MemoryStore::new();
        storage.set(FAVORITES_KEY, saved).unwrap();

        let store = FavoritesStore::load(storage);
        assert!(store.is_empty());
        assert_eq!(store.storage().get(FAVORITES_KEY).unwrap().as_deref(), Some(saved));
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> WayfareResult<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> WayfareResult<()> {
            Err(WayfareError::Storage("quota exceeded".into()))
        }

        fn remove(&mut self, _key: &str) -> WayfareResult<()> {
            Err(WayfareError::Storage("quota exceeded".into()))
        }
    }

    #[test]
    fn test_persist_failure_keeps_memory_state() {
        let mut store = FavoritesStore::load(BrokenStore);
        let favorite = store
            .add_favorite_on(NewFavorite::new("Emma", FavoriteCategory::Fiction, 4), day())
            .unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.favorite(favorite.id).unwrap().name, "Emma");
        assert!(matches!(
            store.take_persist_warning(),
            Some(WayfareError::Storage(_))
        ));
        assert!(store.take_persist_warning().is_none());

        store.clear_all();
        assert!(store.is_empty());
        assert!(matches!(
            store.take_persist_warning(),
            Some(WayfareError::Storage(_))
        ));
    }
}
