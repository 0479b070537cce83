use std::sync::Arc;

use super::persisted_collection::PersistedCollection;
use crate::modules::catalog::Book;
use crate::modules::library::domain::{Favorites, KeyValueStorage, StoreObserver};

pub const FAVORITES_KEY: &str = "favorites";

/// Favorited work keys, persisted under `favorites`
pub struct FavoritesStore {
    collection: PersistedCollection<Favorites>,
}

impl FavoritesStore {
    pub fn load(storage: Arc<dyn KeyValueStorage>, observer: Arc<dyn StoreObserver>) -> Self {
        let collection = PersistedCollection::load(FAVORITES_KEY, storage, observer);
        log::debug!(
            "Loaded {} favorites",
            collection.read_with(|favorites: &Favorites| favorites.len())
        );
        Self { collection }
    }

    /// Returns whether `key` is a favorite after the toggle
    pub fn toggle(&self, key: &str) -> bool {
        self.collection
            .update(|favorites| favorites.toggled(key))
            .contains(key)
    }

    pub fn is_favorite(&self, key: &str) -> bool {
        self.collection.read_with(|favorites| favorites.contains(key))
    }

    pub fn favorites(&self) -> Favorites {
        self.collection.get()
    }

    /// The subset of `books` that are favorites, in their given order
    pub fn favorite_books(&self, books: &[Book]) -> Vec<Book> {
        self.collection.read_with(|favorites| {
            books
                .iter()
                .filter(|book| favorites.contains(book.key()))
                .cloned()
                .collect()
        })
    }

    pub fn flush(&self) -> bool {
        self.collection.flush()
    }

    pub fn is_dirty(&self) -> bool {
        self.collection.is_dirty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::library::domain::LogStoreObserver;
    use crate::modules::library::infrastructure::MemoryStorage;

    fn store_over(storage: &MemoryStorage) -> FavoritesStore {
        FavoritesStore::load(Arc::new(storage.clone()), Arc::new(LogStoreObserver))
    }

    #[test]
    fn test_toggle_persists_immediately() {
        let storage = MemoryStorage::new();
        let store = store_over(&storage);

        assert!(store.toggle("/works/OL123W"));
        assert!(store.is_favorite("/works/OL123W"));
        assert_eq!(
            storage.get(FAVORITES_KEY).unwrap().as_deref(),
            Some(r#"["/works/OL123W"]"#)
        );

        assert!(!store.toggle("/works/OL123W"));
        assert!(store.favorites().is_empty());
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_reload_sees_saved_favorites() {
        let storage = MemoryStorage::new();
        store_over(&storage).toggle("/works/OL1W");
        assert!(store_over(&storage).is_favorite("/works/OL1W"));
    }

    #[test]
    fn test_favorite_books_keeps_result_order() {
        let storage = MemoryStorage::new();
        let store = store_over(&storage);
        store.toggle("/works/OL3W");
        store.toggle("/works/OL1W");

        let books = vec![
            Book::new("/works/OL1W", "One"),
            Book::new("/works/OL2W", "Two"),
            Book::new("/works/OL3W", "Three"),
        ];
        let titles: Vec<_> = store
            .favorite_books(&books)
            .iter()
            .map(|b| b.title().to_string())
            .collect();
        assert_eq!(titles, ["One", "Three"]);
    }
}
