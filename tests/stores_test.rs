//! Favorites and history store tests
//!
//! Exercises the persisted collections over in-memory, failing and
//! file-backed storage.

use bookfinder_lib::modules::catalog::SearchType;
use bookfinder_lib::modules::library::{
    FavoritesStore, FileStorage, HistoryEntry, HistoryStore, KeyValueStorage, LogStoreObserver,
    MemoryStorage, StoreObserver, FAVORITES_KEY, HISTORY_KEY,
};
use bookfinder_lib::shared::{AppError, AppResult};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Records every failure the stores report
#[derive(Default)]
struct RecordingObserver {
    events: Mutex<Vec<String>>,
}

impl RecordingObserver {
    fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl StoreObserver for RecordingObserver {
    fn load_failed(&self, key: &str, _error: &AppError) {
        self.events.lock().unwrap().push(format!("load:{}", key));
    }

    fn save_failed(&self, key: &str, _error: &AppError) {
        self.events.lock().unwrap().push(format!("save:{}", key));
    }
}

/// Storage whose reads and writes fail while `broken` is set
#[derive(Default)]
struct FlakyStorage {
    inner: MemoryStorage,
    broken: AtomicBool,
}

impl FlakyStorage {
    fn broken() -> Self {
        Self {
            inner: MemoryStorage::new(),
            broken: AtomicBool::new(true),
        }
    }

    fn check(&self) -> AppResult<()> {
        if self.broken.load(Ordering::SeqCst) {
            Err(AppError::StorageError("quota exceeded".to_string()))
        } else {
            Ok(())
        }
    }
}

impl KeyValueStorage for FlakyStorage {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.check()?;
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.check()?;
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.check()?;
        self.inner.remove(key)
    }
}

fn history_over(storage: Arc<dyn KeyValueStorage>) -> HistoryStore {
    HistoryStore::load(storage, Arc::new(LogStoreObserver))
}

#[test]
fn test_repeated_search_keeps_one_entry_with_latest_timestamp() {
    let store = history_over(Arc::new(MemoryStorage::new()));
    store.insert(HistoryEntry::new("dune", "title", 1_000));
    store.insert(HistoryEntry::new("dune", "title", 2_000));

    let entries = store.entries();
    assert_eq!(entries, vec![HistoryEntry::new("dune", "title", 2_000)]);
}

#[test]
fn test_eleventh_distinct_search_drops_oldest() {
    let storage = MemoryStorage::new();
    let store = history_over(Arc::new(storage.clone()));
    for i in 0..11 {
        store.insert(HistoryEntry::new(format!("query {}", i), "title", i));
    }

    let entries = store.entries();
    assert_eq!(entries.len(), 10);
    assert_eq!(entries[0].query, "query 10");
    assert_eq!(entries[9].query, "query 1");

    let saved: Vec<HistoryEntry> =
        serde_json::from_str(&storage.get(HISTORY_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(saved, entries);
}

#[test]
fn test_toggling_twice_restores_favorites() {
    let storage = MemoryStorage::new();
    let store = FavoritesStore::load(Arc::new(storage.clone()), Arc::new(LogStoreObserver));
    store.toggle("OL1W");
    let before = store.favorites();

    assert!(store.toggle("OL123W"));
    assert!(!store.toggle("OL123W"));

    assert_eq!(store.favorites(), before);
    assert_eq!(storage.get(FAVORITES_KEY).unwrap().as_deref(), Some(r#"["OL1W"]"#));
}

#[test]
fn test_corrupt_data_loads_empty_and_reports() {
    let storage = MemoryStorage::new()
        .with_value(FAVORITES_KEY, "{not json")
        .with_value(HISTORY_KEY, r#"{"query": "dune"}"#);
    let observer = Arc::new(RecordingObserver::default());

    let favorites = FavoritesStore::load(Arc::new(storage.clone()), observer.clone());
    let history = HistoryStore::load(Arc::new(storage), observer.clone());

    assert!(favorites.favorites().is_empty());
    assert!(history.entries().is_empty());
    assert_eq!(observer.events(), ["load:favorites", "load:search-history"]);

    // The corrupt value is replaced on the next save
    history.record("dune", SearchType::Title);
    assert_eq!(history.entries().len(), 1);
}

#[test]
fn test_storage_failures_are_swallowed() {
    let storage = Arc::new(FlakyStorage::broken());
    let observer = Arc::new(RecordingObserver::default());
    let store = FavoritesStore::load(storage.clone(), observer.clone());

    assert!(store.toggle("/works/OL1W"));
    assert!(store.is_favorite("/works/OL1W"));
    assert!(store.is_dirty());
    assert_eq!(observer.events(), ["load:favorites", "save:favorites"]);

    storage.broken.store(false, Ordering::SeqCst);
    assert!(store.flush());
    assert!(!store.is_dirty());
    assert_eq!(
        storage.get(FAVORITES_KEY).unwrap().as_deref(),
        Some(r#"["/works/OL1W"]"#)
    );
}

#[test]
fn test_file_storage_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let storage: Arc<dyn KeyValueStorage> = Arc::new(FileStorage::new(dir.path()));

    {
        let history = history_over(storage.clone());
        history.record("Dune", SearchType::Title);
        history.record("Le Guin", SearchType::Author);
        let favorites = FavoritesStore::load(storage.clone(), Arc::new(LogStoreObserver));
        favorites.toggle("/works/OL1W");
    }

    let history = history_over(storage.clone());
    let queries: Vec<String> = history.entries().into_iter().map(|e| e.query).collect();
    assert_eq!(queries, ["Le Guin", "Dune"]);

    let favorites = FavoritesStore::load(storage, Arc::new(LogStoreObserver));
    assert!(favorites.is_favorite("/works/OL1W"));
    assert!(dir.path().join("favorites.json").exists());
    assert!(dir.path().join("search-history.json").exists());
}

#[test]
fn test_clear_history() {
    let store = history_over(Arc::new(MemoryStorage::new()));
    store.record("dune", SearchType::Title);
    store.clear();
    assert!(store.entries().is_empty());
    assert!(store.recent(5).is_empty());
}
