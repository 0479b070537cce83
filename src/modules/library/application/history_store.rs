use std::sync::Arc;

use super::persisted_collection::PersistedCollection;
use crate::modules::catalog::SearchType;
use crate::modules::library::domain::{
    HistoryEntry, KeyValueStorage, SearchHistory, StoreObserver,
};

pub const HISTORY_KEY: &str = "search-history";

/// Number of entries offered as suggestions under the search box
pub const SUGGESTION_COUNT: usize = 5;

/// Recent searches, persisted under `search-history`
pub struct HistoryStore {
    collection: PersistedCollection<SearchHistory>,
}

impl HistoryStore {
    pub fn load(storage: Arc<dyn KeyValueStorage>, observer: Arc<dyn StoreObserver>) -> Self {
        Self {
            collection: PersistedCollection::load(HISTORY_KEY, storage, observer),
        }
    }

    /// Record a search at the current time. Blank queries are ignored.
    pub fn record(&self, query: &str, search_type: SearchType) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }
        self.insert(HistoryEntry::now(query, search_type.as_str()));
    }

    pub fn insert(&self, entry: HistoryEntry) {
        self.collection.update(|history| history.with_entry(entry));
    }

    pub fn clear(&self) {
        self.collection.update(|_| SearchHistory::default());
    }

    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.collection.read_with(|history| history.entries().to_vec())
    }

    pub fn recent(&self, count: usize) -> Vec<HistoryEntry> {
        self.collection
            .read_with(|history| history.recent(count).to_vec())
    }

    pub fn suggestions(&self) -> Vec<HistoryEntry> {
        self.recent(SUGGESTION_COUNT)
    }

    pub fn flush(&self) -> bool {
        self.collection.flush()
    }

    pub fn is_dirty(&self) -> bool {
        self.collection.is_dirty()
    }
}
