pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{FavoritesStore, HistoryStore, FAVORITES_KEY, HISTORY_KEY};
pub use domain::{
    Favorites, HistoryEntry, KeyValueStorage, LogStoreObserver, SearchHistory, StoreObserver,
};
pub use infrastructure::{FileStorage, MemoryStorage};
