pub mod entities;
pub mod repositories;
pub mod services;

pub use entities::{Favorites, HistoryEntry, SearchHistory, MAX_HISTORY_ENTRIES};
pub use repositories::KeyValueStorage;
pub use services::{LogStoreObserver, StoreObserver};
