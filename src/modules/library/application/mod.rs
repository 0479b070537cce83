pub mod favorites_store;
pub mod history_store;
mod persisted_collection;

pub use favorites_store::{FavoritesStore, FAVORITES_KEY};
pub use history_store::{HistoryStore, HISTORY_KEY, SUGGESTION_COUNT};
