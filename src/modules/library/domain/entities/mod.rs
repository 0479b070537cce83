pub mod favorites;
pub mod history_entry;
pub mod search_history;

pub use favorites::Favorites;
pub use history_entry::HistoryEntry;
pub use search_history::{SearchHistory, MAX_HISTORY_ENTRIES};
