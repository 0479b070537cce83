use serde::{Deserialize, Serialize};

/// A previously executed search, used to refill the search form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub query: String,
    #[serde(rename = "type")]
    pub search_type: String,
    /// Epoch milliseconds
    pub timestamp: i64,
}

impl HistoryEntry {
    pub fn new(query: impl Into<String>, search_type: impl Into<String>, timestamp: i64) -> Self {
        Self {
            query: query.into(),
            search_type: search_type.into(),
            timestamp,
        }
    }

    /// Stamp an entry with the current wall clock
    pub fn now(query: impl Into<String>, search_type: impl Into<String>) -> Self {
        Self::new(query, search_type, chrono::Utc::now().timestamp_millis())
    }

    /// Entries match on case-insensitive query and exact type
    pub fn same_search(&self, other: &HistoryEntry) -> bool {
        self.search_type == other.search_type
            && self.query.to_lowercase() == other.query.to_lowercase()
    }
}
