use serde::{Deserialize, Serialize};

use super::history_entry::HistoryEntry;

pub const MAX_HISTORY_ENTRIES: usize = 10;

/// Most-recent-first list of past searches, unique per (query, type)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<HistoryEntry>", into = "Vec<HistoryEntry>")]
pub struct SearchHistory {
    entries: Vec<HistoryEntry>,
}

impl SearchHistory {
    /// Return the history with `entry` at the front.
    ///
    /// Any earlier entry for the same search is removed first and the list is
    /// capped at `MAX_HISTORY_ENTRIES`, dropping the oldest.
    pub fn with_entry(self, entry: HistoryEntry) -> Self {
        let older = self
            .entries
            .into_iter()
            .filter(|existing| !existing.same_search(&entry));
        let entries: Vec<HistoryEntry> = std::iter::once(entry.clone())
            .chain(older)
            .take(MAX_HISTORY_ENTRIES)
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn recent(&self, count: usize) -> &[HistoryEntry] {
        &self.entries[..count.min(self.entries.len())]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Stored data is normalised on load: duplicates keep their first (newest)
// occurrence and the cap is re-applied.
impl From<Vec<HistoryEntry>> for SearchHistory {
    fn from(stored: Vec<HistoryEntry>) -> Self {
        let mut entries: Vec<HistoryEntry> = Vec::with_capacity(stored.len());
        for entry in stored {
            if !entries.iter().any(|kept| kept.same_search(&entry)) {
                entries.push(entry);
            }
        }
        entries.truncate(MAX_HISTORY_ENTRIES);
        Self { entries }
    }
}

impl From<SearchHistory> for Vec<HistoryEntry> {
    fn from(history: SearchHistory) -> Self {
        history.entries
    }
}
