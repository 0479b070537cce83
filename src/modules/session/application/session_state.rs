use serde::Serialize;

use crate::modules::catalog::Book;

/// Everything the search page renders
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub results: Vec<Book>,
    pub error: Option<String>,
    pub is_loading: bool,
    pub has_searched: bool,
    /// Key of the book whose details are open
    pub selected_book: Option<String>,
}

/// What happened to a call to `SearchSession::search`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Blank query, nothing was sent
    Ignored,
    /// Results replaced with this many books
    Completed(usize),
    /// Error message set, previous results kept
    Failed,
    /// A newer search was issued while this one was in flight
    Stale,
}
