use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::session_state::{SearchOutcome, SessionState};
use crate::modules::catalog::{Book, BookDetails, BookSearchService, SearchFilters, SearchType};
use crate::modules::library::{FavoritesStore, HistoryEntry, HistoryStore};

/// State of one search page: results, loading flag, error and detail view.
///
/// Overlapping searches are resolved with request tokens. Only the most
/// recently issued search may change the visible state when it completes.
pub struct SearchSession {
    search_service: Arc<BookSearchService>,
    favorites: Arc<FavoritesStore>,
    history: Arc<HistoryStore>,
    state: Mutex<SessionState>,
    latest_token: AtomicU64,
}

impl SearchSession {
    pub fn new(
        search_service: Arc<BookSearchService>,
        favorites: Arc<FavoritesStore>,
        history: Arc<HistoryStore>,
    ) -> Self {
        Self {
            search_service,
            favorites,
            history,
            state: Mutex::new(SessionState::default()),
            latest_token: AtomicU64::new(0),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // Tokens are only issued and compared with the state lock held.
    fn is_current(&self, token: u64) -> bool {
        self.latest_token.load(Ordering::SeqCst) == token
    }

    /// Run a search and, if it is still the latest one, publish its outcome.
    ///
    /// Successful searches replace the results, close the detail view and are
    /// recorded in history with the trimmed query. On failure the error
    /// message is set and the previous results stay.
    pub async fn search(&self, query: &str, filters: SearchFilters) -> SearchOutcome {
        let query = query.trim();
        if query.is_empty() {
            return SearchOutcome::Ignored;
        }

        let token = {
            let mut state = self.lock();
            state.is_loading = true;
            state.error = None;
            self.latest_token.fetch_add(1, Ordering::SeqCst) + 1
        };

        let result = self.search_service.search(query, &filters).await;

        let mut state = self.lock();
        if !self.is_current(token) {
            log::debug!("Discarding stale results for '{}' (token {})", query, token);
            return SearchOutcome::Stale;
        }

        state.is_loading = false;
        state.has_searched = true;
        match result {
            Ok(books) => {
                let count = books.len();
                state.results = books;
                state.selected_book = None;
                self.history.record(query, filters.search_type);
                SearchOutcome::Completed(count)
            }
            Err(e) => {
                state.error = Some(e.to_string());
                SearchOutcome::Failed
            }
        }
    }

    /// Repeat a past search, keeping the current sort order and limit
    pub async fn rerun_history(
        &self,
        entry: &HistoryEntry,
        filters: SearchFilters,
    ) -> SearchOutcome {
        let filters = SearchFilters {
            search_type: SearchType::from(entry.search_type.as_str()),
            ..filters
        };
        self.search(&entry.query, filters).await
    }

    /// Open the detail view for a book in the current results
    pub fn select_book(&self, key: &str) -> bool {
        let mut state = self.lock();
        if state.results.iter().any(|book| book.key() == key) {
            state.selected_book = Some(key.to_string());
            true
        } else {
            false
        }
    }

    pub fn close_details(&self) {
        self.lock().selected_book = None;
    }

    pub fn selected_details(&self) -> Option<BookDetails> {
        let book = {
            let state = self.lock();
            let key = state.selected_book.as_deref()?;
            state.results.iter().find(|book| book.key() == key).cloned()?
        };
        let is_favorite = self.favorites.is_favorite(book.key());
        Some(BookDetails::from_book(&book, &self.search_service, is_favorite))
    }

    /// Card projections for the current results
    pub fn result_cards(&self) -> Vec<BookDetails> {
        let results = self.lock().results.clone();
        results
            .iter()
            .map(|book| {
                let is_favorite = self.favorites.is_favorite(book.key());
                BookDetails::from_book(book, &self.search_service, is_favorite)
            })
            .collect()
    }

    pub fn dismiss_error(&self) {
        self.lock().error = None;
    }

    pub fn toggle_favorite(&self, key: &str) -> bool {
        self.favorites.toggle(key)
    }

    /// Favorited books among the visible results
    pub fn favorite_books(&self) -> Vec<Book> {
        let results = self.lock().results.clone();
        self.favorites.favorite_books(&results)
    }

    pub fn history_suggestions(&self) -> Vec<HistoryEntry> {
        self.history.suggestions()
    }

    pub fn snapshot(&self) -> SessionState {
        self.lock().clone()
    }

    pub fn is_busy(&self) -> bool {
        self.lock().is_loading
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }
}
