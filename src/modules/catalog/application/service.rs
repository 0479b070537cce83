use std::sync::Arc;

use crate::modules::catalog::domain::{services::sort_books, Book, CoverSize, SearchFilters};
use crate::modules::catalog::infrastructure::OpenLibraryAdapter;
use crate::modules::catalog::traits::HttpTransport;
use crate::shared::config::AppConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{LogContext, TimedOperation};

/// Application service for book searches
///
/// Runs the whole pipeline (query, fetch, transform, sort) and returns either
/// the complete list or a single `SearchFailed` error. It does not touch the
/// search history; recording a successful search is the caller's job.
pub struct BookSearchService {
    adapter: OpenLibraryAdapter,
}

impl BookSearchService {
    pub fn new(adapter: OpenLibraryAdapter) -> Self {
        Self { adapter }
    }

    pub fn with_transport(http_client: Arc<dyn HttpTransport>, config: &AppConfig) -> Self {
        Self::new(OpenLibraryAdapter::new(http_client, config))
    }

    /// Search books and order them by `filters.sort_key`.
    ///
    /// An empty page is a success. Invalid filters are rejected before any
    /// request is made.
    pub async fn search(&self, query: &str, filters: &SearchFilters) -> AppResult<Vec<Book>> {
        filters.validate()?;

        let search_type = filters.search_type.as_str();
        LogContext::search_operation(query, search_type, None);
        let timer = TimedOperation::new("book_search");

        let books = match self.adapter.search_books(query, filters).await {
            Ok(books) => books,
            Err(e) => {
                log::error!("Error searching books for '{}' by {}: {}", query, search_type, e);
                return Err(AppError::search_failed());
            }
        };

        let sorted = sort_books(&books, filters.sort_key);
        timer.finish();
        LogContext::search_operation(query, search_type, Some(sorted.len()));
        Ok(sorted)
    }

    pub fn cover_url(&self, cover_id: i64, size: CoverSize) -> String {
        self.adapter.cover_url(cover_id, size)
    }

    pub fn work_url(&self, key: &str) -> String {
        self.adapter.work_url(key)
    }
}
