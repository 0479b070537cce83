use std::sync::Arc;

use crate::{
    modules::catalog::{
        domain::{services::build_query, Book, CoverSize, SearchFilters},
        traits::HttpTransport,
    },
    shared::{
        config::AppConfig,
        errors::{AppError, AppResult},
    },
};

use super::mapper::OpenLibraryMapper;
use super::models::SearchResponse;

/// Open Library provider adapter over the public search endpoint
pub struct OpenLibraryAdapter {
    http_client: Arc<dyn HttpTransport>,
    base_url: String,
    covers_base_url: String,
    mapper: OpenLibraryMapper,
}

impl OpenLibraryAdapter {
    pub fn new(http_client: Arc<dyn HttpTransport>, config: &AppConfig) -> Self {
        Self {
            http_client,
            base_url: config.api_base_url.clone(),
            covers_base_url: config.covers_base_url.clone(),
            mapper: OpenLibraryMapper::new(),
        }
    }

    /// `<base>/search.json?<param>=<encoded>&limit=<n>`
    pub fn search_url(&self, query: &str, filters: &SearchFilters) -> String {
        format!(
            "{}/search.json?{}&limit={}",
            self.base_url,
            build_query(filters.search_type, query),
            filters.limit
        )
    }

    /// Fetch, parse and map one page of search results in relevance order.
    ///
    /// Transport and parse errors are returned as-is; the caller decides how
    /// to surface them.
    pub async fn search_books(&self, query: &str, filters: &SearchFilters) -> AppResult<Vec<Book>> {
        let url = self.search_url(query, filters);

        log::info!(
            "OpenLibrary: Searching {} '{}' (limit: {})",
            filters.search_type,
            query,
            filters.limit
        );

        let body = self.http_client.get_text(&url).await?;
        let response: SearchResponse = serde_json::from_str(&body).map_err(|e| {
            AppError::SerializationError(format!(
                "Failed to parse {} response: {}. Response: {}",
                self.http_client.provider_name(),
                e,
                preview(&body)
            ))
        })?;

        let num_found = response.num_found;
        let books = self.mapper.map_documents(response.into_docs());

        log::info!(
            "OpenLibrary: Found {} results for '{}' ({} matches reported)",
            books.len(),
            query,
            num_found.map_or_else(|| "no".to_string(), |n| n.to_string())
        );
        Ok(books)
    }

    pub fn cover_url(&self, cover_id: i64, size: CoverSize) -> String {
        cover_image_url(&self.covers_base_url, cover_id, size)
    }

    pub fn work_url(&self, key: &str) -> String {
        work_url(&self.base_url, key)
    }
}

/// `<cover-base>/b/id/<cover id>-<S|M|L>.jpg`. The image is not checked for existence.
pub fn cover_image_url(covers_base_url: &str, cover_id: i64, size: CoverSize) -> String {
    format!("{}/b/id/{}-{}.jpg", covers_base_url, cover_id, size.suffix())
}

/// Public page of a work; search keys already start with `/works/`.
pub fn work_url(base_url: &str, key: &str) -> String {
    if key.starts_with('/') {
        format!("{}{}", base_url, key)
    } else {
        format!("{}/{}", base_url, key)
    }
}

fn preview(body: &str) -> String {
    if body.chars().count() > 200 {
        format!("{}...", body.chars().take(200).collect::<String>())
    } else {
        body.to_string()
    }
}
