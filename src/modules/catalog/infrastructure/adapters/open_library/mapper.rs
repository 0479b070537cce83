use super::models::SearchDoc;
use crate::modules::catalog::domain::Book;
use crate::shared::errors::{AppError, AppResult};

/// Subjects kept per book; the rest are dropped at transform time.
pub const MAX_SUBJECTS: usize = 5;

/// Maps Open Library search documents onto the local `Book` shape
#[derive(Debug, Clone, Default)]
pub struct OpenLibraryMapper;

impl OpenLibraryMapper {
    pub fn new() -> Self {
        Self
    }

    /// Project one document onto a `Book`.
    ///
    /// Optional fields are carried over untouched, except `subject`, which is
    /// cut to `MAX_SUBJECTS`. A document without a usable `key` or `title`
    /// is rejected with a validation error.
    pub fn map_to_book(&self, doc: SearchDoc) -> AppResult<Book> {
        let key = Self::required(doc.key, "key", "<unknown>")?;
        let title = Self::required(doc.title, "title", &key)?;

        Ok(Book::new(key, title)
            .with_author_names(doc.author_name)
            .with_first_publish_year(doc.first_publish_year)
            .with_subjects(doc.subject.map(Self::truncate_subjects))
            .with_isbns(doc.isbn)
            .with_publishers(doc.publisher)
            .with_languages(doc.language)
            .with_cover_id(doc.cover_i)
            .with_page_count_median(doc.number_of_pages_median)
            .with_rating(doc.ratings_average, doc.ratings_count))
    }

    /// Map a page of documents, dropping (and logging) rejected ones.
    ///
    /// Output order follows input order and is never longer than the input.
    pub fn map_documents(&self, docs: Vec<SearchDoc>) -> Vec<Book> {
        let total = docs.len();
        let books: Vec<Book> = docs
            .into_iter()
            .filter_map(|doc| match self.map_to_book(doc) {
                Ok(book) => Some(book),
                Err(e) => {
                    log::warn!("OpenLibrary: Skipping malformed document: {}", e);
                    None
                }
            })
            .collect();

        if books.len() < total {
            log::warn!(
                "OpenLibrary: Dropped {} of {} documents",
                total - books.len(),
                total
            );
        }
        books
    }

    fn required(value: Option<String>, field: &str, document: &str) -> AppResult<String> {
        match value {
            Some(v) if !v.trim().is_empty() => Ok(v),
            _ => Err(AppError::ValidationError(format!(
                "Search document {} is missing required field '{}'",
                document, field
            ))),
        }
    }

    fn truncate_subjects(mut subjects: Vec<String>) -> Vec<String> {
        subjects.truncate(MAX_SUBJECTS);
        subjects
    }
}
