use serde::Serialize;

use crate::modules::catalog::application::service::BookSearchService;
use crate::modules::catalog::domain::{Book, CoverSize};

const CARD_AUTHORS: usize = 2;
const CARD_SUBJECTS: usize = 3;
const DETAIL_LANGUAGES: usize = 5;
const DETAIL_PUBLISHERS: usize = 3;
const DETAIL_ISBNS: usize = 1;

/// Display-ready projection of a `Book` for result cards and the detail view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDetails {
    pub key: String,
    pub title: String,
    pub work_url: String,
    pub card_cover_url: Option<String>,
    pub cover_url: Option<String>,
    pub card_authors: Option<String>,
    pub authors: Option<String>,
    pub first_publish_year: Option<i32>,
    pub page_count: Option<u32>,
    pub rating: Option<String>,
    pub rating_count: Option<u32>,
    pub card_subjects: Vec<String>,
    pub subjects: Vec<String>,
    pub languages: Option<String>,
    pub publishers: Option<String>,
    pub isbn: Option<String>,
    pub is_favorite: bool,
}

impl BookDetails {
    pub fn from_book(book: &Book, service: &BookSearchService, is_favorite: bool) -> Self {
        let subjects = book.subjects().map(<[String]>::to_vec).unwrap_or_default();

        Self {
            key: book.key().to_string(),
            title: book.title().to_string(),
            work_url: service.work_url(book.key()),
            card_cover_url: book
                .cover_id()
                .map(|id| service.cover_url(id, CoverSize::Medium)),
            cover_url: book
                .cover_id()
                .map(|id| service.cover_url(id, CoverSize::Large)),
            card_authors: book
                .author_names()
                .and_then(|names| join_first(names, CARD_AUTHORS)),
            authors: book
                .author_names()
                .and_then(|names| join_first(names, names.len())),
            first_publish_year: book.first_publish_year(),
            page_count: book.page_count_median(),
            rating: book.rating_average().map(|r| format!("{:.1}", r)),
            rating_count: book.rating_count(),
            card_subjects: subjects.iter().take(CARD_SUBJECTS).cloned().collect(),
            subjects,
            languages: book.languages().and_then(|v| summarize(v, DETAIL_LANGUAGES)),
            publishers: book.publishers().and_then(|v| summarize(v, DETAIL_PUBLISHERS)),
            isbn: book.isbns().and_then(|v| summarize(v, DETAIL_ISBNS)),
            is_favorite,
        }
    }
}

fn join_first(values: &[String], shown: usize) -> Option<String> {
    if values.is_empty() {
        return None;
    }
    Some(
        values
            .iter()
            .take(shown)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", "),
    )
}

/// "a, b, c +2 more"
pub fn summarize(values: &[String], shown: usize) -> Option<String> {
    let head = join_first(values, shown)?;
    if values.len() > shown {
        Some(format!("{} +{} more", head, values.len() - shown))
    } else {
        Some(head)
    }
}
