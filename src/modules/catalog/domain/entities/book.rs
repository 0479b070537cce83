use serde::{Deserialize, Serialize};

/// Client-local projection of an Open Library search document.
///
/// Optional fields stay `None` when the source omits them; nothing is
/// defaulted. Fields are private so a `Book` cannot be changed once built;
/// the `with_*` methods only consume and return an owned value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    key: String,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    author_names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    first_publish_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    subjects: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    isbns: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    publishers: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    languages: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cover_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    page_count_median: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rating_average: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rating_count: Option<u32>,
}

impl Book {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            author_names: None,
            first_publish_year: None,
            subjects: None,
            isbns: None,
            publishers: None,
            languages: None,
            cover_id: None,
            page_count_median: None,
            rating_average: None,
            rating_count: None,
        }
    }

    pub fn with_author_names(mut self, author_names: Option<Vec<String>>) -> Self {
        self.author_names = author_names;
        self
    }

    pub fn with_first_publish_year(mut self, year: Option<i32>) -> Self {
        self.first_publish_year = year;
        self
    }

    pub fn with_subjects(mut self, subjects: Option<Vec<String>>) -> Self {
        self.subjects = subjects;
        self
    }

    pub fn with_isbns(mut self, isbns: Option<Vec<String>>) -> Self {
        self.isbns = isbns;
        self
    }

    pub fn with_publishers(mut self, publishers: Option<Vec<String>>) -> Self {
        self.publishers = publishers;
        self
    }

    pub fn with_languages(mut self, languages: Option<Vec<String>>) -> Self {
        self.languages = languages;
        self
    }

    pub fn with_cover_id(mut self, cover_id: Option<i64>) -> Self {
        self.cover_id = cover_id;
        self
    }

    pub fn with_page_count_median(mut self, pages: Option<u32>) -> Self {
        self.page_count_median = pages;
        self
    }

    pub fn with_rating(mut self, average: Option<f64>, count: Option<u32>) -> Self {
        self.rating_average = average;
        self.rating_count = count;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author_names(&self) -> Option<&[String]> {
        self.author_names.as_deref()
    }

    pub fn first_publish_year(&self) -> Option<i32> {
        self.first_publish_year
    }

    pub fn subjects(&self) -> Option<&[String]> {
        self.subjects.as_deref()
    }

    pub fn isbns(&self) -> Option<&[String]> {
        self.isbns.as_deref()
    }

    pub fn publishers(&self) -> Option<&[String]> {
        self.publishers.as_deref()
    }

    pub fn languages(&self) -> Option<&[String]> {
        self.languages.as_deref()
    }

    pub fn cover_id(&self) -> Option<i64> {
        self.cover_id
    }

    pub fn page_count_median(&self) -> Option<u32> {
        self.page_count_median
    }

    pub fn rating_average(&self) -> Option<f64> {
        self.rating_average
    }

    pub fn rating_count(&self) -> Option<u32> {
        self.rating_count
    }
}
