// Open Library search API models
// https://openlibrary.org/dev/docs/api/search

use serde::{Deserialize, Serialize};

// Response envelope. `docs` may be missing or null; both mean no results.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default, rename = "numFound")]
    pub num_found: Option<u64>,
    #[serde(default)]
    pub docs: Option<Vec<SearchDoc>>,
}

impl SearchResponse {
    pub fn into_docs(self) -> Vec<SearchDoc> {
        self.docs.unwrap_or_default()
    }
}

// A single search document. Every field is optional on the wire; required
// fields are enforced by the mapper.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchDoc {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author_name: Option<Vec<String>>,
    #[serde(default)]
    pub first_publish_year: Option<i32>,
    #[serde(default)]
    pub subject: Option<Vec<String>>,
    #[serde(default)]
    pub isbn: Option<Vec<String>>,
    #[serde(default)]
    pub cover_i: Option<i64>,
    #[serde(default)]
    pub publisher: Option<Vec<String>>,
    #[serde(default)]
    pub language: Option<Vec<String>>,
    #[serde(default)]
    pub number_of_pages_median: Option<u32>,
    #[serde(default)]
    pub ratings_average: Option<f64>,
    #[serde(default)]
    pub ratings_count: Option<u32>,
}
