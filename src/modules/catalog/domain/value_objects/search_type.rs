use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dimension a query is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SearchType {
    #[default]
    Title,
    Author,
    Subject,
    Isbn,
}

impl SearchType {
    pub const ALL: [SearchType; 4] = [
        SearchType::Title,
        SearchType::Author,
        SearchType::Subject,
        SearchType::Isbn,
    ];

    /// Name of the Open Library query parameter for this dimension
    pub fn param_name(&self) -> &'static str {
        match self {
            SearchType::Title => "title",
            SearchType::Author => "author",
            SearchType::Subject => "subject",
            SearchType::Isbn => "isbn",
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.param_name()
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Unknown dimensions fall back to a title search.
impl From<&str> for SearchType {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "author" => SearchType::Author,
            "subject" => SearchType::Subject,
            "isbn" => SearchType::Isbn,
            _ => SearchType::Title,
        }
    }
}

impl From<String> for SearchType {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

impl FromStr for SearchType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.into())
    }
}
