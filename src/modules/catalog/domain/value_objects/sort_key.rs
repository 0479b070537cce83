use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Requested ordering for a result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum SortKey {
    /// Order returned by the search provider
    #[default]
    #[serde(rename = "relevance")]
    Relevance,
    #[serde(rename = "rating")]
    Rating,
    #[serde(rename = "new")]
    Newest,
    #[serde(rename = "old")]
    Oldest,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::Rating => "rating",
            SortKey::Newest => "new",
            SortKey::Oldest => "old",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for SortKey {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "rating" => SortKey::Rating,
            "new" | "newest" => SortKey::Newest,
            "old" | "oldest" => SortKey::Oldest,
            _ => SortKey::Relevance,
        }
    }
}

impl From<String> for SortKey {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

impl FromStr for SortKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wire_names() {
        assert_eq!(SortKey::from("new"), SortKey::Newest);
        assert_eq!(SortKey::from("old"), SortKey::Oldest);
        assert_eq!(SortKey::from("rating"), SortKey::Rating);
        assert_eq!(SortKey::from("popularity"), SortKey::Relevance);
    }

    #[test]
    fn test_serde_uses_wire_names() {
        assert_eq!(serde_json::to_string(&SortKey::Newest).unwrap(), "\"new\"");
        let parsed: SortKey = serde_json::from_str("\"old\"").unwrap();
        assert_eq!(parsed, SortKey::Oldest);
    }
}
