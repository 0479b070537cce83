use serde::{Deserialize, Serialize};

use super::{SearchType, SortKey};
use crate::shared::errors::{AppError, AppResult};

pub const DEFAULT_RESULT_LIMIT: u32 = 20;
pub const MAX_RESULT_LIMIT: u32 = 100;

/// Per-search options. Built fresh for every search and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(rename = "type")]
    pub search_type: SearchType,
    #[serde(rename = "sortBy")]
    pub sort_key: SortKey,
    pub limit: u32,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            search_type: SearchType::Title,
            sort_key: SortKey::Relevance,
            limit: DEFAULT_RESULT_LIMIT,
        }
    }
}

impl SearchFilters {
    pub fn new(search_type: SearchType) -> Self {
        Self {
            search_type,
            ..Self::default()
        }
    }

    pub fn with_sort_key(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.limit == 0 || self.limit > MAX_RESULT_LIMIT {
            return Err(AppError::ValidationError(format!(
                "Limit must be between 1 and {}",
                MAX_RESULT_LIMIT
            )));
        }
        Ok(())
    }
}
