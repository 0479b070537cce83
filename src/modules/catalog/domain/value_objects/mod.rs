pub mod cover_size;
pub mod search_filters;
pub mod search_type;
pub mod sort_key;

pub use cover_size::CoverSize;
pub use search_filters::{SearchFilters, DEFAULT_RESULT_LIMIT, MAX_RESULT_LIMIT};
pub use search_type::SearchType;
pub use sort_key::SortKey;
