pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod traits;

// Re-exports for easy external access
pub use application::{BookDetails, BookSearchService};
pub use domain::{Book, CoverSize, SearchFilters, SearchType, SortKey};
pub use infrastructure::{OpenLibraryAdapter, RateLimitClient};
pub use traits::HttpTransport;
