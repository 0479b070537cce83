pub mod dto;
pub mod service;

pub use dto::BookDetails;
pub use service::BookSearchService;
