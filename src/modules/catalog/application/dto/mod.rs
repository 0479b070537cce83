pub mod book_details;

pub use book_details::BookDetails;
