pub mod query_builder;
pub mod result_sorter;

pub use query_builder::build_query;
pub use result_sorter::sort_books;
