pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::Book;
pub use value_objects::{CoverSize, SearchFilters, SearchType, SortKey};
