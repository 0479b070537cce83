pub mod adapter;
pub mod mapper;
pub mod models;

pub use adapter::{cover_image_url, work_url, OpenLibraryAdapter};
pub use mapper::{OpenLibraryMapper, MAX_SUBJECTS};
pub use models::{SearchDoc, SearchResponse};
