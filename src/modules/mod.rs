// Feature modules, each split into domain / infrastructure / application

pub mod catalog; // Open Library search, result shaping and sorting
pub mod library; // Favorites and search history persistence
pub mod session; // Search page state
