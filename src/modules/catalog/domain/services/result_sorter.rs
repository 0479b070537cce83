use crate::modules::catalog::domain::{entities::Book, value_objects::SortKey};

/// Return a reordered copy of `books`; the input is left as is.
///
/// All orderings are stable, so ties keep the provider's relevance order.
/// Missing ratings and years compare as 0.
pub fn sort_books(books: &[Book], sort_key: SortKey) -> Vec<Book> {
    let mut sorted = books.to_vec();

    match sort_key {
        SortKey::Relevance => {}
        SortKey::Rating => sorted.sort_by(|a, b| rating_of(b).total_cmp(&rating_of(a))),
        SortKey::Newest => sorted.sort_by(|a, b| year_of(b).cmp(&year_of(a))),
        SortKey::Oldest => sorted.sort_by_key(year_of),
    }

    sorted
}

fn rating_of(book: &Book) -> f64 {
    book.rating_average().unwrap_or(0.0)
}

fn year_of(book: &Book) -> i32 {
    book.first_publish_year().unwrap_or(0)
}
