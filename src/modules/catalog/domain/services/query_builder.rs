use crate::modules::catalog::domain::value_objects::SearchType;

/// Build the `<param>=<encoded query>` fragment for a search.
///
/// Does not trim or validate; an empty query encodes to `title=`. The
/// `limit` parameter is appended by the caller.
pub fn build_query(search_type: SearchType, raw_query: &str) -> String {
    format!(
        "{}={}",
        search_type.param_name(),
        urlencoding::encode(raw_query)
    )
}
