//! Search pipeline tests
//!
//! Drives `BookSearchService` end to end over a mocked transport: URL
//! construction, parsing, record validation, sorting and failure mapping.

use async_trait::async_trait;
use bookfinder_lib::modules::catalog::{
    BookSearchService, HttpTransport, SearchFilters, SearchType, SortKey,
};
use bookfinder_lib::shared::{AppConfig, AppError, AppResult};
use bookfinder_lib::shared::errors::SEARCH_FAILED_MESSAGE;
use mockall::mock;
use mockall::predicate::function;
use std::sync::Arc;

mock! {
    pub Transport {}

    #[async_trait]
    impl HttpTransport for Transport {
        fn provider_name(&self) -> &str;
        async fn get_text(&self, url: &str) -> AppResult<String>;
    }
}

fn service_over(transport: MockTransport) -> BookSearchService {
    BookSearchService::with_transport(Arc::new(transport), &AppConfig::default())
}

fn responding_with(body: &'static str) -> MockTransport {
    let mut transport = MockTransport::new();
    transport
        .expect_get_text()
        .times(1)
        .returning(move |_| Ok(body.to_string()));
    transport
}

const DUNE_PAGE: &str = r#"{
    "numFound": 3,
    "docs": [
        {"key": "/works/OL1W", "title": "Dune", "first_publish_year": 1965},
        {"key": "/works/OL2W", "title": "Dune Encyclopedia"},
        {"key": "/works/OL3W", "title": "Dune: House Atreides", "first_publish_year": 1990}
    ]
}"#;

#[tokio::test]
async fn test_newest_first_puts_missing_year_last() {
    let mut transport = MockTransport::new();
    transport
        .expect_get_text()
        .with(function(|url: &str| {
            url == "https://openlibrary.org/search.json?title=dune&limit=20"
        }))
        .times(1)
        .returning(|_| Ok(DUNE_PAGE.to_string()));

    let filters = SearchFilters::new(SearchType::Title).with_sort_key(SortKey::Newest);
    let books = service_over(transport).search("dune", &filters).await.unwrap();

    let years: Vec<Option<i32>> = books.iter().map(|b| b.first_publish_year()).collect();
    assert_eq!(years, vec![Some(1990), Some(1965), None]);
}

#[tokio::test]
async fn test_relevance_keeps_api_order() {
    let books = service_over(responding_with(DUNE_PAGE))
        .search("dune", &SearchFilters::default())
        .await
        .unwrap();

    let keys: Vec<&str> = books.iter().map(|b| b.key()).collect();
    assert_eq!(keys, ["/works/OL1W", "/works/OL2W", "/works/OL3W"]);
}

#[tokio::test]
async fn test_server_error_surfaces_generic_failure() {
    let mut transport = MockTransport::new();
    transport
        .expect_get_text()
        .times(1)
        .returning(|_| Err(AppError::ApiError("HTTP 500 Internal Server Error".to_string())));

    let err = service_over(transport)
        .search("dune", &SearchFilters::default())
        .await
        .unwrap_err();

    assert!(err.is_search_failure());
    assert_eq!(err.to_string(), SEARCH_FAILED_MESSAGE);
}

#[tokio::test]
async fn test_timeout_surfaces_generic_failure() {
    let mut transport = MockTransport::new();
    transport
        .expect_get_text()
        .returning(|_| Err(AppError::ExternalServiceError("request timed out".to_string())));

    let result = service_over(transport)
        .search("dune", &SearchFilters::default())
        .await;
    assert_eq!(result, Err(AppError::search_failed()));
}

#[tokio::test]
async fn test_unparseable_body_surfaces_generic_failure() {
    let mut transport = MockTransport::new();
    transport
        .expect_get_text()
        .returning(|_| Ok("<html>maintenance</html>".to_string()));
    transport
        .expect_provider_name()
        .return_const("MockTransport".to_string());

    let result = service_over(transport)
        .search("dune", &SearchFilters::default())
        .await;
    assert_eq!(result, Err(AppError::search_failed()));
}

#[tokio::test]
async fn test_missing_or_empty_docs_is_empty_success() {
    for body in [r#"{"numFound": 0}"#, r#"{"numFound": 0, "docs": []}"#] {
        let books = service_over(responding_with(body))
            .search("zzzz", &SearchFilters::default())
            .await
            .unwrap();
        assert!(books.is_empty(), "body {} should yield no books", body);
    }
}

#[tokio::test]
async fn test_records_without_key_or_title_are_dropped() {
    let body = r#"{"docs": [
        {"title": "No key"},
        {"key": "/works/OL1W", "title": "Kept"},
        {"key": "/works/OL2W", "title": "   "}
    ]}"#;

    let books = service_over(responding_with(body))
        .search("kept", &SearchFilters::default())
        .await
        .unwrap();

    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title(), "Kept");
}

#[tokio::test]
async fn test_subjects_truncated_to_five() {
    let body = r#"{"docs": [{
        "key": "/works/OL1W",
        "title": "Dune",
        "subject": ["a", "b", "c", "d", "e", "f", "g"]
    }]}"#;

    let books = service_over(responding_with(body))
        .search("dune", &SearchFilters::new(SearchType::Subject))
        .await
        .unwrap();

    assert_eq!(books[0].subjects().map(<[String]>::len), Some(5));
}

#[tokio::test]
async fn test_query_encoding_and_limit_reach_the_url() {
    let mut transport = MockTransport::new();
    transport
        .expect_get_text()
        .with(function(|url: &str| {
            url.ends_with("/search.json?author=Ursula%20K.%20Le%20Guin&limit=50")
        }))
        .times(1)
        .returning(|_| Ok(r#"{"docs": []}"#.to_string()));

    let filters = SearchFilters::new(SearchType::Author).with_limit(50);
    service_over(transport)
        .search("Ursula K. Le Guin", &filters)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_invalid_limit_rejected_before_request() {
    let mut transport = MockTransport::new();
    transport.expect_get_text().times(0);

    let filters = SearchFilters::default().with_limit(0);
    let err = service_over(transport)
        .search("dune", &filters)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)));
}
