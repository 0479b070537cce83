pub mod modules;
pub mod shared;

use std::sync::Arc;

use modules::{
    catalog::{BookSearchService, HttpTransport, RateLimitClient},
    library::{
        FavoritesStore, FileStorage, HistoryStore, KeyValueStorage, LogStoreObserver,
        StoreObserver,
    },
    session::SearchSession,
};
use shared::{utils::init_logger, AppConfig, AppResult};

/// Wire a session from explicit collaborators.
///
/// Both stores are loaded here, once per session.
pub fn build_session(
    transport: Arc<dyn HttpTransport>,
    storage: Arc<dyn KeyValueStorage>,
    observer: Arc<dyn StoreObserver>,
    config: &AppConfig,
) -> SearchSession {
    let search_service = Arc::new(BookSearchService::with_transport(transport, config));
    let favorites = Arc::new(FavoritesStore::load(storage.clone(), observer.clone()));
    let history = Arc::new(HistoryStore::load(storage, observer));

    SearchSession::new(search_service, favorites, history)
}

/// Build a session backed by the live Open Library API and file storage
pub fn session_from_config(config: &AppConfig) -> AppResult<SearchSession> {
    let transport: Arc<dyn HttpTransport> = Arc::new(RateLimitClient::for_open_library(config)?);
    let storage: Arc<dyn KeyValueStorage> = Arc::new(FileStorage::new(config.data_dir.clone()));

    log::info!(
        "BookFinder ready: api={}, data_dir={}",
        config.api_base_url,
        config.data_dir.display()
    );
    Ok(build_session(
        transport,
        storage,
        Arc::new(LogStoreObserver),
        config,
    ))
}

/// Initialise logging, read configuration from the environment and build a session
pub fn run() -> AppResult<SearchSession> {
    init_logger();
    let config = AppConfig::from_env()?;
    session_from_config(&config)
}
