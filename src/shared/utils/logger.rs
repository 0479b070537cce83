use log::{debug, info, warn};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system
/// This should be called once at application startup
pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .filter_module("bookfinder_lib", log::LevelFilter::Debug)
            .filter_module("reqwest", log::LevelFilter::Warn)
            .filter_module("hyper", log::LevelFilter::Warn)
            .filter_module("tokio", log::LevelFilter::Warn)
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .init();

        info!("Logging system initialized");
    });
}

/// Structured logging helpers for common patterns
pub struct LogContext;

impl LogContext {
    /// Log API calls
    pub fn api_call(provider: &str, endpoint: &str, status: &str, duration_ms: Option<u64>) {
        match duration_ms {
            Some(duration) => info!(
                "API: {} {} {} in {}ms",
                provider, endpoint, status, duration
            ),
            None => debug!("API: Starting {} {}", provider, endpoint),
        }
    }

    /// Log search operations
    pub fn search_operation(query: &str, search_type: &str, results: Option<usize>) {
        match results {
            Some(r) => info!("Search: '{}' by {} returned {} results", query, search_type, r),
            None => debug!("Search: Starting '{}' by {}", query, search_type),
        }
    }

    /// Log storage reads and writes
    pub fn storage_operation(operation: &str, key: &str, bytes: usize) {
        debug!("Storage: {} '{}' ({} bytes)", operation, key, bytes);
    }

    /// Log swallowed storage failures
    pub fn storage_failure(operation: &str, key: &str, error: &dyn std::error::Error) {
        warn!("Storage: {} '{}' failed: {}", operation, key, error);
    }
}

/// Helper for timing operations
pub struct TimedOperation {
    start: std::time::Instant,
    operation: String,
}

impl TimedOperation {
    pub fn new(operation: &str) -> Self {
        debug!("Starting: {}", operation);
        Self {
            start: std::time::Instant::now(),
            operation: operation.to_string(),
        }
    }

    pub fn finish(self) -> u64 {
        let duration = self.start.elapsed().as_millis() as u64;
        debug!("Performance: {} took {}ms", self.operation, duration);
        duration
    }
}
