use crate::shared::errors::AppError;
use crate::shared::utils::LogContext;

/// Receives persistence failures that the stores swallow
pub trait StoreObserver: Send + Sync {
    fn load_failed(&self, key: &str, error: &AppError);
    fn save_failed(&self, key: &str, error: &AppError);
}

/// Default observer: reports failures through the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogStoreObserver;

impl StoreObserver for LogStoreObserver {
    fn load_failed(&self, key: &str, error: &AppError) {
        LogContext::storage_failure("load", key, error);
    }

    fn save_failed(&self, key: &str, error: &AppError) {
        LogContext::storage_failure("save", key, error);
    }
}
