use crate::shared::errors::AppResult;

/// Synchronous string key/value store backing the library collections
pub trait KeyValueStorage: Send + Sync {
    /// `Ok(None)` when nothing is stored under `key`
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    fn remove(&self, key: &str) -> AppResult<()>;
}
