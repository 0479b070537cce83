use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Outbound HTTP seam used by the search adapter.
///
/// Implementations return the body of a successful (2xx) response and an
/// error for anything else. Parsing is left to the caller.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Name used in log lines and error messages
    fn provider_name(&self) -> &str;

    /// Perform a GET request and return the response body
    async fn get_text(&self, url: &str) -> AppResult<String>;
}
