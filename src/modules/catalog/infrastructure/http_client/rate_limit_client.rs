//! HTTP client with client-side rate limiting
//!
//! Open Library asks API consumers to keep request rates modest, so every
//! request waits on a `governor` limiter before going out. There is no retry:
//! a failed request is reported once and the caller decides what to do.

use crate::modules::catalog::traits::HttpTransport;
use crate::shared::config::AppConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::LogContext;
use async_trait::async_trait;
use governor::{Quota, RateLimiter as GovernorRateLimiter};
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Client, StatusCode};
use std::num::NonZeroU32;
use std::time::{Duration, Instant};

type DirectRateLimiter = GovernorRateLimiter<
    governor::state::direct::NotKeyed,
    governor::state::InMemoryState,
    governor::clock::DefaultClock,
    governor::middleware::NoOpMiddleware,
>;

/// HTTP client that waits on a rate limiter before each request
pub struct RateLimitClient {
    client: Client,
    rate_limiter: DirectRateLimiter,
    user_agent: String,
    provider_name: String,
}

impl RateLimitClient {
    /// Create a client for the Open Library API from runtime configuration
    pub fn for_open_library(config: &AppConfig) -> AppResult<Self> {
        Self::new(
            "OpenLibrary",
            config.requests_per_second,
            3,
            config.user_agent.clone(),
            config.request_timeout,
        )
    }

    /// Create a custom client
    pub fn new(
        provider_name: &str,
        requests_per_second: f64,
        burst_size: u32,
        user_agent: String,
        timeout: Duration,
    ) -> AppResult<Self> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            AppError::ConfigError(format!("Failed to build {} HTTP client: {}", provider_name, e))
        })?;

        Ok(Self {
            client,
            rate_limiter: Self::create_rate_limiter(requests_per_second, burst_size)?,
            user_agent,
            provider_name: provider_name.to_string(),
        })
    }

    /// Create a rate limiter with specified requests per second and burst capacity
    fn create_rate_limiter(requests_per_second: f64, burst_size: u32) -> AppResult<DirectRateLimiter> {
        if !requests_per_second.is_finite() || requests_per_second <= 0.0 {
            return Err(AppError::ConfigError(format!(
                "Requests per second must be positive, got {}",
                requests_per_second
            )));
        }

        let period = Duration::try_from_secs_f64(1.0 / requests_per_second).map_err(|e| {
            AppError::ConfigError(format!(
                "Requests per second {} gives an unusable rate limit period: {}",
                requests_per_second, e
            ))
        })?;
        let burst = NonZeroU32::new(burst_size.max(1)).unwrap_or(NonZeroU32::MIN);
        let quota = Quota::with_period(period)
            .ok_or_else(|| AppError::ConfigError("Rate limit period must be non-zero".to_string()))?
            .allow_burst(burst);

        Ok(GovernorRateLimiter::direct(quota))
    }

    /// Check if a request can be made now (for testing/debugging)
    pub fn can_make_request_now(&self) -> bool {
        self.rate_limiter.check().is_ok()
    }

    fn status_error(&self, status: StatusCode) -> AppError {
        match status.as_u16() {
            429 => AppError::RateLimitError(format!("{} API rate limit exceeded", self.provider_name)),
            404 => AppError::NotFound(format!("{} API resource not found", self.provider_name)),
            _ => AppError::ApiError(format!(
                "{} API returned error: {}",
                self.provider_name, status
            )),
        }
    }
}

#[async_trait]
impl HttpTransport for RateLimitClient {
    fn provider_name(&self) -> &str {
        &self.provider_name
    }

    async fn get_text(&self, url: &str) -> AppResult<String> {
        self.rate_limiter.until_ready().await;

        LogContext::api_call(&self.provider_name, url, "", None);
        let started = Instant::now();

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let elapsed = started.elapsed().as_millis() as u64;
        LogContext::api_call(&self.provider_name, url, status.as_str(), Some(elapsed));

        if !status.is_success() {
            return Err(self.status_error(status));
        }

        response.text().await.map_err(|e| {
            AppError::SerializationError(format!(
                "Failed to read {} response: {}",
                self.provider_name, e
            ))
        })
    }
}
