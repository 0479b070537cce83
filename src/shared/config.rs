use crate::shared::errors::{AppError, AppResult};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://openlibrary.org";
pub const DEFAULT_COVERS_BASE_URL: &str = "https://covers.openlibrary.org";

/// Runtime configuration, read from `BOOKFINDER_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub covers_base_url: String,
    pub data_dir: PathBuf,
    pub requests_per_second: f64,
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            covers_base_url: DEFAULT_COVERS_BASE_URL.to_string(),
            data_dir: PathBuf::from("./data"),
            requests_per_second: 1.0,
            request_timeout: Duration::from_secs(15),
            user_agent: format!("bookfinder/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl AppConfig {
    /// Load `.env` (if any) and read the process environment.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source; unset keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_base_url = lookup("BOOKFINDER_API_BASE_URL")
            .map(|url| normalize_base_url(&url))
            .unwrap_or(defaults.api_base_url);
        let covers_base_url = lookup("BOOKFINDER_COVERS_BASE_URL")
            .map(|url| normalize_base_url(&url))
            .unwrap_or(defaults.covers_base_url);
        let data_dir = lookup("BOOKFINDER_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);
        let requests_per_second: f64 = parse_var(&lookup, "BOOKFINDER_REQUESTS_PER_SECOND")?
            .unwrap_or(defaults.requests_per_second);
        let request_timeout = parse_var::<u64, _>(&lookup, "BOOKFINDER_REQUEST_TIMEOUT_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout);
        let user_agent = lookup("BOOKFINDER_USER_AGENT").unwrap_or(defaults.user_agent);

        let config = Self {
            api_base_url,
            covers_base_url,
            data_dir,
            requests_per_second,
            request_timeout,
            user_agent,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if !self.requests_per_second.is_finite() || self.requests_per_second <= 0.0 {
            return Err(AppError::ConfigError(
                "BOOKFINDER_REQUESTS_PER_SECOND must be a positive number".to_string(),
            ));
        }
        if Duration::try_from_secs_f64(1.0 / self.requests_per_second).is_err() {
            return Err(AppError::ConfigError(format!(
                "BOOKFINDER_REQUESTS_PER_SECOND is too small: {}",
                self.requests_per_second
            )));
        }
        if self.request_timeout.is_zero() {
            return Err(AppError::ConfigError(
                "BOOKFINDER_REQUEST_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }
        for (name, url) in [
            ("BOOKFINDER_API_BASE_URL", &self.api_base_url),
            ("BOOKFINDER_COVERS_BASE_URL", &self.covers_base_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(AppError::ConfigError(format!(
                    "{} must be an http(s) URL, got '{}'",
                    name, url
                )));
            }
        }
        Ok(())
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn parse_var<T, F>(lookup: &F, key: &str) -> AppResult<Option<T>>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| AppError::ConfigError(format!("Invalid value for {}: '{}'", key, raw))),
    }
}
