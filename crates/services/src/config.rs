use std::env;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

pub const API_URL_ENV: &str = "RAG_REVIEW_API_URL";
pub const TIMEOUT_ENV: &str = "RAG_REVIEW_TIMEOUT_SECS";
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Where the review backend lives and how long to wait for it.
///
/// With no timeout configured, requests wait for the backend indefinitely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    base_url: Url,
    timeout: Option<Duration>,
}

impl BackendConfig {
    /// # Errors
    ///
    /// Returns `ConfigError` if `base_url` is not an absolute http(s) URL.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            timeout: None,
        })
    }

    /// Read `RAG_REVIEW_API_URL` and `RAG_REVIEW_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when either variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_url = lookup(API_URL_ENV)
            .filter(|raw| !raw.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let mut config = Self::new(raw_url.trim())?;
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            config.timeout = parse_timeout(&raw)?;
        }
        Ok(config)
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Absolute URL for an endpoint path such as `process-rag`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|source| ConfigError::InvalidUrl {
        raw: raw.to_string(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme(other.to_string())),
    }
}

/// Empty or `0` means no timeout.
fn parse_timeout(raw: &str) -> Result<Option<Duration>, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let secs: u64 = trimmed
        .parse()
        .map_err(|_| ConfigError::InvalidTimeout(raw.to_string()))?;
    Ok((secs > 0).then(|| Duration::from_secs(secs)))
}
