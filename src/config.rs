//! Client configuration
//!
//! [`ClientConfig`] describes everything needed to talk to an EventWire
//! deployment: the host, the API key, and the HTTP behavior. It can be
//! built in code or loaded from a YAML file, with defaults for everything
//! except the host and key.

use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, RateLimiterConfig};
use crate::types::BackoffType;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Complete client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Service host, e.g. `https://eventwire.example.com`
    pub host: String,

    /// API key sent with every request
    pub api_key: String,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpSettings,
}

/// HTTP behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of retries per request
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Backoff strategy between retries
    #[serde(default)]
    pub backoff: BackoffType,

    /// Initial backoff delay in milliseconds
    #[serde(default = "default_initial_backoff_ms")]
    pub initial_backoff_ms: u64,

    /// Maximum backoff delay in milliseconds
    #[serde(default = "default_max_backoff_ms")]
    pub max_backoff_ms: u64,

    /// Rate limit settings (absent disables client-side limiting)
    #[serde(default = "default_rate_limit")]
    pub rate_limit: Option<RateLimitSettings>,
}

/// Client-side rate limit settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitSettings {
    /// Maximum requests per second
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,

    /// Burst size
    #[serde(default = "default_burst_size")]
    pub burst_size: u32,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

fn default_initial_backoff_ms() -> u64 {
    100
}

fn default_max_backoff_ms() -> u64 {
    60_000
}

fn default_requests_per_second() -> u32 {
    5
}

fn default_burst_size() -> u32 {
    5
}

fn default_rate_limit() -> Option<RateLimitSettings> {
    Some(RateLimitSettings::default())
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            backoff: BackoffType::default(),
            initial_backoff_ms: default_initial_backoff_ms(),
            max_backoff_ms: default_max_backoff_ms(),
            rate_limit: default_rate_limit(),
        }
    }
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            requests_per_second: default_requests_per_second(),
            burst_size: default_burst_size(),
        }
    }
}

impl ClientConfig {
    /// Create a config with default HTTP settings
    pub fn new(host: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            api_key: api_key.into(),
            http: HttpSettings::default(),
        }
    }

    /// Parse a config from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Validate the config, rejecting unusable values eagerly
    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(Error::missing_field("host"));
        }
        url::Url::parse(&self.host)?;
        if self.api_key.is_empty() {
            return Err(Error::missing_field("api_key"));
        }
        if self.http.timeout_secs == 0 {
            return Err(Error::InvalidConfigValue {
                field: "http.timeout_secs".to_string(),
                message: "timeout must be positive".to_string(),
            });
        }
        Ok(())
    }

    /// Derive the HTTP client config
    pub fn http_client_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(&self.host)
            .timeout(Duration::from_secs(self.http.timeout_secs))
            .max_retries(self.http.max_retries)
            .backoff(
                self.http.backoff,
                Duration::from_millis(self.http.initial_backoff_ms),
                Duration::from_millis(self.http.max_backoff_ms),
            );

        builder = match &self.http.rate_limit {
            Some(limit) => builder.rate_limit(RateLimiterConfig::new(
                limit.requests_per_second,
                limit.burst_size,
            )),
            None => builder.no_rate_limit(),
        };

        builder.build()
    }
}
