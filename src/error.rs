//! Error types for the EventWire client
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for the EventWire client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Invalid or unusable configuration
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A required configuration field was absent or empty
    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    /// A configuration field held an unusable value
    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    /// YAML parsing failed
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON parsing failed
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A host or endpoint URL failed to parse
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Request Precondition Errors
    // ============================================================================
    /// A page number below the 1-based minimum was requested
    #[error("Invalid page number {page}: pages are 1-based")]
    InvalidPage { page: u32 },

    /// A page size above the resource ceiling was requested
    #[error("Page size {requested} exceeds the {resource} ceiling of {max}")]
    InvalidPageSize {
        resource: &'static str,
        requested: u32,
        max: u32,
    },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    /// The HTTP request itself failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a failure status
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The server rejected the request for exceeding its quota
    #[error("Rate limited, retry after {retry_after_seconds}s")]
    RateLimited { retry_after_seconds: u64 },

    /// The request did not complete in time
    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// Every retry attempt failed
    #[error("Max retries ({max_retries}) exceeded")]
    MaxRetriesExceeded { max_retries: u32 },

    // ============================================================================
    // API Response Errors
    // ============================================================================
    /// HTTP success carrying an application-level error payload
    #[error("API error: {message}")]
    Api { message: String },

    /// The response did not contain the expected result key
    #[error("Response is missing the '{key}' result key")]
    MissingResultKey { key: &'static str },

    /// The page payload under the result key did not deserialize
    #[error("Malformed page payload under '{key}': {message}")]
    MalformedPage { key: &'static str, message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    /// Filesystem access failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Anything without a more specific variant
    #[error("{0}")]
    Other(String),

    /// Wrapped error from an anyhow-based caller
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create an application-level API error
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a malformed page error
    pub fn malformed_page(key: &'static str, message: impl Into<String>) -> Self {
        Self::MalformedPage {
            key,
            message: message.into(),
        }
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(_) | Error::RateLimited { .. } | Error::Timeout { .. } => true,
            Error::HttpStatus { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }

    /// Check if this error is a caller-fixable precondition violation
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Error::InvalidPage { .. } | Error::InvalidPageSize { .. }
        )
    }
}

/// Check if an HTTP status code is retryable
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Result type alias for the EventWire client
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::missing_field("api_key");
        assert_eq!(err.to_string(), "Missing required config field: api_key");

        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");

        let err = Error::api("invalid action");
        assert_eq!(err.to_string(), "API error: invalid action");
    }

    #[test]
    fn test_is_retryable() {
        assert!(Error::RateLimited {
            retry_after_seconds: 60
        }
        .is_retryable());
        assert!(Error::Timeout { timeout_ms: 1000 }.is_retryable());
        assert!(Error::http_status(429, "").is_retryable());
        assert!(Error::http_status(500, "").is_retryable());
        assert!(Error::http_status(503, "").is_retryable());

        assert!(!Error::http_status(400, "").is_retryable());
        assert!(!Error::http_status(401, "").is_retryable());
        assert!(!Error::api("bad query").is_retryable());
        assert!(!Error::config("test").is_retryable());
    }

    #[test]
    fn test_is_precondition() {
        assert!(Error::InvalidPage { page: 0 }.is_precondition());
        assert!(Error::InvalidPageSize {
            resource: "articles",
            requested: 500,
            max: 100
        }
        .is_precondition());
        assert!(!Error::api("oops").is_precondition());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
