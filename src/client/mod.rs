//! Service client
//!
//! [`ApiClient`] owns the HTTP transport, the service host, and the API
//! key. It implements [`Transport`], the one-method contract the result
//! iterator binds to: send a parameter payload to an endpoint path, get
//! parsed JSON or an error back.

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use crate::iter::ResultIter;
use crate::query::Query;
use crate::resource::{PageRequest, ResultPage};
use crate::types::{JsonObject, JsonValue};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Request execution contract between the iterator and the service
///
/// Success means a parsed JSON body with no application-level error in it.
/// Retries, rate limiting and timeouts all live behind this seam.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST a parameter payload to an endpoint path and parse the response
    async fn execute(&self, path: &str, params: JsonObject) -> Result<JsonValue>;
}

/// Client for one EventWire deployment
///
/// Cheap to clone: clones share the underlying HTTP session, so many
/// queries and iterators in a process reuse one connection pool.
#[derive(Clone)]
pub struct ApiClient {
    http: Arc<HttpClient>,
    api_key: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // never print the key
        f.debug_struct("ApiClient")
            .field("http", &self.http)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl ApiClient {
    /// Create a client for a host with default HTTP settings
    pub fn new(host: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let host = host.into();
        url::Url::parse(&host)?;
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(Error::missing_field("api_key"));
        }

        let http = HttpClient::with_config(HttpClientConfig::builder().base_url(host).build());
        Ok(Self {
            http: Arc::new(http),
            api_key,
        })
    }

    /// Create a client from a validated configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            http: Arc::new(HttpClient::with_config(config.http_client_config())),
            api_key: config.api_key.clone(),
        })
    }

    /// Create a client around an existing HTTP client
    pub fn with_http_client(http: HttpClient, api_key: impl Into<String>) -> Self {
        Self {
            http: Arc::new(http),
            api_key: api_key.into(),
        }
    }

    /// Iterate over all items matching a query
    ///
    /// Performs no network call; configure sorting, fields and the item
    /// cap on the returned iterator before pulling from it.
    pub fn iter(&self, query: Query) -> ResultIter {
        ResultIter::new(Arc::new(self.clone()), query)
    }

    /// Count the items matching a query with exactly one cheap request
    pub async fn count(&self, query: &Query) -> Result<u64> {
        let adapter = query.kind().adapter();
        let payload = query.request_payload(adapter.count_descriptor());
        let body = self.execute(adapter.endpoint(), payload).await?;
        Ok(adapter.read_page(&body)?.total_results)
    }

    /// Fetch a single page directly, outside the iterator
    ///
    /// The only path where the page size is caller-chosen; the request is
    /// validated against the resource's ceiling before anything is sent.
    pub async fn fetch_page(&self, query: &Query, request: &PageRequest) -> Result<ResultPage> {
        let adapter = query.kind().adapter();
        let payload = query.request_payload(adapter.descriptor(request)?);
        let body = self.execute(adapter.endpoint(), payload).await?;
        adapter.read_page(&body)
    }
}

#[async_trait]
impl Transport for ApiClient {
    async fn execute(&self, path: &str, mut params: JsonObject) -> Result<JsonValue> {
        params.insert("apiKey".to_string(), JsonValue::from(self.api_key.clone()));

        debug!("POST {} ({} params)", path, params.len());
        let body = self.http.post_json(path, JsonValue::Object(params)).await?;

        // HTTP 200 with an "error" key is still a failed request
        if let Some(error) = body.get("error") {
            let message = error
                .as_str()
                .map(ToString::to_string)
                .unwrap_or_else(|| error.to_string());
            return Err(Error::api(message));
        }

        Ok(body)
    }
}
