//! Dispatcher handle shared by the client and its resource modules.

use std::sync::Arc;

use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderMap, HeaderValue};
use serde_json::Value;

use crate::{ApiMethod, ClientConfig, DecodedBody, RequestBuilder, Result, SellAuthError};

/// Maximum number of redirects followed before the final status is judged.
const MAX_REDIRECTS: usize = 10;

/// Authenticated HTTP dispatcher for the SellAuth API.
///
/// Cloning is cheap: clones share the connection pool and configuration.
#[derive(Debug, Clone)]
pub struct ApiClient {
    inner: reqwest::Client,
    config: Arc<ClientConfig>,
    headers: HeaderMap,
}

impl ApiClient {
    /// Create a dispatcher from a validated configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let headers = fixed_headers(&config)?;

        let inner = reqwest::Client::builder()
            .timeout(config.timeout())
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| SellAuthError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            inner,
            config: Arc::new(config),
            headers,
        })
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn inner(&self) -> &reqwest::Client {
        &self.inner
    }

    pub(crate) fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Send one request and normalize its outcome.
    ///
    /// `endpoint` is appended verbatim to the base URL, so it must start
    /// with `/`. Missing `data` is sent as `{}`; missing `params` leaves the
    /// query string empty.
    pub async fn request(
        &self,
        method: ApiMethod,
        endpoint: &str,
        data: Option<&Value>,
        params: Option<&[(&str, &str)]>,
    ) -> Result<DecodedBody> {
        let mut builder = RequestBuilder::new(self, method, endpoint);
        if let Some(data) = data {
            builder = builder.json(data);
        }
        if let Some(params) = params {
            builder = builder.queries(params.iter().copied());
        }
        builder.send().await
    }

    /// Create a GET request builder.
    pub fn get(&self, endpoint: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, ApiMethod::Get, endpoint)
    }

    /// Create a POST request builder.
    pub fn post(&self, endpoint: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, ApiMethod::Post, endpoint)
    }

    /// Create a PUT request builder.
    pub fn put(&self, endpoint: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, ApiMethod::Put, endpoint)
    }

    /// Create a DELETE request builder.
    pub fn delete(&self, endpoint: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, ApiMethod::Delete, endpoint)
    }
}

/// Headers attached to every request; callers cannot override them.
fn fixed_headers(config: &ClientConfig) -> Result<HeaderMap> {
    let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key()))
        .map_err(|_| {
            SellAuthError::Config("API key contains characters not allowed in a header".into())
        })?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::with_capacity(3);
    headers.insert(AUTHORIZATION, auth);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    Ok(headers)
}
