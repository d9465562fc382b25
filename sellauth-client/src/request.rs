//! Request builder and dispatch.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::response::Response;
use crate::{ApiClient, ApiMethod, DecodedBody, Result, SellAuthError};

/// Request builder bound to an [`ApiClient`].
///
/// Headers are fixed by the client; only the body and query can be set.
pub struct RequestBuilder<'a> {
    client: &'a ApiClient,
    method: ApiMethod,
    endpoint: String,
    data: Option<Value>,
    query: Vec<(String, String)>,
    error: Option<SellAuthError>,
}

impl<'a> RequestBuilder<'a> {
    /// Create a new request builder.
    pub(crate) fn new(
        client: &'a ApiClient,
        method: ApiMethod,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            client,
            method,
            endpoint: endpoint.into(),
            data: None,
            query: Vec::new(),
            error: None,
        }
    }

    /// Add a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Add multiple query parameters.
    pub fn queries<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (k, v) in params {
            self.query.push((k.into(), v.into()));
        }
        self
    }

    /// Set the request body. Serialization failures surface from `send`.
    pub fn json<T: Serialize + ?Sized>(mut self, json: &T) -> Self {
        match serde_json::to_value(json) {
            Ok(value) => self.data = Some(value),
            Err(e) => self.error = Some(SellAuthError::Serialization(e.to_string())),
        }
        self
    }

    /// Build the URL with query parameters.
    fn build_url(&self) -> Result<url::Url> {
        let raw = format!("{}{}", self.client.config().base_url(), self.endpoint);
        let mut url = url::Url::parse(&raw)
            .map_err(|e| SellAuthError::InvalidUrl(format!("{}: {}", raw, e)))?;

        if !self.query.is_empty() {
            let mut query_pairs = url.query_pairs_mut();
            for (key, value) in &self.query {
                query_pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Send the request and normalize the response.
    pub async fn send(mut self) -> Result<DecodedBody> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }

        let url = self.build_url()?;
        // A null payload is sent as an empty object
        let data = self
            .data
            .take()
            .filter(|data| !data.is_null())
            .unwrap_or_else(|| Value::Object(Default::default()));
        let body =
            serde_json::to_vec(&data).map_err(|e| SellAuthError::Serialization(e.to_string()))?;

        debug!(method = %self.method, url = %url, "Sending SellAuth API request");

        let request = self
            .client
            .inner()
            .request(self.method.as_http(), url)
            .headers(self.client.headers().clone())
            .body(body)
            .build()?;

        let response = match self.client.inner().execute(request).await {
            Ok(response) => Response::from_reqwest(response).await?,
            Err(e) => {
                let err = SellAuthError::from(e);
                warn!(
                    method = %self.method,
                    endpoint = %self.endpoint,
                    error = %err,
                    "SellAuth request failed"
                );
                return Err(err);
            }
        };

        debug!(status = %response.status(), "Received SellAuth API response");

        response.into_result().inspect_err(|err| {
            warn!(
                method = %self.method,
                endpoint = %self.endpoint,
                error = %err,
                "SellAuth API returned an error"
            );
        })
    }

    /// Send the request and deserialize a JSON response into `T`.
    pub async fn send_json<T: serde::de::DeserializeOwned>(self) -> Result<T> {
        self.send().await?.into_json()
    }
}
