//! Top-level client with every resource module attached.

use serde_json::Value;
use sellauth_config::ClientSettings;

use crate::resources::{
    Blacklist, Categories, Checkout, Coupons, Customers, Invoices, Products, Resource, Shops,
};
use crate::{ApiClient, ApiMethod, ClientConfig, DecodedBody, RequestBuilder, Result};

/// SellAuth API client.
///
/// Construction validates the configuration and attaches one instance of
/// every registered resource module, each sharing this client's dispatcher.
#[derive(Debug, Clone)]
pub struct SellAuthClient {
    api: ApiClient,
    pub shops: Shops,
    pub products: Products,
    pub invoices: Invoices,
    pub checkout: Checkout,
    pub coupons: Coupons,
    pub customers: Customers,
    pub blacklist: Blacklist,
    pub categories: Categories,
}

impl SellAuthClient {
    /// Names of the attached resource modules, in registry order.
    pub const RESOURCES: &'static [&'static str] = &[
        Shops::NAME,
        Products::NAME,
        Invoices::NAME,
        Checkout::NAME,
        Coupons::NAME,
        Customers::NAME,
        Blacklist::NAME,
        Categories::NAME,
    ];

    /// Create a client for the default base URL.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::from_config(ClientConfig::new(api_key)?)
    }

    /// Create a client for a custom base URL.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        Self::from_config(
            ClientConfig::builder()
                .api_key(api_key)
                .base_url(base_url)
                .build()?,
        )
    }

    /// Create a client from `SELLAUTH_*` environment variables and `.env`.
    pub fn from_env() -> Result<Self> {
        Self::from_settings(ClientSettings::from_env()?)
    }

    /// Create a client from loaded settings.
    pub fn from_settings(settings: ClientSettings) -> Result<Self> {
        Self::from_config(ClientConfig::from_settings(settings)?)
    }

    /// Create a client from a configuration.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let api = ApiClient::new(config)?;

        Ok(Self {
            shops: Shops::new(api.clone()),
            products: Products::new(api.clone()),
            invoices: Invoices::new(api.clone()),
            checkout: Checkout::new(api.clone()),
            coupons: Coupons::new(api.clone()),
            customers: Customers::new(api.clone()),
            blacklist: Blacklist::new(api.clone()),
            categories: Categories::new(api.clone()),
            api,
        })
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        self.api.config()
    }

    /// Get the shared dispatcher.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Send one request and normalize its outcome.
    ///
    /// See [`ApiClient::request`]. A URL that cannot be built is reported
    /// before anything is sent.
    ///
    /// # Example
    ///
    /// ```
    /// use sellauth_client::{ApiMethod, SellAuthClient, SellAuthError};
    ///
    /// # tokio_test::block_on(async {
    /// let client = SellAuthClient::with_base_url("sk_test", "not a url").unwrap();
    ///
    /// let err = client
    ///     .request(ApiMethod::Get, "/v1/shops", None, None)
    ///     .await
    ///     .unwrap_err();
    /// assert!(matches!(err, SellAuthError::InvalidUrl(_)));
    /// # });
    /// ```
    pub async fn request(
        &self,
        method: ApiMethod,
        endpoint: &str,
        data: Option<&Value>,
        params: Option<&[(&str, &str)]>,
    ) -> Result<DecodedBody> {
        self.api.request(method, endpoint, data, params).await
    }

    /// Create a GET request builder.
    pub fn get(&self, endpoint: impl Into<String>) -> RequestBuilder<'_> {
        self.api.get(endpoint)
    }

    /// Create a POST request builder.
    pub fn post(&self, endpoint: impl Into<String>) -> RequestBuilder<'_> {
        self.api.post(endpoint)
    }

    /// Create a PUT request builder.
    pub fn put(&self, endpoint: impl Into<String>) -> RequestBuilder<'_> {
        self.api.put(endpoint)
    }

    /// Create a DELETE request builder.
    pub fn delete(&self, endpoint: impl Into<String>) -> RequestBuilder<'_> {
        self.api.delete(endpoint)
    }
}
