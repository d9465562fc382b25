//! Client configuration.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use sellauth_config::{ClientSettings, DEFAULT_TIMEOUT_SECS};

use crate::{Result, SellAuthError};

pub use sellauth_config::DEFAULT_BASE_URL;

/// Per-request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

/// Immutable client configuration.
///
/// Built once and shared read-only by every handle cloned from the client.
#[derive(Debug)]
pub struct ClientConfig {
    api_key: SecretString,
    base_url: String,
    timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration for the default base URL.
    ///
    /// Fails if the API key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a new configuration builder.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Build a configuration from loaded settings.
    pub fn from_settings(settings: ClientSettings) -> Result<Self> {
        Self::builder()
            .api_key(settings.api_key)
            .base_url(settings.base_url)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
    }

    /// The bearer token sent with every request.
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl ClientConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the base URL. Trailing slashes are stripped on build.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<ClientConfig> {
        let api_key = match self.api_key {
            Some(key) if !key.trim().is_empty() => key,
            _ => return Err(SellAuthError::Config("API key is required".to_string())),
        };

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(ClientConfig {
            api_key: SecretString::from(api_key),
            base_url,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("sk_test").unwrap();
        assert_eq!(config.api_key(), "sk_test");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_empty_api_key_rejected() {
        assert!(matches!(
            ClientConfig::new(""),
            Err(SellAuthError::Config(_))
        ));
        assert!(matches!(
            ClientConfig::new("   "),
            Err(SellAuthError::Config(_))
        ));
        assert!(matches!(
            ClientConfig::builder().build(),
            Err(SellAuthError::Config(_))
        ));
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let config = ClientConfig::builder()
            .api_key("sk_test")
            .base_url("https://api.example.com/")
            .build()
            .unwrap();
        assert_eq!(config.base_url(), "https://api.example.com");

        let config = ClientConfig::builder()
            .api_key("sk_test")
            .base_url("http://localhost:8080//")
            .build()
            .unwrap();
        assert_eq!(config.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_from_settings() {
        let settings = ClientSettings {
            api_key: "sk_live".to_string(),
            base_url: "https://sandbox.sellauth.com/".to_string(),
            timeout_secs: 5,
        };

        let config = ClientConfig::from_settings(settings).unwrap();
        assert_eq!(config.base_url(), "https://sandbox.sellauth.com");
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ClientConfig::new("sk_very_secret").unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("sk_very_secret"));
    }
}
