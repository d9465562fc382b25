//! Settings consumed by the SellAuth client.

use std::fmt;
use std::path::Path;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

use crate::{ConfigManager, ConfigValidator, Result, Validate};

/// Prefix of the environment variables read by [`ClientSettings::from_env`].
pub const ENV_PREFIX: &str = "SELLAUTH";

/// SellAuth API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.sellauth.com";

/// Per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Upper bound accepted for `timeout_secs`.
const MAX_TIMEOUT_SECS: u64 = 300;

/// Client settings loaded from the environment or a file.
///
/// | key            | env variable             | default                    |
/// |----------------|--------------------------|----------------------------|
/// | `api_key`      | `SELLAUTH_API_KEY`       | required                   |
/// | `base_url`     | `SELLAUTH_BASE_URL`      | `https://api.sellauth.com` |
/// | `timeout_secs` | `SELLAUTH_TIMEOUT_SECS`  | `30`                       |
#[derive(Debug, Clone, Deserialize)]
pub struct ClientSettings {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs", deserialize_with = "number_or_string")]
    pub timeout_secs: u64,
}

impl ClientSettings {
    /// Settings for an API key with every other value defaulted.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load from `SELLAUTH_*` variables, after reading `.env` if present.
    pub fn from_env() -> Result<Self> {
        let manager = ConfigManager::with_prefix(ENV_PREFIX);
        manager.load_dotenv(None)?;
        manager.load_validated()
    }

    /// Load from a JSON, TOML or env file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let manager = ConfigManager::new();
        manager.load_file(path)?;
        manager.load_validated()
    }
}

impl Validate for ClientSettings {
    fn validate(&self) -> Result<()> {
        ConfigValidator::not_empty(&self.api_key, "api_key")?;
        ConfigValidator::is_url(&self.base_url, "base_url")?;
        ConfigValidator::in_range(self.timeout_secs, 1, MAX_TIMEOUT_SECS, "timeout_secs")?;
        Ok(())
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Environment values arrive as strings, file values as numbers.
fn number_or_string<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    struct NumberOrString;

    impl Visitor<'_> for NumberOrString {
        type Value = u64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a positive integer or a string containing one")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<u64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<u64, E> {
            u64::try_from(v)
                .map_err(|_| E::custom(format!("expected a positive integer, got {}", v)))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<u64, E> {
            v.trim()
                .parse()
                .map_err(|_| E::custom(format!("expected an integer, got {:?}", v)))
        }
    }

    deserializer.deserialize_any(NumberOrString)
}
