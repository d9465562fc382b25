// Environment variable loading

use crate::{ConfigError, Result};
use std::collections::HashMap;
use std::env;

/// Environment variable loader
pub struct EnvLoader {
    prefix: Option<String>,
}

impl EnvLoader {
    /// Create a new environment loader
    pub fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    /// Load environment variables as lowercase keys.
    ///
    /// With a prefix, only `PREFIX_*` variables are kept and the prefix is
    /// dropped: `SELLAUTH_API_KEY` becomes `api_key`.
    pub fn load(&self) -> Result<HashMap<String, String>> {
        let mut config = HashMap::new();

        for (key, value) in env::vars() {
            match self.prefix {
                Some(ref prefix) => {
                    if let Some(rest) = key
                        .strip_prefix(prefix.as_str())
                        .and_then(|rest| rest.strip_prefix('_'))
                    {
                        config.insert(rest.to_lowercase(), value);
                    }
                }
                None => {
                    config.insert(key.to_lowercase(), value);
                }
            }
        }

        Ok(config)
    }

    /// Load a specific environment variable
    pub fn load_var(&self, key: &str) -> Result<String> {
        let full_key = if let Some(ref prefix) = self.prefix {
            format!("{}_{}", prefix, key.to_uppercase())
        } else {
            key.to_uppercase()
        };

        env::var(&full_key).map_err(ConfigError::EnvError)
    }
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_loader_missing_var() {
        let loader = EnvLoader::new(Some("SELLAUTH_UNIT".to_string()));
        let result = loader.load_var("MISSING_VAR_67890");

        assert!(matches!(result, Err(ConfigError::EnvError(_))));
    }

    #[test]
    fn test_prefixed_load_skips_other_variables() {
        unsafe {
            std::env::set_var("SELLAUTHUNITX_LEAK", "no");
            std::env::set_var("SELLAUTHUNIT_TIMEOUT_SECS", "12");
        }

        let loader = EnvLoader::new(Some("SELLAUTHUNIT".to_string()));
        let vars = loader.load().unwrap();

        assert_eq!(vars.get("timeout_secs").map(String::as_str), Some("12"));
        assert!(!vars.keys().any(|k| k.contains("leak")));

        unsafe {
            std::env::remove_var("SELLAUTHUNITX_LEAK");
            std::env::remove_var("SELLAUTHUNIT_TIMEOUT_SECS");
        }
    }
}
