//! SellAuth Logging
//!
//! Installs a `tracing` subscriber configured from `SELLAUTH_*` environment
//! variables. The client crates only emit `tracing` events; nothing is
//! printed until an application calls [`init`].
//!
//! # Usage
//!
//! ```rust
//! sellauth_log::init();
//!
//! tracing::info!(shop_id = 42, "Fetching products");
//! ```
//!
//! # Environment Variables
//!
//! - `SELLAUTH_DEBUG=1` - Enable debug logging
//! - `SELLAUTH_LOG_LEVEL=trace|debug|info|warn|error|off` - Set log level
//! - `SELLAUTH_LOG_FORMAT=pretty|json|compact` - Set output format
//! - `SELLAUTH_LOG_COLOR=1|0` - Enable/disable colors
//! - `SELLAUTH_LOG_TIMESTAMPS=1|0` - Include timestamps
//!
//! `RUST_LOG`, when set, takes precedence over the level settings.

use std::env;

use tracing::Subscriber;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, Layer, fmt};

// ============================================================================
// Log Levels
// ============================================================================

/// Minimum level of emitted events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Trace level (most verbose)
    Trace,
    /// Debug level
    Debug,
    /// Info level
    Info,
    /// Warning level
    Warn,
    /// Error level (least verbose)
    Error,
    /// Off (no logging)
    Off,
}

impl Level {
    /// Get level from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Some(Level::Trace),
            "debug" => Some(Level::Debug),
            "info" => Some(Level::Info),
            "warn" | "warning" => Some(Level::Warn),
            "error" => Some(Level::Error),
            "off" | "none" => Some(Level::Off),
            _ => None,
        }
    }

    /// Directive understood by `EnvFilter`.
    pub fn as_directive(&self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Off => "off",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_directive().to_uppercase())
    }
}

// ============================================================================
// Log Format
// ============================================================================

/// Output format for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Multi-line human readable output
    Pretty,
    /// Compact single-line format
    Compact,
    /// JSON format for structured logging
    Json,
}

impl Format {
    /// Get format from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Some(Format::Pretty),
            "compact" => Some(Format::Compact),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Whether debug mode is enabled
    pub debug: bool,
    /// Minimum log level
    pub level: Level,
    /// Output format
    pub format: Format,
    /// Whether colors are enabled
    pub color: bool,
    /// Whether to include timestamps
    pub timestamps: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            debug: false,
            level: Level::Info,
            format: Format::Json,
            color: false,
            timestamps: true,
        }
    }
}

impl LogConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &str| {
            lookup(key).map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        };

        let debug = flag("SELLAUTH_DEBUG").unwrap_or(false);

        let level = lookup("SELLAUTH_LOG_LEVEL")
            .and_then(|s| Level::parse(&s))
            .unwrap_or(if debug { Level::Debug } else { Level::Info });

        let format = lookup("SELLAUTH_LOG_FORMAT")
            .and_then(|s| Format::parse(&s))
            .unwrap_or(Format::Json);

        // NO_COLOR wins over terminal detection but not over an explicit flag
        let color = flag("SELLAUTH_LOG_COLOR")
            .unwrap_or_else(|| lookup("NO_COLOR").is_none() && lookup("TERM").is_some());

        let timestamps = flag("SELLAUTH_LOG_TIMESTAMPS").unwrap_or(true);

        Self {
            debug,
            level,
            format,
            color,
            timestamps,
        }
    }

    /// Filter directive used when `RUST_LOG` is not set.
    pub fn filter_directive(&self) -> &'static str {
        if self.debug && self.level > Level::Debug {
            Level::Debug.as_directive()
        } else {
            self.level.as_directive()
        }
    }
}

// ============================================================================
// Subscriber Installation
// ============================================================================

/// Install the global subscriber using [`LogConfig::from_env`].
///
/// Does nothing if a subscriber is already installed.
pub fn init() {
    let _ = try_init();
}

/// Install the global subscriber, reporting if one already exists.
pub fn try_init() -> Result<(), TryInitError> {
    try_init_with(&LogConfig::from_env())
}

/// Install the global subscriber with an explicit configuration.
pub fn try_init_with(config: &LogConfig) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter_directive()));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer(config))
        .try_init()
}

fn fmt_layer<S>(config: &LogConfig) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let base = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(config.color && config.format != Format::Json);

    match (config.format, config.timestamps) {
        (Format::Json, true) => base.json().boxed(),
        (Format::Json, false) => base.json().without_time().boxed(),
        (Format::Pretty, true) => base.pretty().boxed(),
        (Format::Pretty, false) => base.pretty().without_time().boxed(),
        (Format::Compact, true) => base.compact().boxed(),
        (Format::Compact, false) => base.compact().without_time().boxed(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> LogConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        LogConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_level_ordering() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Off);
    }

    #[test]
    fn test_level_parse() {
        assert_eq!(Level::parse("debug"), Some(Level::Debug));
        assert_eq!(Level::parse("DEBUG"), Some(Level::Debug));
        assert_eq!(Level::parse("warning"), Some(Level::Warn));
        assert_eq!(Level::parse("none"), Some(Level::Off));
        assert_eq!(Level::parse("invalid"), None);
        assert_eq!(Level::Warn.to_string(), "WARN");
    }

    #[test]
    fn test_format_parse() {
        assert_eq!(Format::parse("pretty"), Some(Format::Pretty));
        assert_eq!(Format::parse("Compact"), Some(Format::Compact));
        assert_eq!(Format::parse("json"), Some(Format::Json));
        assert_eq!(Format::parse("xml"), None);
    }

    #[test]
    fn test_defaults_without_variables() {
        let config = config_from(&[]);
        assert!(!config.debug);
        assert_eq!(config.level, Level::Info);
        assert_eq!(config.format, Format::Json);
        assert!(!config.color);
        assert!(config.timestamps);
        assert_eq!(config.filter_directive(), "info");
    }

    #[test]
    fn test_debug_flag_lowers_level() {
        let config = config_from(&[("SELLAUTH_DEBUG", "true")]);
        assert!(config.debug);
        assert_eq!(config.level, Level::Debug);
        assert_eq!(config.filter_directive(), "debug");

        let config = config_from(&[("SELLAUTH_DEBUG", "1"), ("SELLAUTH_LOG_LEVEL", "error")]);
        assert_eq!(config.filter_directive(), "debug");

        let config = config_from(&[("SELLAUTH_DEBUG", "1"), ("SELLAUTH_LOG_LEVEL", "trace")]);
        assert_eq!(config.filter_directive(), "trace");
    }

    #[test]
    fn test_explicit_settings() {
        let config = config_from(&[
            ("SELLAUTH_LOG_LEVEL", "warn"),
            ("SELLAUTH_LOG_FORMAT", "compact"),
            ("SELLAUTH_LOG_COLOR", "0"),
            ("SELLAUTH_LOG_TIMESTAMPS", "false"),
            ("TERM", "xterm"),
        ]);
        assert_eq!(config.level, Level::Warn);
        assert_eq!(config.format, Format::Compact);
        assert!(!config.color);
        assert!(!config.timestamps);
    }

    #[test]
    fn test_color_detection() {
        assert!(config_from(&[("TERM", "xterm-256color")]).color);
        assert!(!config_from(&[("TERM", "xterm"), ("NO_COLOR", "1")]).color);
        assert!(config_from(&[("NO_COLOR", "1"), ("SELLAUTH_LOG_COLOR", "1")]).color);
    }

    #[test]
    fn test_init_is_idempotent() {
        let config = LogConfig {
            format: Format::Compact,
            ..LogConfig::default()
        };
        // Another test may have installed a subscriber first
        let _ = try_init_with(&config);
        assert!(try_init_with(&config).is_err());
        init();

        tracing::info!(shop_id = 1, "subscriber installed");
    }
}
