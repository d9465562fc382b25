//! SellAuth client error types.

use thiserror::Error;

/// Result type for SellAuth client operations.
pub type Result<T> = std::result::Result<T, SellAuthError>;

/// SellAuth client errors.
#[derive(Debug, Error)]
pub enum SellAuthError {
    /// The client could not be constructed from the given configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP verb outside of GET, POST, PUT and DELETE.
    #[error("Unsupported HTTP method: {0}")]
    InvalidMethod(String),

    /// Base URL and endpoint did not form a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Request payload could not be encoded as JSON.
    #[error("Failed to serialize request body: {0}")]
    Serialization(String),

    /// The request never produced an HTTP response.
    #[error("Request error: {message}")]
    Transport {
        /// Transport-level error description.
        message: String,
        /// Whether the transport gave up because the timeout elapsed.
        timeout: bool,
    },

    /// The server answered with a 4xx or 5xx status.
    #[error("HTTP {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// `message` field of the error body, or the raw body text.
        message: String,
    },

    /// A decoded body did not match the requested type.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl SellAuthError {
    /// Check if the request failed before a response was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Check if this is a timeout error.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport { timeout: true, .. })
    }

    /// Check if the server rejected the request with an error status.
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }

    /// Get the HTTP status code if this is a status error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Get the message reported by the API for a status error.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => Some(message),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SellAuthError {
    fn from(err: reqwest::Error) -> Self {
        let timeout = err.is_timeout();

        // reqwest keeps the useful part (refused, dns, ...) in the source chain
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }

        Self::Transport { message, timeout }
    }
}

impl From<sellauth_config::ConfigError> for SellAuthError {
    fn from(err: sellauth_config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
