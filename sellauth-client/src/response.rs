//! Response capture and body normalization.

use bytes::Bytes;
use http::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{Result, SellAuthError};

/// Body of a successful response.
///
/// JSON bodies are decoded; anything else is kept as text.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedBody {
    /// Body parsed as JSON.
    Structured(Value),
    /// Body that was not valid JSON.
    Raw(String),
}

impl DecodedBody {
    /// Decode a body, falling back to its text when it is not JSON.
    pub fn decode(body: &[u8]) -> Self {
        match serde_json::from_slice(body) {
            Ok(value) => Self::Structured(value),
            Err(_) => Self::Raw(String::from_utf8_lossy(body).into_owned()),
        }
    }

    /// Check if the body was decoded as JSON.
    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Structured(_))
    }

    /// Get the decoded JSON value, if any.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Structured(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    /// Get the raw text, if the body was not JSON.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Structured(_) => None,
            Self::Raw(text) => Some(text),
        }
    }

    /// Deserialize a structured body into `T`.
    ///
    /// Raw bodies are rejected with [`SellAuthError::Decode`].
    pub fn into_json<T: DeserializeOwned>(self) -> Result<T> {
        match self {
            Self::Structured(value) => {
                serde_json::from_value(value).map_err(|e| SellAuthError::Decode(e.to_string()))
            }
            Self::Raw(text) => Err(SellAuthError::Decode(format!(
                "expected a JSON body, got text: {}",
                text
            ))),
        }
    }
}

/// Status and body of a fully read HTTP response.
#[derive(Debug)]
pub struct Response {
    status: StatusCode,
    body: Bytes,
}

impl Response {
    /// Read a reqwest response to completion.
    pub(crate) async fn from_reqwest(response: reqwest::Response) -> Result<Self> {
        let status = response.status();
        let body = response.bytes().await?;

        Ok(Self { status, body })
    }

    /// Get the status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Check if the response counts as a success.
    ///
    /// Anything that is not a 4xx or 5xx status is accepted.
    pub fn is_success(&self) -> bool {
        !(self.status.is_client_error() || self.status.is_server_error())
    }

    /// Get the response body as text.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Normalize into a decoded body or a status error.
    pub fn into_result(self) -> Result<DecodedBody> {
        if self.is_success() {
            return Ok(DecodedBody::decode(&self.body));
        }

        Err(SellAuthError::Status {
            status: self.status.as_u16(),
            message: self.error_message(),
        })
    }

    /// `message` field of a JSON error body, or the raw text if it is missing or null.
    fn error_message(&self) -> String {
        match serde_json::from_slice::<Value>(&self.body) {
            Ok(Value::Object(map)) => match map.get("message") {
                Some(Value::String(message)) => message.clone(),
                Some(Value::Null) | None => self.text(),
                Some(other) => other.to_string(),
            },
            _ => self.text(),
        }
    }
}
