use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body returned by the REST service, e.g. `{"detail": "User not found"}`.
///
/// `detail` is usually a string, but request-validation failures carry a
/// structured list instead.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ErrorResponse {
    /// Raw `detail` value as sent by the service.
    #[serde(default)]
    pub detail: Value,
}

impl ErrorResponse {
    /// Creates an error response with a plain string detail.
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: Value::String(detail.into()),
        }
    }

    /// Parses an error body, returning `None` when it is not the service's shape.
    #[must_use]
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    /// The human-readable message, when `detail` is a non-empty string.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match &self.detail {
            Value::String(text) if !text.trim().is_empty() => Some(text.as_str()),
            _ => None,
        }
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.message() {
            Some(message) => write!(f, "{message}"),
            None => write!(f, "{}", self.detail),
        }
    }
}

impl std::error::Error for ErrorResponse {}
