//! Error type for the API client.
//!
//! # Design
//! Every failure is a `RequestError` carrying a single human-readable
//! message: the backend's structured `error` field when one is present,
//! otherwise a line naming the HTTP status or the transport error.
//! Transport and HTTP-status failures are deliberately not distinguished;
//! the view layer only ever displays the message.

use std::fmt;

use serde::Deserialize;

/// The backend's error body shape: `{ "error": "..." }`.
///
/// Declared explicitly so the client/backend coupling is visible. Bodies
/// missing the field (or not JSON at all) fall back to a status-code
/// message.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// A failed API call: non-2xx response, unreadable body, or transport
/// failure. The three are deliberately not distinguished.
#[derive(Debug)]
pub struct RequestError {
    message: String,
}

impl RequestError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error for a non-2xx response from its status and body.
    ///
    /// A non-empty `error` field in the body becomes the message; anything
    /// else falls back to a message containing the numeric status.
    pub(crate) fn from_response(status: u16, body: &str) -> Self {
        let backend_message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.error)
            .filter(|message| !message.is_empty());
        Self {
            message: backend_message.unwrap_or_else(|| format!("HTTP error: status {status}")),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for RequestError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_error_field_becomes_the_message() {
        let err = RequestError::from_response(404, r#"{"error":"Todo not found"}"#);
        assert_eq!(err.message(), "Todo not found");
    }

    #[test]
    fn unparsable_body_falls_back_to_status() {
        let err = RequestError::from_response(500, "Internal Server Error");
        assert_eq!(err.message(), "HTTP error: status 500");
    }

    #[test]
    fn missing_error_field_falls_back_to_status() {
        let err = RequestError::from_response(502, r#"{"message":"bad gateway"}"#);
        assert_eq!(err.message(), "HTTP error: status 502");
    }

    #[test]
    fn empty_error_field_falls_back_to_status() {
        let err = RequestError::from_response(400, r#"{"error":""}"#);
        assert_eq!(err.message(), "HTTP error: status 400");
    }
}
