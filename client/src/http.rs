//! HTTP data types for the API client.
//!
//! # Design
//! Requests and responses are described as plain data. `ApiService` builds
//! an `HttpRequest` from an endpoint and a `RequestOptions`, executes it,
//! and interprets the resulting `HttpResponse`; each step is a separate
//! function, so the request/response contract is testable without a
//! network. All fields use owned types (`String`, `Vec`) so values can be
//! constructed freely in tests and moved between threads.

use std::fmt;

/// HTTP method for a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// Per-request configuration accepted by [`ApiService::request`].
///
/// The default value describes a bare GET: no body, no extra headers.
/// `headers` are merged over the client's default
/// `content-type: application/json`; a caller entry wins when its name
/// collides with the default (names compared case-insensitively).
///
/// `body` must already be serialized; it is sent verbatim for POST and
/// PUT and ignored for GET and DELETE.
///
/// [`ApiService::request`]: crate::client::ApiService::request
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub body: Option<String>,
    pub headers: Vec<(String, String)>,
}

/// An HTTP request described as plain data.
///
/// Produced by [`ApiService::build_request`]; `url` is the full request
/// URL (base URL plus endpoint) and `headers` are already merged.
///
/// [`ApiService::build_request`]: crate::client::ApiService::build_request
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Consumed by [`ApiService::parse_response`]. Transport-level failures
/// never reach this type; a value here means the server answered.
///
/// [`ApiService::parse_response`]: crate::client::ApiService::parse_response
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The `content-type` header value, if present (name matched
    /// case-insensitively).
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_describe_a_bare_get() {
        let options = RequestOptions::default();
        assert_eq!(options.method, HttpMethod::Get);
        assert!(options.body.is_none());
        assert!(options.headers.is_empty());
    }

    #[test]
    fn content_type_lookup_is_case_insensitive() {
        let response = HttpResponse {
            status: 200,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: String::new(),
        };
        assert_eq!(response.content_type(), Some("application/json"));
    }

    #[test]
    fn is_success_covers_the_2xx_range() {
        for (status, expected) in [(199, false), (200, true), (204, true), (299, true), (300, false), (404, false)] {
            let response = HttpResponse {
                status,
                headers: Vec::new(),
                body: String::new(),
            };
            assert_eq!(response.is_success(), expected, "status {status}");
        }
    }
}
