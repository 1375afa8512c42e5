//! REST client for the todo-list API.
//!
//! # Design
//! `ApiService` holds a base URL and a ureq agent and carries no other
//! state between calls. The generic [`request`] operation is a composition
//! of three steps: [`build_request`] (pure URL join and header merge), an
//! HTTP round-trip, and [`parse_response`] (pure status and content-type
//! interpretation). The build/parse pair is public so the
//! request/response contract can be exercised without a network; only the
//! round-trip in the middle touches I/O.
//!
//! Todos and lists are opaque JSON at this layer. The ten resource
//! operations pick a path and a method, serialize the caller's payload
//! verbatim, and delegate to [`request`]; the backend is the sole judge
//! of payload shape.
//!
//! [`request`]: ApiService::request
//! [`build_request`]: ApiService::build_request
//! [`parse_response`]: ApiService::parse_response

use serde::Serialize;
use serde_json::Value;

use crate::error::RequestError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, RequestOptions};

/// Base URL used by [`ApiService::from_env`] when `API_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Client for the todo-list REST API.
#[derive(Clone)]
pub struct ApiService {
    base_url: String,
    agent: ureq::Agent,
}

impl std::fmt::Debug for ApiService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiService")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiService {
    /// Create a client for the given base URL (e.g.
    /// `http://localhost:8080/api`). A trailing slash is stripped;
    /// endpoints supply their own leading slash.
    pub fn new(base_url: &str) -> Self {
        // Non-2xx responses are data here, not transport errors: status
        // interpretation belongs to parse_response.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent,
        }
    }

    /// Create a client from the `API_BASE_URL` environment variable,
    /// falling back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(&base_url)
    }

    /// Issue a request against `endpoint` (a non-empty path relative to
    /// the base URL, with leading slash) and interpret the response.
    ///
    /// Returns `Ok(Some(value))` for a 2xx response with a JSON body,
    /// `Ok(None)` for a 2xx response without one; callers must not
    /// assume a body is present. Non-2xx responses and transport failures
    /// become a single [`RequestError`] per the failure contract.
    pub fn request(
        &self,
        endpoint: &str,
        options: &RequestOptions,
    ) -> Result<Option<Value>, RequestError> {
        let request = self.build_request(endpoint, options);
        log::debug!("{} {}", request.method, request.url);
        let response = self.execute(request)?;
        self.parse_response(response)
    }

    /// Build the full request for `endpoint`: concatenate the base URL
    /// and merge the caller's headers over the default
    /// `content-type: application/json`. Caller entries win on
    /// case-insensitive name collision; non-colliding defaults remain.
    pub fn build_request(&self, endpoint: &str, options: &RequestOptions) -> HttpRequest {
        let mut headers = vec![("content-type".to_string(), "application/json".to_string())];
        for (name, value) in &options.headers {
            match headers.iter_mut().find(|(n, _)| n.eq_ignore_ascii_case(name)) {
                Some(existing) => existing.1 = value.clone(),
                None => headers.push((name.clone(), value.clone())),
            }
        }
        HttpRequest {
            method: options.method.clone(),
            url: format!("{}{}", self.base_url, endpoint),
            headers,
            body: options.body.clone(),
        }
    }

    /// Interpret a response per the success/failure contract.
    ///
    /// 2xx with a content-type containing `application/json` parses the
    /// body; 2xx otherwise is an absent value. Non-2xx extracts the
    /// backend's `error` field when the body has one, else reports the
    /// numeric status.
    pub fn parse_response(&self, response: HttpResponse) -> Result<Option<Value>, RequestError> {
        log::debug!("response status {}", response.status);

        if !response.is_success() {
            log::error!(
                "request failed with status {}: {}",
                response.status,
                response.body
            );
            return Err(RequestError::from_response(response.status, &response.body));
        }

        let is_json = response
            .content_type()
            .is_some_and(|value| value.contains("application/json"));
        if !is_json {
            return Ok(None);
        }

        serde_json::from_str(&response.body)
            .map(Some)
            .map_err(|e| RequestError::new(format!("invalid JSON response: {e}")))
    }

    /// Execute the round-trip, mapping transport failures into the same
    /// error kind as HTTP-level failures.
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, RequestError> {
        let transport_error = |e: ureq::Error| RequestError::new(format!("request failed: {e}"));

        let result = match (&request.method, &request.body) {
            (HttpMethod::Get, _) => {
                let mut call = self.agent.get(&request.url);
                for (name, value) in &request.headers {
                    call = call.header(name.as_str(), value.as_str());
                }
                call.call()
            }
            (HttpMethod::Delete, _) => {
                let mut call = self.agent.delete(&request.url);
                for (name, value) in &request.headers {
                    call = call.header(name.as_str(), value.as_str());
                }
                call.call()
            }
            (HttpMethod::Post, body) => {
                let mut call = self.agent.post(&request.url);
                for (name, value) in &request.headers {
                    call = call.header(name.as_str(), value.as_str());
                }
                match body {
                    Some(body) => call.send(body.as_bytes()),
                    None => call.send_empty(),
                }
            }
            (HttpMethod::Put, body) => {
                let mut call = self.agent.put(&request.url);
                for (name, value) in &request.headers {
                    call = call.header(name.as_str(), value.as_str());
                }
                match body {
                    Some(body) => call.send(body.as_bytes()),
                    None => call.send_empty(),
                }
            }
        };

        let mut response = result.map_err(transport_error)?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(transport_error)?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }

    // Todo operations.

    pub fn get_todos(&self) -> Result<Option<Value>, RequestError> {
        self.request("/todos", &RequestOptions::default())
    }

    pub fn get_todo(&self, id: &str) -> Result<Option<Value>, RequestError> {
        self.request(&format!("/todos/{id}"), &RequestOptions::default())
    }

    pub fn create_todo<T: Serialize>(&self, todo: &T) -> Result<Option<Value>, RequestError> {
        self.request("/todos", &json_options(HttpMethod::Post, todo)?)
    }

    pub fn update_todo<T: Serialize>(
        &self,
        id: &str,
        todo: &T,
    ) -> Result<Option<Value>, RequestError> {
        self.request(&format!("/todos/{id}"), &json_options(HttpMethod::Put, todo)?)
    }

    pub fn delete_todo(&self, id: &str) -> Result<Option<Value>, RequestError> {
        let options = RequestOptions {
            method: HttpMethod::Delete,
            ..RequestOptions::default()
        };
        self.request(&format!("/todos/{id}"), &options)
    }

    // List operations.

    pub fn get_lists(&self) -> Result<Option<Value>, RequestError> {
        self.request("/lists", &RequestOptions::default())
    }

    pub fn get_list(&self, id: &str) -> Result<Option<Value>, RequestError> {
        self.request(&format!("/lists/{id}"), &RequestOptions::default())
    }

    pub fn create_list<T: Serialize>(&self, list: &T) -> Result<Option<Value>, RequestError> {
        self.request("/lists", &json_options(HttpMethod::Post, list)?)
    }

    pub fn update_list<T: Serialize>(
        &self,
        id: &str,
        list: &T,
    ) -> Result<Option<Value>, RequestError> {
        self.request(&format!("/lists/{id}"), &json_options(HttpMethod::Put, list)?)
    }

    pub fn delete_list(&self, id: &str) -> Result<Option<Value>, RequestError> {
        let options = RequestOptions {
            method: HttpMethod::Delete,
            ..RequestOptions::default()
        };
        self.request(&format!("/lists/{id}"), &options)
    }
}

/// Options for a write operation: the payload serialized as the body.
fn json_options<T: Serialize>(
    method: HttpMethod,
    payload: &T,
) -> Result<RequestOptions, RequestError> {
    let body = serde_json::to_string(payload)
        .map_err(|e| RequestError::new(format!("serialization failed: {e}")))?;
    Ok(RequestOptions {
        method,
        body: Some(body),
        headers: Vec::new(),
    })
}
