//! Frontend core for the todo-list application.
//!
//! # Overview
//! Two independent pieces, both consumed by application views:
//!
//! - [`routes`]: resolves a navigated path to one of four view bindings,
//!   extracting the list id from `/list/{id}`.
//! - [`client`]: `ApiService`, a REST client over the backend's `/todos`
//!   and `/lists` resources, one generic `request` operation plus ten
//!   thin CRUD wrappers that delegate to it.
//!
//! # Design
//! - `ApiService` holds only a base URL and an HTTP agent; concurrent
//!   calls are independent and there is no retry, caching, or
//!   cancellation.
//! - The request/response contract lives in the pure `build_request` /
//!   `parse_response` pair, so it is testable without a network; the
//!   `request` operation wraps the HTTP round-trip around them.
//! - Payloads are opaque JSON here. [`types`] offers DTOs mirroring the
//!   backend schema for callers who want them; integration tests against
//!   the mock server catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod routes;
pub mod types;

pub use client::{ApiService, DEFAULT_BASE_URL};
pub use error::{ErrorBody, RequestError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, RequestOptions};
pub use routes::Route;
pub use types::{CreateList, CreateTodo, List, Todo, UpdateList, UpdateTodo};
