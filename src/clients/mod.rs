//! HTTP client types for Skroutz API communication.
//!
//! This module provides the foundational HTTP layer for making authenticated
//! requests to the Skroutz API. It handles request/response processing and
//! parsing of the informational headers Skroutz attaches to responses.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request descriptor to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PATCH, DELETE)
//! - [`DataType`]: Content types for request bodies
//! - [`RateLimit`] / [`PaginationInfo`]: informational response metadata
//!
//! # Example
//!
//! ```rust,ignore
//! use skroutz_api::{AuthScopes, Session};
//! use skroutz_api::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let session = Session::new("access-token".to_string(), AuthScopes::public(), None);
//! let client = HttpClient::new(&session, None);
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "categories")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Failure Behavior
//!
//! Every call performs exactly one network round trip. Non-2xx responses and
//! network failures are surfaced to the caller as [`HttpError`] without any
//! retry, backoff, or caching.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, CLIENT_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, PaginationInfo, RateLimit};
