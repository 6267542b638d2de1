//! # Skroutz API Rust client
//!
//! A Rust client for the Skroutz e-commerce REST API, providing type-safe
//! configuration, OAuth2 client-credentials authentication, and per-resource
//! fluent request building with schema-validated responses.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`SkroutzConfig`] and [`SkroutzConfigBuilder`]
//! - Validated newtypes for application credentials and host overrides
//! - OAuth 2.0 Client Credentials token exchange via [`auth::oauth`]
//! - An async HTTP client carrying the versioned `Accept` media type and
//!   bearer token on every request
//! - One resource handle per endpoint group (users, categories, products,
//!   skus, manufacturers, books, shops), each method returning a pending
//!   request that is executed lazily
//!
//! ## Quick Start
//!
//! ```rust
//! use skroutz_api::{SkroutzConfig, ClientId, ClientSecret, ApiVersion};
//!
//! // Create configuration using the builder pattern
//! let config = SkroutzConfig::builder()
//!     .client_id(ClientId::new("your-client-id").unwrap())
//!     .client_secret(ClientSecret::new("your-secret").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Authentication
//!
//! The Skroutz API issues application tokens through the OAuth 2.0 Client
//! Credentials Grant:
//!
//! ```rust,ignore
//! use skroutz_api::auth::oauth::exchange_client_credentials;
//! use skroutz_api::SkroutzClient;
//!
//! // Exchange credentials for a bearer token
//! let session = exchange_client_credentials(&config).await?;
//! let client = SkroutzClient::new(&session, Some(&config));
//!
//! // Or do both in one step
//! let client = SkroutzClient::authorize(&config).await?;
//! ```
//!
//! ## Making API Requests
//!
//! Every resource method builds a pending request; nothing touches the
//! network until `execute()`:
//!
//! ```rust,ignore
//! // Retrieve a category
//! let category = client.categories().get(1442).execute().await?;
//! println!("{}", category.category.name);
//!
//! // Search the SKUs of a category
//! use skroutz_api::api::resources::categories::SkuSearchParams;
//! let params = SkuSearchParams {
//!     q: Some("iphone".into()),
//!     ..Default::default()
//! };
//! let skus = client.categories().get_skus(40, &params).execute().await?;
//!
//! // Update the user's profile
//! use skroutz_api::api::resources::users::UserUpdate;
//! let update = UserUpdate { birthyear: Some(1980), ..Default::default() };
//! client.users().update(&update).execute().await?;
//!
//! // Schema-less endpoints return the raw response
//! let response = client.users().delete_address(48937).execute().await?;
//! assert!(response.is_ok());
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Lazy execution**: Building a request performs no I/O; `execute()`
//!   makes exactly one network call and consumes the descriptor
//! - **Typed responses**: Response bodies are validated against serde models;
//!   a missing required field is an error, never a silent default
//! - **Thread-safe**: All public types are `Send + Sync`
//! - **No hidden behavior**: No retries, no caching, no client-side rate
//!   limiting, no automatic pagination

pub mod api;
pub mod auth;
pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use api::{ApiError, PreparedRequest, RawRequest, SkroutzClient};
pub use auth::{AccessTokenResponse, AuthScopes, Session};
pub use config::{
    ApiHost, ApiVersion, ClientId, ClientSecret, SkroutzConfig, SkroutzConfigBuilder,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, PaginationInfo, RateLimit,
};

// Re-export OAuth types for convenience
pub use auth::oauth::{exchange_client_credentials, OAuthError};
