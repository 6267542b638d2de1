//! The resource layer: fluent request building and lazy execution.
//!
//! This module is the heart of the crate. Every API operation follows the
//! same pipeline:
//!
//! 1. A resource method on a handle from [`resources`] assembles an
//!    immutable request descriptor — no I/O happens here.
//! 2. The returned [`PreparedRequest`] (or [`RawRequest`] for schema-less
//!    endpoints) is executed with `.execute().await`, which performs exactly
//!    one network call and consumes the descriptor.
//! 3. The response body is validated against the declared model; shape
//!    mismatches surface as [`ApiError::Validation`], transport failures as
//!    [`ApiError::Http`].
//!
//! # Example
//!
//! ```rust,ignore
//! use skroutz_api::{SkroutzClient, SkroutzConfig, ClientId, ClientSecret};
//!
//! let config = SkroutzConfig::builder()
//!     .client_id(ClientId::new("id")?)
//!     .client_secret(ClientSecret::new("secret")?)
//!     .build()?;
//!
//! let client = SkroutzClient::authorize(&config).await?;
//!
//! // Chained form
//! let sku = client.skus().get(3_783_654).execute().await?;
//!
//! // Equivalent split form: the descriptor is inert until executed
//! let pending = client.skus().get(3_783_654);
//! let sku = pending.execute().await?;
//! ```

mod client;
mod errors;
mod request;

pub mod resources;

pub use client::SkroutzClient;
pub use errors::ApiError;
pub use request::{PreparedRequest, RawRequest};
