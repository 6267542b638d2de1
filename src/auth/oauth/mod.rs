//! OAuth 2.0 token acquisition for the Skroutz API.
//!
//! The only application-level flow Skroutz offers is the Client Credentials
//! Grant, implemented in [`exchange_client_credentials`]. The resulting
//! [`Session`](crate::auth::Session) is what the HTTP client authenticates
//! with.

mod client_credentials;
mod error;

pub use client_credentials::exchange_client_credentials;
pub use error::OAuthError;
