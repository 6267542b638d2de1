//! Authentication types for the Skroutz API.
//!
//! This module provides:
//!
//! - [`Session`]: the bearer token and its metadata, attached to every request
//! - [`AuthScopes`]: the OAuth scope set granted to a token
//! - [`oauth`]: the client-credentials token exchange

pub mod oauth;

mod scopes;
mod session;

pub use scopes::AuthScopes;
pub use session::{AccessTokenResponse, Session};
