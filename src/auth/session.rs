//! Session management for Skroutz API authentication.
//!
//! This module provides the [`Session`] type for representing the
//! authenticated state used in API calls, plus the wire format of the token
//! endpoint response it is built from.

use crate::auth::AuthScopes;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// The raw response body of the OAuth2 token endpoint.
///
/// ```json
/// {
///   "access_token": "ab12…",
///   "token_type": "bearer",
///   "expires_in": 15552000,
///   "scope": "public"
/// }
/// ```
#[derive(Clone, Debug, Deserialize)]
pub struct AccessTokenResponse {
    /// The bearer token to attach to API requests.
    pub access_token: String,
    /// The token type; Skroutz always issues `bearer`.
    pub token_type: String,
    /// Seconds until the token expires, if the server reports it.
    pub expires_in: Option<i64>,
    /// Space- or comma-separated scopes granted to the token.
    pub scope: Option<AuthScopes>,
}

/// Represents an authenticated session for Skroutz API calls.
///
/// Sessions hold the bearer token and its metadata. They are immutable after
/// creation; when a token expires the application requests a new session.
///
/// # Thread Safety
///
/// `Session` is `Send + Sync`, making it safe to share across threads.
///
/// # Example
///
/// ```rust
/// use skroutz_api::{AuthScopes, Session};
///
/// let session = Session::new(
///     "access-token".to_string(),
///     AuthScopes::public(),
///     None, // no expiration
/// );
///
/// assert!(session.is_active());
/// assert!(!session.expired());
///
/// // Sessions can be serialized for storage
/// let json = serde_json::to_string(&session).unwrap();
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    /// The access token for API authentication.
    pub access_token: String,

    /// The OAuth scopes granted to this session.
    pub scopes: AuthScopes,

    /// When this session expires, if applicable.
    pub expires: Option<DateTime<Utc>>,
}

impl Session {
    /// Creates a new session with the specified parameters.
    #[must_use]
    pub const fn new(
        access_token: String,
        scopes: AuthScopes,
        expires: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            access_token,
            scopes,
            expires,
        }
    }

    /// Builds a session from a token endpoint response.
    ///
    /// `expires_in` is converted to an absolute expiry timestamp; a missing
    /// `scope` falls back to `public`, which is what the server grants to
    /// client-credentials tokens.
    #[must_use]
    pub fn from_access_token_response(response: &AccessTokenResponse) -> Self {
        let expires = response
            .expires_in
            .map(|secs| Utc::now() + Duration::seconds(secs));

        Self {
            access_token: response.access_token.clone(),
            scopes: response.scope.clone().unwrap_or_else(AuthScopes::public),
            expires,
        }
    }

    /// Returns `true` if this session has expired.
    ///
    /// Sessions without an expiration time are considered never expired.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.expires.is_some_and(|expires| Utc::now() > expires)
    }

    /// Returns `true` if this session is active (not expired and has a token).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.access_token.is_empty() && !self.expired()
    }
}

// Verify Session is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};
