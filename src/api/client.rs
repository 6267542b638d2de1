//! The user-facing Skroutz API client.
//!
//! [`SkroutzClient`] wraps the HTTP transport and exposes one accessor per
//! resource group. Resources borrow the client per call and return pending
//! requests; see [`crate::api::request`].

use crate::api::resources::{
    Books, Categories, Manufacturers, Products, Shops, Skus, Users,
};
use crate::auth::oauth::{exchange_client_credentials, OAuthError};
use crate::auth::Session;
use crate::clients::HttpClient;
use crate::config::SkroutzConfig;

/// Client for the Skroutz REST API.
///
/// Owns the transport configuration (base URL, bearer token); resources
/// borrow it per call, so a single client serves any number of fluent call
/// chains.
///
/// # Thread Safety
///
/// `SkroutzClient` is `Send + Sync`; its configuration is read-only after
/// construction.
///
/// # Example
///
/// ```rust,ignore
/// use skroutz_api::{SkroutzClient, SkroutzConfig, ClientId, ClientSecret};
///
/// let config = SkroutzConfig::builder()
///     .client_id(ClientId::new("your-client-id").unwrap())
///     .client_secret(ClientSecret::new("your-secret").unwrap())
///     .build()?;
///
/// // Exchange credentials and build the client in one step
/// let client = SkroutzClient::authorize(&config).await?;
///
/// let profile = client.users().get().execute().await?;
/// println!("Logged in as {}", profile.user.username);
/// ```
#[derive(Debug)]
pub struct SkroutzClient {
    http: HttpClient,
}

// Verify SkroutzClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SkroutzClient>();
};

impl SkroutzClient {
    /// Creates a new client for the given session.
    ///
    /// # Arguments
    ///
    /// * `session` - The session providing the bearer token
    /// * `config` - Optional configuration for host override, API version
    ///   and user agent
    #[must_use]
    pub fn new(session: &Session, config: Option<&SkroutzConfig>) -> Self {
        Self {
            http: HttpClient::new(session, config),
        }
    }

    /// Exchanges application credentials for a token and builds a client.
    ///
    /// Convenience wrapper around
    /// [`exchange_client_credentials`](crate::auth::oauth::exchange_client_credentials)
    /// followed by [`SkroutzClient::new`].
    ///
    /// # Errors
    ///
    /// Returns [`OAuthError`] if the token exchange fails.
    pub async fn authorize(config: &SkroutzConfig) -> Result<Self, OAuthError> {
        let session = exchange_client_credentials(config).await?;
        Ok(Self::new(&session, Some(config)))
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http(&self) -> &HttpClient {
        &self.http
    }

    /// User profile, addresses and account endpoints.
    #[must_use]
    pub const fn users(&self) -> Users<'_> {
        Users::new(self)
    }

    /// Category tree endpoints.
    #[must_use]
    pub const fn categories(&self) -> Categories<'_> {
        Categories::new(self)
    }

    /// Product (shop offering) endpoints.
    #[must_use]
    pub const fn products(&self) -> Products<'_> {
        Products::new(self)
    }

    /// SKU (aggregated product) endpoints.
    #[must_use]
    pub const fn skus(&self) -> Skus<'_> {
        Skus::new(self)
    }

    /// Manufacturer endpoints.
    #[must_use]
    pub const fn manufacturers(&self) -> Manufacturers<'_> {
        Manufacturers::new(self)
    }

    /// Book, author and publisher endpoints.
    #[must_use]
    pub const fn books(&self) -> Books<'_> {
        Books::new(self)
    }

    /// Shop endpoints.
    #[must_use]
    pub const fn shops(&self) -> Shops<'_> {
        Shops::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthScopes;
    use crate::config::{ApiHost, ClientId, ClientSecret};

    fn test_session() -> Session {
        Session::new("token".to_string(), AuthScopes::public(), None)
    }

    #[test]
    fn test_client_construction_with_default_host() {
        let client = SkroutzClient::new(&test_session(), None);
        assert_eq!(client.http().base_uri(), "https://api.skroutz.gr");
    }

    #[test]
    fn test_client_construction_with_host_override() {
        let config = SkroutzConfig::builder()
            .client_id(ClientId::new("id").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap())
            .api_host(ApiHost::new("http://127.0.0.1:4321").unwrap())
            .build()
            .unwrap();

        let client = SkroutzClient::new(&test_session(), Some(&config));
        assert_eq!(client.http().base_uri(), "http://127.0.0.1:4321");
    }

    #[test]
    fn test_resource_accessors_share_the_client() {
        let client = SkroutzClient::new(&test_session(), None);

        // Several resource handles can coexist on one borrowed client.
        let _users = client.users();
        let _categories = client.categories();
        let _skus = client.skus();
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SkroutzClient>();
    }
}
