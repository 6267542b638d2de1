//! Configuration types for the Skroutz API client.
//!
//! This module provides the core configuration types used to initialize
//! and configure the client for API communication with Skroutz.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`SkroutzConfig`]: The main configuration struct holding all client settings
//! - [`SkroutzConfigBuilder`]: A builder for constructing [`SkroutzConfig`] instances
//! - [`ClientId`]: A validated application id newtype
//! - [`ClientSecret`]: A validated application secret newtype with masked debug output
//! - [`ApiHost`]: A validated host URL for API/auth host overrides
//! - [`ApiVersion`]: The Skroutz API version to negotiate via the `Accept` header
//!
//! # Example
//!
//! ```rust
//! use skroutz_api::{SkroutzConfig, ClientId, ClientSecret, ApiVersion};
//!
//! let config = SkroutzConfig::builder()
//!     .client_id(ClientId::new("my-client-id").unwrap())
//!     .client_secret(ClientSecret::new("my-secret").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{ApiHost, ClientId, ClientSecret};
pub use version::ApiVersion;

use crate::auth::AuthScopes;
use crate::error::ConfigError;

/// Default host serving the REST API.
pub const DEFAULT_API_HOST: &str = "https://api.skroutz.gr";

/// Default host serving the OAuth2 token endpoint.
pub const DEFAULT_AUTH_HOST: &str = "https://www.skroutz.gr";

/// Configuration for the Skroutz API client.
///
/// This struct holds all configuration needed for client operations,
/// including application credentials, OAuth scopes, and API version settings.
///
/// # Thread Safety
///
/// `SkroutzConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Host Overrides
///
/// The `api_host` and `auth_host` fields override the production hosts.
/// They exist for staging environments and for pointing the client at a
/// local mock server in tests.
///
/// # Example
///
/// ```rust
/// use skroutz_api::{SkroutzConfig, ClientId, ClientSecret};
///
/// let config = SkroutzConfig::builder()
///     .client_id(ClientId::new("your-client-id").unwrap())
///     .client_secret(ClientSecret::new("your-secret").unwrap())
///     .scopes("public".parse().unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.client_id().as_ref(), "your-client-id");
/// ```
#[derive(Clone, Debug)]
pub struct SkroutzConfig {
    client_id: ClientId,
    client_secret: ClientSecret,
    scopes: AuthScopes,
    api_host: Option<ApiHost>,
    auth_host: Option<ApiHost>,
    api_version: ApiVersion,
    user_agent_prefix: Option<String>,
}

impl SkroutzConfig {
    /// Creates a new builder for constructing a `SkroutzConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use skroutz_api::{SkroutzConfig, ClientId, ClientSecret};
    ///
    /// let config = SkroutzConfig::builder()
    ///     .client_id(ClientId::new("id").unwrap())
    ///     .client_secret(ClientSecret::new("secret").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> SkroutzConfigBuilder {
        SkroutzConfigBuilder::new()
    }

    /// Returns the application id.
    #[must_use]
    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Returns the application secret.
    #[must_use]
    pub const fn client_secret(&self) -> &ClientSecret {
        &self.client_secret
    }

    /// Returns the OAuth scopes requested during token exchange.
    #[must_use]
    pub const fn scopes(&self) -> &AuthScopes {
        &self.scopes
    }

    /// Returns the API host override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&ApiHost> {
        self.api_host.as_ref()
    }

    /// Returns the auth host override, if configured.
    #[must_use]
    pub const fn auth_host(&self) -> Option<&ApiHost> {
        self.auth_host.as_ref()
    }

    /// Returns the API base URI: the configured override or the production host.
    #[must_use]
    pub fn api_base_uri(&self) -> &str {
        self.api_host.as_ref().map_or(DEFAULT_API_HOST, ApiHost::as_ref)
    }

    /// Returns the auth base URI: the configured override or the production host.
    #[must_use]
    pub fn auth_base_uri(&self) -> &str {
        self.auth_host
            .as_ref()
            .map_or(DEFAULT_AUTH_HOST, ApiHost::as_ref)
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify SkroutzConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SkroutzConfig>();
};

/// Builder for constructing [`SkroutzConfig`] instances.
///
/// This builder provides a fluent API for configuring the client. Required
/// fields are `client_id` and `client_secret`. All other fields have
/// sensible defaults.
///
/// # Defaults
///
/// - `api_version`: Latest stable version
/// - `scopes`: `public`
/// - `api_host` / `auth_host`: `None` (production hosts)
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use skroutz_api::{SkroutzConfig, ClientId, ClientSecret, ApiVersion, ApiHost};
///
/// let config = SkroutzConfig::builder()
///     .client_id(ClientId::new("id").unwrap())
///     .client_secret(ClientSecret::new("secret").unwrap())
///     .api_version(ApiVersion::V3)
///     .api_host(ApiHost::new("https://api.staging.example.com").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct SkroutzConfigBuilder {
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    scopes: Option<AuthScopes>,
    api_host: Option<ApiHost>,
    auth_host: Option<ApiHost>,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
}

impl SkroutzConfigBuilder {
    /// Creates a new builder with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the application id (required).
    #[must_use]
    pub fn client_id(mut self, client_id: ClientId) -> Self {
        self.client_id = Some(client_id);
        self
    }

    /// Sets the application secret (required).
    #[must_use]
    pub fn client_secret(mut self, client_secret: ClientSecret) -> Self {
        self.client_secret = Some(client_secret);
        self
    }

    /// Sets the OAuth scopes requested during token exchange.
    #[must_use]
    pub fn scopes(mut self, scopes: AuthScopes) -> Self {
        self.scopes = Some(scopes);
        self
    }

    /// Overrides the API host.
    #[must_use]
    pub fn api_host(mut self, host: ApiHost) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Overrides the auth host serving the OAuth2 token endpoint.
    #[must_use]
    pub fn auth_host(mut self, host: ApiHost) -> Self {
        self.auth_host = Some(host);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub const fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets a prefix for the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`SkroutzConfig`], validating required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `client_id` or
    /// `client_secret` has not been set.
    pub fn build(self) -> Result<SkroutzConfig, ConfigError> {
        let client_id = self.client_id.ok_or(ConfigError::MissingRequiredField {
            field: "client_id",
        })?;
        let client_secret = self
            .client_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "client_secret",
            })?;

        Ok(SkroutzConfig {
            client_id,
            client_secret,
            scopes: self.scopes.unwrap_or_else(AuthScopes::public),
            api_host: self.api_host,
            auth_host: self.auth_host,
            api_version: self.api_version.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_builder() -> SkroutzConfigBuilder {
        SkroutzConfig::builder()
            .client_id(ClientId::new("test-id").unwrap())
            .client_secret(ClientSecret::new("test-secret").unwrap())
    }

    #[test]
    fn test_build_with_required_fields_only() {
        let config = test_builder().build().unwrap();

        assert_eq!(config.client_id().as_ref(), "test-id");
        assert_eq!(config.client_secret().as_ref(), "test-secret");
        assert_eq!(config.api_version(), ApiVersion::latest());
        assert!(config.api_host().is_none());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_build_without_client_id_fails() {
        let result = SkroutzConfig::builder()
            .client_secret(ClientSecret::new("secret").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "client_id" })
        ));
    }

    #[test]
    fn test_build_without_client_secret_fails() {
        let result = SkroutzConfig::builder()
            .client_id(ClientId::new("id").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "client_secret"
            })
        ));
    }

    #[test]
    fn test_default_scopes_is_public() {
        let config = test_builder().build().unwrap();
        assert_eq!(config.scopes().to_string(), "public");
    }

    #[test]
    fn test_api_base_uri_defaults_to_production_host() {
        let config = test_builder().build().unwrap();
        assert_eq!(config.api_base_uri(), "https://api.skroutz.gr");
        assert_eq!(config.auth_base_uri(), "https://www.skroutz.gr");
    }

    #[test]
    fn test_api_base_uri_uses_override() {
        let config = test_builder()
            .api_host(ApiHost::new("http://127.0.0.1:9999").unwrap())
            .auth_host(ApiHost::new("http://127.0.0.1:9998").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.api_base_uri(), "http://127.0.0.1:9999");
        assert_eq!(config.auth_base_uri(), "http://127.0.0.1:9998");
    }

    #[test]
    fn test_user_agent_prefix_is_stored() {
        let config = test_builder().user_agent_prefix("MyApp/2.0").build().unwrap();
        assert_eq!(config.user_agent_prefix(), Some("MyApp/2.0"));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SkroutzConfig>();
    }
}
