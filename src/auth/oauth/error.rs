//! Error types for OAuth token acquisition.

use thiserror::Error;

/// Errors that can occur while exchanging application credentials for an
/// access token.
///
/// # Example
///
/// ```rust
/// use skroutz_api::auth::oauth::OAuthError;
///
/// let error = OAuthError::ClientCredentialsFailed {
///     status: 401,
///     message: r#"{"error":"invalid_client"}"#.to_string(),
/// };
/// assert!(error.to_string().contains("401"));
/// ```
#[derive(Debug, Error)]
pub enum OAuthError {
    /// The token endpoint rejected the exchange, the response could not be
    /// parsed, or the request never reached the server (`status` is 0 for
    /// network-level failures).
    #[error("Client credentials exchange failed with status {status}: {message}")]
    ClientCredentialsFailed {
        /// HTTP status of the failed exchange (0 for network errors).
        status: u16,
        /// The response body or underlying error description.
        message: String,
    },
}

// Verify OAuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OAuthError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_credentials_failed_message_includes_status_and_body() {
        let error = OAuthError::ClientCredentialsFailed {
            status: 401,
            message: r#"{"error":"invalid_client"}"#.to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("401"));
        assert!(message.contains("invalid_client"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = OAuthError::ClientCredentialsFailed {
            status: 0,
            message: "connection refused".to_string(),
        };
        let _: &dyn std::error::Error = &error;
    }
}
