//! Error types for API resource operations.
//!
//! This module distinguishes the two ways an executed request can fail:
//! transport-level failure (network error or non-2xx status, wrapped
//! [`HttpError`]) and response-shape failure (a 2xx body that does not match
//! the declared model, [`ApiError::Validation`]).
//!
//! # Example
//!
//! ```rust,ignore
//! use skroutz_api::api::ApiError;
//!
//! match client.users().get().execute().await {
//!     Ok(profile) => println!("Hello, {}", profile.user.username),
//!     Err(ApiError::Validation { path, source }) => {
//!         println!("Response from {path} did not match the schema: {source}");
//!     }
//!     Err(ApiError::Http(e)) => println!("Transport failure: {e}"),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for executed API requests.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The response body did not match the declared model.
    ///
    /// Raised when a required field is missing or a field has the wrong
    /// type. Distinct from transport failure: the server answered 2xx but
    /// the shape was wrong.
    #[error("Response from '{path}' failed validation: {source}")]
    Validation {
        /// The request path whose response failed validation.
        path: String,
        /// The underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// An HTTP-level error occurred (validation before send, network
    /// failure, or a non-2xx response).
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ApiError {
    /// Returns `true` if this is a response-shape validation failure.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

// Verify ApiError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    fn validation_error() -> ApiError {
        let source = serde_json::from_str::<u32>("\"nope\"").unwrap_err();
        ApiError::Validation {
            path: "user".to_string(),
            source,
        }
    }

    #[test]
    fn test_validation_error_message_names_the_path() {
        let error = validation_error();
        let message = error.to_string();
        assert!(message.contains("user"));
        assert!(message.contains("failed validation"));
    }

    #[test]
    fn test_is_validation_discriminates_variants() {
        assert!(validation_error().is_validation());

        let http = ApiError::Http(HttpError::Response(HttpResponseError {
            code: 404,
            message: "{}".to_string(),
            request_id: None,
        }));
        assert!(!http.is_validation());
    }

    #[test]
    fn test_http_error_converts_transparently() {
        let http_error = HttpError::Response(HttpResponseError {
            code: 500,
            message: r#"{"errors":[]}"#.to_string(),
            request_id: None,
        });

        let api_error: ApiError = http_error.into();
        assert!(matches!(api_error, ApiError::Http(_)));
    }

    #[test]
    fn test_all_variants_implement_std_error() {
        let validation: &dyn std::error::Error = &validation_error();
        let _ = validation;
    }
}
