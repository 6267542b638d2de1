//! API version handling for the Skroutz API.
//!
//! Unlike APIs that version their URL paths, Skroutz selects the API version
//! through the `Accept` media type:
//!
//! ```text
//! Accept: application/vnd.skroutz+json; version=3.1
//! ```
//!
//! [`ApiVersion`] enumerates the supported versions and renders that header
//! value.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A supported Skroutz API version.
///
/// The version is negotiated via the `Accept` header on every request, so
/// changing it never affects request paths.
///
/// # Example
///
/// ```rust
/// use skroutz_api::ApiVersion;
///
/// let version = ApiVersion::latest();
/// assert_eq!(version, ApiVersion::V3_1);
/// assert_eq!(
///     version.accept_header(),
///     "application/vnd.skroutz+json; version=3.1"
/// );
///
/// let parsed: ApiVersion = "3".parse().unwrap();
/// assert_eq!(parsed, ApiVersion::V3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// Version 3 of the API.
    V3,
    /// Version 3.1 of the API (current stable).
    V3_1,
}

impl ApiVersion {
    /// Returns the latest stable API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V3_1
    }

    /// Returns the version token used in the `Accept` media type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V3 => "3",
            Self::V3_1 => "3.1",
        }
    }

    /// Returns the full `Accept` header value for this version.
    #[must_use]
    pub fn accept_header(self) -> String {
        format!("application/vnd.skroutz+json; version={}", self.as_str())
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "3" => Ok(Self::V3),
            "3.1" => Ok(Self::V3_1),
            other => Err(ConfigError::InvalidApiVersion {
                version: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_is_v3_1() {
        assert_eq!(ApiVersion::latest(), ApiVersion::V3_1);
        assert_eq!(ApiVersion::default(), ApiVersion::V3_1);
    }

    #[test]
    fn test_accept_header_format() {
        assert_eq!(
            ApiVersion::V3.accept_header(),
            "application/vnd.skroutz+json; version=3"
        );
        assert_eq!(
            ApiVersion::V3_1.accept_header(),
            "application/vnd.skroutz+json; version=3.1"
        );
    }

    #[test]
    fn test_display_matches_version_token() {
        assert_eq!(ApiVersion::V3.to_string(), "3");
        assert_eq!(ApiVersion::V3_1.to_string(), "3.1");
    }

    #[test]
    fn test_from_str_parses_supported_versions() {
        assert_eq!("3".parse::<ApiVersion>().unwrap(), ApiVersion::V3);
        assert_eq!("3.1".parse::<ApiVersion>().unwrap(), ApiVersion::V3_1);
        assert_eq!(" 3.1 ".parse::<ApiVersion>().unwrap(), ApiVersion::V3_1);
    }

    #[test]
    fn test_from_str_rejects_unknown_version() {
        let result = "2".parse::<ApiVersion>();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidApiVersion { version }) if version == "2"
        ));
    }
}
