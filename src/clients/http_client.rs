//! HTTP client for Skroutz API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the Skroutz API. Each call to [`HttpClient::request`] performs
//! exactly one network call; failures are surfaced to the caller untouched.

use std::collections::HashMap;

use crate::auth::Session;
use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::{ApiVersion, SkroutzConfig, DEFAULT_API_HOST};

/// Client library version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Skroutz API.
///
/// The client handles:
/// - Base URI selection (configured override or the production host)
/// - Default headers: the versioned `Accept` media type, the bearer token,
///   and a User-Agent identifying the library
/// - Response parsing into [`HttpResponse`], including rate-limit and
///   pagination metadata
///
/// It deliberately does **not** retry, throttle, or cache.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use skroutz_api::{AuthScopes, Session};
/// use skroutz_api::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let session = Session::new("access-token".to_string(), AuthScopes::public(), None);
/// let client = HttpClient::new(&session, None);
///
/// let request = HttpRequest::builder(HttpMethod::Get, "categories")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://api.skroutz.gr`).
    base_uri: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given session.
    ///
    /// # Arguments
    ///
    /// * `session` - The session providing the bearer token
    /// * `config` - Optional configuration for host override, API version and
    ///   `user_agent_prefix`
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(session: &Session, config: Option<&SkroutzConfig>) -> Self {
        let base_uri = config
            .map_or(DEFAULT_API_HOST, SkroutzConfig::api_base_uri)
            .to_string();

        let api_version = config.map_or_else(ApiVersion::latest, SkroutzConfig::api_version);

        // Build User-Agent header
        let user_agent_prefix = config
            .and_then(SkroutzConfig::user_agent_prefix)
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Skroutz API Library v{CLIENT_VERSION} | Rust {rust_version}");

        // Build default headers
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), api_version.accept_header());

        if !session.access_token.is_empty() {
            default_headers.insert(
                "Authorization".to_string(),
                format!("Bearer {}", session.access_token),
            );
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri,
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the Skroutz API.
    ///
    /// This method handles:
    /// - Request validation
    /// - URL construction
    /// - Header merging
    /// - Response parsing
    ///
    /// Exactly one network call is made; non-2xx responses become errors
    /// without any retry.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}/{}", self.base_uri, request.path);

        // Merge headers
        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        tracing::debug!("{} {}", request.http_method, request.path);

        // Build the reqwest request
        let mut req_builder = match request.http_method {
            crate::clients::http_request::HttpMethod::Get => self.client.get(&url),
            crate::clients::http_request::HttpMethod::Post => self.client.post(&url),
            crate::clients::http_request::HttpMethod::Patch => self.client.patch(&url),
            crate::clients::http_request::HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        // Send request
        let res = req_builder.send().await?;

        // Parse response
        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.unwrap_or_default();

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text)
                .unwrap_or_else(|_| serde_json::json!({ "raw_body": body_text }))
        };

        let response = HttpResponse::new(code, res_headers, body);

        if response.is_ok() {
            return Ok(response);
        }

        tracing::warn!(
            "Request to {} failed with status {}",
            request.path,
            response.code
        );

        Err(HttpError::Response(HttpResponseError {
            code,
            message: Self::serialize_error(&response),
            request_id: response.request_id().map(String::from),
        }))
    }

    /// Parses response headers into a `HashMap` with lower-cased keys.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Serializes the error portion of a failed response.
    ///
    /// Skroutz reports errors as `{"errors": [{"code": …, "messages": […]}]}`;
    /// when that key is absent the whole body is passed through.
    fn serialize_error(response: &HttpResponse) -> String {
        let payload = response
            .body
            .get("errors")
            .map_or_else(|| response.body.clone(), |errors| {
                serde_json::json!({ "errors": errors.clone() })
            });

        serde_json::to_string(&payload).unwrap_or_else(|_| "{}".to_string())
    }
}
