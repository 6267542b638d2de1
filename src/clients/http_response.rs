//! HTTP response types for the Skroutz API client.
//!
//! This module provides the [`HttpResponse`] type and related types for
//! parsing and accessing API response data, including the informational
//! metadata Skroutz attaches to every response: rate-limit counters
//! (`X-RateLimit-*` headers) and page-numbered pagination (`Link` header).
//!
//! The metadata is parsed for the caller's benefit only — the client never
//! throttles or auto-paginates.

use std::collections::HashMap;

/// Rate limit counters parsed from the `X-RateLimit-*` response headers.
///
/// # Example
///
/// ```rust
/// use skroutz_api::clients::RateLimit;
/// use std::collections::HashMap;
///
/// let mut headers: HashMap<String, Vec<String>> = HashMap::new();
/// headers.insert("x-ratelimit-limit".to_string(), vec!["100".to_string()]);
/// headers.insert("x-ratelimit-remaining".to_string(), vec!["97".to_string()]);
/// headers.insert("x-ratelimit-reset".to_string(), vec!["1420702800".to_string()]);
///
/// let limit = RateLimit::from_headers(&headers).unwrap();
/// assert_eq!(limit.limit, 100);
/// assert_eq!(limit.remaining, 97);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests allowed in the current window.
    pub limit: u32,
    /// Requests left in the current window.
    pub remaining: u32,
    /// Unix timestamp at which the window resets, if reported.
    pub reset: Option<u64>,
}

impl RateLimit {
    /// Parses rate limit counters from lower-cased response headers.
    ///
    /// Returns `None` unless both `x-ratelimit-limit` and
    /// `x-ratelimit-remaining` are present and numeric.
    #[must_use]
    pub fn from_headers(headers: &HashMap<String, Vec<String>>) -> Option<Self> {
        let first = |name: &str| headers.get(name).and_then(|v| v.first());

        let limit = first("x-ratelimit-limit")?.parse().ok()?;
        let remaining = first("x-ratelimit-remaining")?.parse().ok()?;
        let reset = first("x-ratelimit-reset").and_then(|v| v.parse().ok());

        Some(Self {
            limit,
            remaining,
            reset,
        })
    }
}

/// Pagination information parsed from the `Link` header.
///
/// Skroutz paginates collections with `page`/`per` query parameters; the
/// `Link` header carries full URLs for the neighbouring pages:
///
/// ```text
/// <https://api.skroutz.gr/categories?page=3&per=25>; rel="next",
/// <https://api.skroutz.gr/categories?page=1&per=25>; rel="prev"
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaginationInfo {
    /// The page number of the previous page, if any.
    pub prev_page: Option<u32>,
    /// The page number of the next page, if any.
    pub next_page: Option<u32>,
}

impl PaginationInfo {
    /// Parses pagination info from a `Link` header value.
    ///
    /// Returns a default (empty) value when the header carries no usable
    /// page links.
    #[must_use]
    pub fn parse(link_header: &str) -> Self {
        let mut info = Self::default();

        for part in link_header.split(',') {
            let Some(page) = Self::extract_page_param(part) else {
                continue;
            };

            if part.contains("rel=\"next\"") {
                info.next_page = Some(page);
            } else if part.contains("rel=\"prev\"") || part.contains("rel=\"previous\"") {
                info.prev_page = Some(page);
            }
        }

        info
    }

    /// Extracts the `page` query parameter from a `<url>; rel="…"` segment.
    fn extract_page_param(part: &str) -> Option<u32> {
        let start = part.find('<')? + 1;
        let end = part.find('>')?;
        let url = part.get(start..end)?;

        let query = url.split_once('?')?.1;
        query
            .split('&')
            .find_map(|pair| pair.strip_prefix("page="))
            .and_then(|v| v.parse().ok())
    }

    /// Returns `true` if there is a next page of results.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.next_page.is_some()
    }

    /// Returns `true` if there is a previous page of results.
    #[must_use]
    pub const fn has_prev_page(&self) -> bool {
        self.prev_page.is_some()
    }
}

/// An HTTP response from the Skroutz API.
///
/// Holds the status code, lower-cased response headers, the JSON body, and
/// the parsed informational metadata.
///
/// # Example
///
/// ```rust
/// use skroutz_api::clients::HttpResponse;
/// use std::collections::HashMap;
/// use serde_json::json;
///
/// let response = HttpResponse::new(200, HashMap::new(), json!({"ok": true}));
/// assert!(response.is_ok());
/// assert_eq!(response.body["ok"], json!(true));
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keys lower-cased, values in arrival order.
    pub headers: HashMap<String, Vec<String>>,
    /// The response body parsed as JSON.
    pub body: serde_json::Value,
    /// Rate limit counters, if the response carried them.
    pub rate_limit: Option<RateLimit>,
    /// Pagination links, if the response carried a `Link` header.
    pub pagination: Option<PaginationInfo>,
}

impl HttpResponse {
    /// Creates a new response, parsing metadata out of the headers.
    #[must_use]
    pub fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        let rate_limit = RateLimit::from_headers(&headers);
        let pagination = headers
            .get("link")
            .and_then(|v| v.first())
            .map(|link| PaginationInfo::parse(link))
            .filter(|p| p.has_next_page() || p.has_prev_page());

        Self {
            code,
            headers,
            body,
            rate_limit,
            pagination,
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code < 300
    }

    /// Returns the request id from the `X-Request-Id` header, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|v| v.first())
            .map(String::as_str)
    }
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpResponse>();
    assert_send_sync::<RateLimit>();
    assert_send_sync::<PaginationInfo>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers_with(entries: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), vec![(*v).to_string()]))
            .collect()
    }

    #[test]
    fn test_is_ok_for_2xx_codes() {
        let response = HttpResponse::new(200, HashMap::new(), json!({}));
        assert!(response.is_ok());

        let response = HttpResponse::new(204, HashMap::new(), json!({}));
        assert!(response.is_ok());

        let response = HttpResponse::new(404, HashMap::new(), json!({}));
        assert!(!response.is_ok());
    }

    #[test]
    fn test_request_id_extraction() {
        let headers = headers_with(&[("x-request-id", "req-123")]);
        let response = HttpResponse::new(200, headers, json!({}));
        assert_eq!(response.request_id(), Some("req-123"));

        let response = HttpResponse::new(200, HashMap::new(), json!({}));
        assert_eq!(response.request_id(), None);
    }

    #[test]
    fn test_rate_limit_parsed_from_headers() {
        let headers = headers_with(&[
            ("x-ratelimit-limit", "100"),
            ("x-ratelimit-remaining", "97"),
            ("x-ratelimit-reset", "1420702800"),
        ]);
        let response = HttpResponse::new(200, headers, json!({}));

        let limit = response.rate_limit.unwrap();
        assert_eq!(limit.limit, 100);
        assert_eq!(limit.remaining, 97);
        assert_eq!(limit.reset, Some(1_420_702_800));
    }

    #[test]
    fn test_rate_limit_absent_when_headers_missing() {
        let headers = headers_with(&[("x-ratelimit-limit", "100")]);
        assert!(RateLimit::from_headers(&headers).is_none());
    }

    #[test]
    fn test_pagination_parses_next_and_prev_pages() {
        let link = "<https://api.skroutz.gr/categories?page=3&per=25>; rel=\"next\", \
                    <https://api.skroutz.gr/categories?page=1&per=25>; rel=\"prev\"";
        let info = PaginationInfo::parse(link);

        assert_eq!(info.next_page, Some(3));
        assert_eq!(info.prev_page, Some(1));
        assert!(info.has_next_page());
        assert!(info.has_prev_page());
    }

    #[test]
    fn test_pagination_handles_next_only() {
        let link = "<https://api.skroutz.gr/categories?page=2>; rel=\"next\"";
        let info = PaginationInfo::parse(link);

        assert_eq!(info.next_page, Some(2));
        assert!(info.prev_page.is_none());
    }

    #[test]
    fn test_pagination_ignores_malformed_segments() {
        let info = PaginationInfo::parse("not a link header");
        assert_eq!(info, PaginationInfo::default());
    }

    #[test]
    fn test_response_pagination_filtered_when_empty() {
        let headers = headers_with(&[("link", "<https://api.skroutz.gr/categories>; rel=\"first\"")]);
        let response = HttpResponse::new(200, headers, json!({}));
        assert!(response.pagination.is_none());
    }

    #[test]
    fn test_response_pagination_populated_from_link_header() {
        let headers = headers_with(&[(
            "link",
            "<https://api.skroutz.gr/manufacturers?page=2&per=25>; rel=\"next\"",
        )]);
        let response = HttpResponse::new(200, headers, json!({}));

        assert_eq!(response.pagination.unwrap().next_page, Some(2));
    }
}
