//! Shared response and parameter types used across resource groups.

use serde::{Deserialize, Serialize};

/// Pagination block of the `meta` envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Total matching records across all pages.
    pub total_results: u32,
    /// Total number of pages.
    pub total_pages: u32,
    /// The current page (1-based).
    pub page: u32,
    /// Records per page.
    pub per: u32,
}

/// The `meta` envelope Skroutz attaches to collection responses.
///
/// Only the pagination block is modelled; endpoint-specific extras (applied
/// filters, orderings) pass through untyped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    /// Pagination info, present on paginated collections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,

    /// Sort order applied by the server, when reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,

    /// Remaining, endpoint-specific metadata.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Page selection parameters accepted by every collection endpoint.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct PageParams {
    /// The page to fetch (1-based).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Records per page (server caps apply).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per: Option<u32>,
}

/// Ordering parameters accepted by several collection endpoints.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrderParams {
    /// Field to order by (endpoint-specific tokens, e.g. `name`, `popularity`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    /// Direction: `asc` or `desc`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_dir: Option<String>,
}
