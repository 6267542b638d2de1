//! SKU resource: aggregated products, similarity, reviews and review votes.
//!
//! A SKU ("stock keeping unit") aggregates identical products offered by
//! different shops. See the [sku](https://developer.skroutz.gr/api/v3/sku)
//! section of the API docs.
//!
//! # Example
//!
//! ```rust,ignore
//! let sku = client.skus().get(3_783_654).execute().await?;
//! println!("{} from {}", sku.sku.name, sku.sku.price_min.unwrap_or_default());
//!
//! let reviews = client.skus().get_reviews(3_783_654, None).execute().await?;
//! if let Some(first) = reviews.reviews.first() {
//!     client.skus().vote_review(3_783_654, first.id, true).execute().await?;
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::api::client::SkroutzClient;
use crate::api::request::{serialize_query, PreparedRequest, RawRequest};
use crate::api::resources::common::{Meta, PageParams};
use crate::api::resources::products::ProductList;

/// Path prefix shared by all SKU endpoints.
const ENDPOINT_PATH: &str = "skus";

/// Images attached to a SKU.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkuImages {
    /// URI of the main image.
    pub main: Option<String>,
    /// URIs of the alternative images.
    pub alternatives: Option<Vec<String>>,
}

/// An aggregated product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sku {
    /// The SKU identifier.
    pub id: u64,
    /// The SKU name.
    pub name: String,
    /// European article number.
    pub ean: Option<String>,
    /// Manufacturer part number.
    pub pn: Option<String>,
    /// Name including the manufacturer.
    pub display_name: Option<String>,
    /// The category the SKU belongs to.
    pub category_id: Option<u64>,
    /// Redirect URL towards the SKU page.
    pub click_url: Option<String>,
    /// Highest price across shops.
    pub price_max: Option<f64>,
    /// Lowest price across shops.
    pub price_min: Option<f64>,
    /// Number of shops offering the SKU.
    pub shop_count: Option<u32>,
    /// Short specification summary.
    pub plain_spec_summary: Option<String>,
    /// The manufacturer of the SKU.
    pub manufacturer_id: Option<u64>,
    /// Whether the SKU is an upcoming release.
    pub future: Option<bool>,
    /// Number of user reviews.
    pub reviews_count: Option<u32>,
    /// Whether the SKU was created from user contributions.
    #[serde(rename = "virtual")]
    pub is_virtual: Option<bool>,
    /// Attached images.
    pub images: Option<SkuImages>,
    /// Web location of the SKU.
    pub web_uri: Option<String>,
    /// Average review score.
    pub reviewscore: Option<f64>,
}

/// Response shape of `GET /skus/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkuRetrieve {
    /// The SKU.
    pub sku: Sku,
}

/// Response shape of the SKU collection endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkuList {
    /// The SKUs.
    pub skus: Vec<Sku>,
    /// Collection metadata.
    pub meta: Option<Meta>,
}

/// A user review of a SKU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// The review identifier.
    pub id: u64,
    /// The author.
    pub user_id: Option<u64>,
    /// The review text.
    pub review: Option<String>,
    /// Star rating (1-5).
    pub rating: Option<f64>,
    /// When the review was written.
    pub created_at: Option<DateTime<Utc>>,
    /// Whether the review has been demoted.
    pub demoted: Option<bool>,
    /// Total helpfulness votes.
    pub votes_count: Option<u32>,
    /// Helpfulness votes marking the review helpful.
    pub helpful_votes_count: Option<u32>,
}

/// Response shape of `GET /skus/{id}/reviews`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewList {
    /// The reviews.
    pub reviews: Vec<Review>,
    /// Collection metadata.
    pub meta: Option<Meta>,
}

/// A helpfulness vote on a review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewVote {
    /// The vote identifier.
    pub id: u64,
    /// The review the vote belongs to.
    pub sku_review_id: Option<u64>,
    /// The voting user.
    pub user_id: Option<u64>,
    /// Whether the review was marked helpful.
    pub helpful: bool,
    /// When the vote was cast.
    pub created_at: Option<DateTime<Utc>>,
}

/// Response shape of the review vote endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewVoteRetrieve {
    /// The cast vote.
    pub sku_review_vote: ReviewVote,
}

/// SKU endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Skus<'a> {
    client: &'a SkroutzClient,
}

impl<'a> Skus<'a> {
    pub(crate) const fn new(client: &'a SkroutzClient) -> Self {
        Self { client }
    }

    /// Retrieve a single SKU.
    #[must_use]
    pub fn get(&self, id: u64) -> PreparedRequest<'a, SkuRetrieve> {
        PreparedRequest::get(self.client.http(), format!("{ENDPOINT_PATH}/{id}"))
    }

    /// List SKUs similar to the given one.
    #[must_use]
    pub fn get_similar(&self, id: u64) -> PreparedRequest<'a, SkuList> {
        PreparedRequest::get(self.client.http(), format!("{ENDPOINT_PATH}/{id}/similar"))
    }

    /// List the products grouped under a SKU.
    #[must_use]
    pub fn get_products(&self, id: u64) -> PreparedRequest<'a, ProductList> {
        PreparedRequest::get(self.client.http(), format!("{ENDPOINT_PATH}/{id}/products"))
    }

    /// List the reviews of a SKU.
    #[must_use]
    pub fn get_reviews(
        &self,
        id: u64,
        params: Option<&PageParams>,
    ) -> PreparedRequest<'a, ReviewList> {
        let query = params.map(serialize_query).unwrap_or_default();
        PreparedRequest::get_with_query(
            self.client.http(),
            format!("{ENDPOINT_PATH}/{id}/reviews"),
            query,
        )
    }

    /// Vote a review of a SKU as helpful or not.
    #[must_use]
    pub fn vote_review(
        &self,
        sku_id: u64,
        review_id: u64,
        helpful: bool,
    ) -> PreparedRequest<'a, ReviewVoteRetrieve> {
        PreparedRequest::post(
            self.client.http(),
            format!("{ENDPOINT_PATH}/{sku_id}/reviews/{review_id}/votes"),
            json!({ "vote": { "helpful": helpful } }),
        )
    }

    /// Flag a review of a SKU.
    ///
    /// `reason` is one of the flag reasons the API publishes (e.g. `spam`,
    /// `bad_language`). The endpoint answers 204 No Content, so the raw
    /// response is returned.
    #[must_use]
    pub fn flag_review(&self, sku_id: u64, review_id: u64, reason: &str) -> RawRequest<'a> {
        RawRequest::post(
            self.client.http(),
            format!("{ENDPOINT_PATH}/{sku_id}/reviews/{review_id}/flags"),
            json!({ "flag": { "reason": reason } }),
        )
    }
}
