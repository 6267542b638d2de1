//! Shop resource: shop profiles, reviews and product lookups.
//!
//! See the [shop](https://developer.skroutz.gr/api/v3/shop) section of the
//! API docs.
//!
//! # Example
//!
//! ```rust,ignore
//! let shop = client.shops().get(452).execute().await?;
//! println!("{} ({} reviews)", shop.shop.name, shop.shop.reviews_count);
//!
//! // Locate a shop's product by the shop's own identifier
//! let products = client.shops().get_products(452, "apl-5-16-blk").execute().await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::client::SkroutzClient;
use crate::api::request::{serialize_query, PreparedRequest};
use crate::api::resources::common::{Meta, PageParams};
use crate::api::resources::products::ProductList;

/// Path prefix shared by all shop endpoints.
const ENDPOINT_PATH: &str = "shops";

/// Payment methods a shop accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethods {
    /// Accepts credit cards.
    pub credit_card: bool,
    /// Accepts PayPal.
    pub paypal: bool,
    /// Accepts bank transfers.
    pub bank: bool,
    /// Accepts cash on pickup.
    pub spot_cash: bool,
    /// Installment terms, as free text.
    pub installments: Option<String>,
}

/// Shipping terms of a shop.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Shipping {
    /// Whether shipping is free.
    pub free: bool,
    /// Order total above which shipping is free.
    pub free_from: Option<u32>,
    /// Free-shipping terms, as free text.
    pub free_from_info: Option<String>,
    /// Minimum shipping cost, as displayed.
    pub min_price: Option<String>,
    /// Whether the shop reports shipping costs per product.
    pub shipping_cost_enabled: Option<bool>,
}

/// Marketplace statistics of a shop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraInfo {
    /// How long the shop has been on the platform, as free text.
    pub time_on_platform: Option<String>,
    /// Order volume bucket, as free text.
    pub orders_per_week: Option<String>,
}

/// A shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    /// The shop identifier.
    pub id: u64,
    /// The shop name.
    pub name: String,
    /// The shop storefront link.
    pub link: Option<String>,
    /// The shop phone number.
    pub phone: Option<String>,
    /// URI of the shop logo.
    pub image_url: Option<String>,
    /// URI of the storefront thumbshot.
    pub thumbshot_url: Option<String>,
    /// Web location of the shop page.
    pub web_uri: Option<String>,
    /// Number of user reviews.
    pub reviews_count: u32,
    /// Number of recent user reviews.
    pub latest_reviews_count: Option<u32>,
    /// Average review score.
    pub review_score: f64,
    /// Accepted payment methods.
    pub payment_methods: Option<PaymentMethods>,
    /// Shipping terms.
    pub shipping: Option<Shipping>,
    /// Marketplace statistics.
    pub extra_info: Option<ExtraInfo>,
    /// Most cited positive review reasons.
    pub top_positive_reasons: Option<Vec<String>>,
}

/// Response shape of `GET /shops/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopRetrieve {
    /// The shop.
    pub shop: Shop,
}

/// A user review of a shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopReview {
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
    /// The shop's reply, if any.
    pub shop_reply: Option<String>,
}

/// Response shape of `GET /shops/{id}/reviews`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopReviewList {
    /// The reviews.
    pub reviews: Vec<ShopReview>,
    /// Collection metadata.
    pub meta: Option<Meta>,
}

/// Shop endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Shops<'a> {
    client: &'a SkroutzClient,
}

impl<'a> Shops<'a> {
    pub(crate) const fn new(client: &'a SkroutzClient) -> Self {
        Self { client }
    }

    /// Retrieve a single shop.
    #[must_use]
    pub fn get(&self, id: u64) -> PreparedRequest<'a, ShopRetrieve> {
        PreparedRequest::get(self.client.http(), format!("{ENDPOINT_PATH}/{id}"))
    }

    /// List the reviews of a shop.
    #[must_use]
    pub fn get_reviews(
        &self,
        id: u64,
        params: Option<&PageParams>,
    ) -> PreparedRequest<'a, ShopReviewList> {
        let query = params.map(serialize_query).unwrap_or_default();
        PreparedRequest::get_with_query(
            self.client.http(),
            format!("{ENDPOINT_PATH}/{id}/reviews"),
            query,
        )
    }

    /// Look up a shop's products by the shop's own product identifier.
    #[must_use]
    pub fn get_products(&self, id: u64, shop_uid: &str) -> PreparedRequest<'a, ProductList> {
        PreparedRequest::get_with_query(
            self.client.http(),
            format!("{ENDPOINT_PATH}/{id}/products"),
            vec![("shop_uid".to_string(), shop_uid.to_string())],
        )
    }
}
