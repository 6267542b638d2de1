//! Product resource: concrete shop offerings.
//!
//! A product is a shop's concrete offering of a SKU. See the
//! [product](https://developer.skroutz.gr/api/v3/product) section of the API
//! docs.

use serde::{Deserialize, Serialize};

use crate::api::client::SkroutzClient;
use crate::api::request::PreparedRequest;
use crate::api::resources::common::Meta;

/// Path prefix shared by all product endpoints.
const ENDPOINT_PATH: &str = "products";

/// A shop's offering of a SKU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// The product identifier.
    pub id: u64,
    /// The product name as listed by the shop.
    pub name: String,
    /// The SKU the product is grouped under.
    pub sku_id: Option<u64>,
    /// The shop offering the product.
    pub shop_id: Option<u64>,
    /// The category the product belongs to.
    pub category_id: Option<u64>,
    /// Availability as reported by the shop.
    pub availability: Option<String>,
    /// Redirect URL towards the shop's product page.
    pub click_url: Option<String>,
    /// The shop's own identifier for the product.
    pub shop_uid: Option<String>,
    /// The product price.
    pub price: Option<f64>,
    /// Web location of the product.
    pub web_uri: Option<String>,
    /// Available sizes, for fashion categories.
    pub sizes: Option<Vec<String>>,
}

/// Response shape of `GET /products/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRetrieve {
    /// The product.
    pub product: Product,
}

/// Response shape of the product collection endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductList {
    /// The products.
    pub products: Vec<Product>,
    /// Collection metadata.
    pub meta: Option<Meta>,
}

/// Product endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Products<'a> {
    client: &'a SkroutzClient,
}

impl<'a> Products<'a> {
    pub(crate) const fn new(client: &'a SkroutzClient) -> Self {
        Self { client }
    }

    /// Retrieve a single product.
    #[must_use]
    pub fn get(&self, id: u64) -> PreparedRequest<'a, ProductRetrieve> {
        PreparedRequest::get(self.client.http(), format!("{ENDPOINT_PATH}/{id}"))
    }
}
