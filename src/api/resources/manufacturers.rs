//! Manufacturer resource.
//!
//! See the [manufacturer](https://developer.skroutz.gr/api/v3/manufacturer)
//! section of the API docs.

use serde::{Deserialize, Serialize};

use crate::api::client::SkroutzClient;
use crate::api::request::{serialize_query, PreparedRequest};
use crate::api::resources::categories::CategoryList;
use crate::api::resources::common::{Meta, OrderParams, PageParams};
use crate::api::resources::skus::SkuList;

/// Path prefix shared by all manufacturer endpoints.
const ENDPOINT_PATH: &str = "manufacturers";

/// A manufacturer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manufacturer {
    /// The manufacturer identifier.
    pub id: u64,
    /// The manufacturer name.
    pub name: String,
    /// URI of the manufacturer logo.
    pub image_url: Option<String>,
}

/// Response shape of `GET /manufacturers/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManufacturerRetrieve {
    /// The manufacturer.
    pub manufacturer: Manufacturer,
}

/// Response shape of the manufacturer collection endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManufacturerList {
    /// The manufacturers.
    pub manufacturers: Vec<Manufacturer>,
    /// Collection metadata.
    pub meta: Option<Meta>,
}

/// Manufacturer endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Manufacturers<'a> {
    client: &'a SkroutzClient,
}

impl<'a> Manufacturers<'a> {
    pub(crate) const fn new(client: &'a SkroutzClient) -> Self {
        Self { client }
    }

    /// List all manufacturers.
    #[must_use]
    pub fn list(&self, params: Option<&PageParams>) -> PreparedRequest<'a, ManufacturerList> {
        let query = params.map(serialize_query).unwrap_or_default();
        PreparedRequest::get_with_query(self.client.http(), ENDPOINT_PATH, query)
    }

    /// Retrieve a single manufacturer.
    #[must_use]
    pub fn get(&self, id: u64) -> PreparedRequest<'a, ManufacturerRetrieve> {
        PreparedRequest::get(self.client.http(), format!("{ENDPOINT_PATH}/{id}"))
    }

    /// List the categories a manufacturer has SKUs in.
    #[must_use]
    pub fn get_categories(
        &self,
        id: u64,
        params: Option<&OrderParams>,
    ) -> PreparedRequest<'a, CategoryList> {
        let query = params.map(serialize_query).unwrap_or_default();
        PreparedRequest::get_with_query(
            self.client.http(),
            format!("{ENDPOINT_PATH}/{id}/categories"),
            query,
        )
    }

    /// List the SKUs of a manufacturer.
    #[must_use]
    pub fn get_skus(&self, id: u64, params: Option<&OrderParams>) -> PreparedRequest<'a, SkuList> {
        let query = params.map(serialize_query).unwrap_or_default();
        PreparedRequest::get_with_query(
            self.client.http(),
            format!("{ENDPOINT_PATH}/{id}/skus"),
            query,
        )
    }
}
