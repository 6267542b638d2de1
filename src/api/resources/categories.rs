//! Category resource: the category tree and its SKU listings.
//!
//! See the [category](https://developer.skroutz.gr/api/v3/category) section
//! of the API docs.
//!
//! # Example
//!
//! ```rust,ignore
//! let root = client.categories().get_root().execute().await?;
//! let children = client.categories().get_children(root.category.id).execute().await?;
//!
//! let params = SkuSearchParams {
//!     q: Some("iphone".into()),
//!     manufacturer_ids: Some(vec![28]),
//!     ..Default::default()
//! };
//! let skus = client.categories().get_skus(40, &params).execute().await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::api::client::SkroutzClient;
use crate::api::request::{serialize_query, PreparedRequest};
use crate::api::resources::common::{Meta, OrderParams, PageParams};
use crate::api::resources::manufacturers::ManufacturerList;
use crate::api::resources::skus::SkuList;

/// Path prefix shared by all category endpoints.
const ENDPOINT_PATH: &str = "categories";

/// A node of the category tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// The category identifier.
    pub id: u64,
    /// The category name.
    pub name: String,
    /// Number of child categories.
    pub children_count: Option<u32>,
    /// URI of the category image.
    pub image_url: Option<String>,
    /// The parent category, absent on the root.
    pub parent_id: Option<u64>,
    /// Whether the category belongs to the fashion tree.
    pub fashion: Option<bool>,
    /// Listing layout hint (`tiles` or `list`).
    pub layout_mode: Option<String>,
    /// Web location of the category.
    pub web_uri: Option<String>,
    /// The category code.
    pub code: Option<String>,
    /// Breadcrumb path of the category.
    pub path: Option<String>,
    /// Whether SKUs of the category carry specifications.
    pub show_specifications: Option<bool>,
    /// Manufacturers with SKUs in the category.
    pub manufacturer_ids: Option<Vec<u64>>,
}

/// Response shape of the single-category endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRetrieve {
    /// The category.
    pub category: Category,
}

/// Response shape of the category collection endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryList {
    /// The categories.
    pub categories: Vec<Category>,
    /// Collection metadata.
    pub meta: Option<Meta>,
}

/// A specification attribute of a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specification {
    /// The specification identifier.
    pub id: u64,
    /// The specification name.
    pub name: String,
    /// Allowed values, when enumerable.
    pub values: Option<Vec<String>>,
    /// Display order.
    pub order: Option<u32>,
    /// Measurement unit, if any.
    pub unit: Option<String>,
}

/// A specification group, present when `include=group` is requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecificationGroup {
    /// The group identifier.
    pub id: u64,
    /// The group name.
    pub name: String,
    /// Display order.
    pub order: Option<u32>,
}

/// Response shape of `GET /categories/{id}/specifications`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecificationList {
    /// The specifications.
    pub specifications: Vec<Specification>,
    /// Specification groups, present when requested with `include=group`.
    pub groups: Option<Vec<SpecificationGroup>>,
    /// Collection metadata.
    pub meta: Option<Meta>,
}

/// Parameters of the SKU listing endpoint.
///
/// Unset fields are omitted from the query string; array fields repeat the
/// key (`manufacturer_ids[]=1&manufacturer_ids[]=2`).
#[derive(Debug, Clone, Default, Serialize)]
pub struct SkuSearchParams {
    /// Keyword filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    /// Keep only SKUs of these manufacturers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer_ids: Option<Vec<u64>>,
    /// Keep only SKUs matching these filters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_ids: Option<Vec<u64>>,
    /// Sort field: `pricevat`, `popularity` or `rating`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    /// Sort direction: `asc` or `desc`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_dir: Option<String>,
    /// The page to fetch (1-based).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Records per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per: Option<u32>,
}

/// Category endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Categories<'a> {
    client: &'a SkroutzClient,
}

impl<'a> Categories<'a> {
    pub(crate) const fn new(client: &'a SkroutzClient) -> Self {
        Self { client }
    }

    /// List all categories.
    #[must_use]
    pub fn list(&self, params: Option<&PageParams>) -> PreparedRequest<'a, CategoryList> {
        let query = params.map(serialize_query).unwrap_or_default();
        PreparedRequest::get_with_query(self.client.http(), ENDPOINT_PATH, query)
    }

    /// Retrieve a single category.
    #[must_use]
    pub fn get(&self, id: u64) -> PreparedRequest<'a, CategoryRetrieve> {
        PreparedRequest::get(self.client.http(), format!("{ENDPOINT_PATH}/{id}"))
    }

    /// Retrieve the root category.
    #[must_use]
    pub fn get_root(&self) -> PreparedRequest<'a, CategoryRetrieve> {
        PreparedRequest::get(self.client.http(), format!("{ENDPOINT_PATH}/root"))
    }

    /// Retrieve the parent of a category.
    #[must_use]
    pub fn get_parent(&self, id: u64) -> PreparedRequest<'a, CategoryRetrieve> {
        PreparedRequest::get(self.client.http(), format!("{ENDPOINT_PATH}/{id}/parent"))
    }

    /// List the children of a category.
    #[must_use]
    pub fn get_children(&self, id: u64) -> PreparedRequest<'a, CategoryList> {
        PreparedRequest::get(self.client.http(), format!("{ENDPOINT_PATH}/{id}/children"))
    }

    /// List the specifications of a category.
    ///
    /// Pass `include_group = true` to also receive specification groups.
    #[must_use]
    pub fn get_specifications(
        &self,
        id: u64,
        include_group: bool,
    ) -> PreparedRequest<'a, SpecificationList> {
        let query = if include_group {
            vec![("include".to_string(), "group".to_string())]
        } else {
            Vec::new()
        };
        PreparedRequest::get_with_query(
            self.client.http(),
            format!("{ENDPOINT_PATH}/{id}/specifications"),
            query,
        )
    }

    /// List the manufacturers with SKUs in a category.
    #[must_use]
    pub fn get_manufacturers(
        &self,
        id: u64,
        params: Option<&OrderParams>,
    ) -> PreparedRequest<'a, ManufacturerList> {
        let query = params.map(serialize_query).unwrap_or_default();
        PreparedRequest::get_with_query(
            self.client.http(),
            format!("{ENDPOINT_PATH}/{id}/manufacturers"),
            query,
        )
    }

    /// List the SKUs of a category, optionally filtered and ordered.
    #[must_use]
    pub fn get_skus(&self, id: u64, params: &SkuSearchParams) -> PreparedRequest<'a, SkuList> {
        PreparedRequest::get_with_query(
            self.client.http(),
            format!("{ENDPOINT_PATH}/{id}/skus"),
            serialize_query(params),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthScopes, Session};
    use crate::clients::HttpMethod;
    use serde_json::json;

    fn test_client() -> SkroutzClient {
        let session = Session::new("token".to_string(), AuthScopes::public(), None);
        SkroutzClient::new(&session, None)
    }

    #[test]
    fn test_get_targets_category_path() {
        let client = test_client();
        let pending = client.categories().get(40);

        assert_eq!(pending.request().http_method, HttpMethod::Get);
        assert_eq!(pending.request().path, "categories/40");
    }

    #[test]
    fn test_get_root_and_parent_paths() {
        let client = test_client();
        assert_eq!(client.categories().get_root().request().path, "categories/root");
        assert_eq!(
            client.categories().get_parent(40).request().path,
            "categories/40/parent"
        );
    }

    #[test]
    fn test_get_specifications_with_group_include() {
        let client = test_client();
        let pending = client.categories().get_specifications(40, true);

        assert_eq!(pending.request().path, "categories/40/specifications");
        assert_eq!(
            pending.request().query,
            Some(vec![("include".to_string(), "group".to_string())])
        );

        let without = client.categories().get_specifications(40, false);
        assert!(without.request().query.is_none());
    }

    #[test]
    fn test_get_skus_expands_search_params() {
        let client = test_client();
        let params = SkuSearchParams {
            q: Some("iphone".to_string()),
            manufacturer_ids: Some(vec![28, 2]),
            order_by: Some("pricevat".to_string()),
            ..Default::default()
        };
        let pending = client.categories().get_skus(40, &params);

        let query = pending.request().query.clone().unwrap();
        assert!(query.contains(&("q".to_string(), "iphone".to_string())));
        assert!(query.contains(&("manufacturer_ids[]".to_string(), "28".to_string())));
        assert!(query.contains(&("manufacturer_ids[]".to_string(), "2".to_string())));
        assert!(query.contains(&("order_by".to_string(), "pricevat".to_string())));
    }

    #[test]
    fn test_category_retrieve_deserializes() {
        let body = json!({
            "category": {
                "id": 1442,
                "name": "Mobile Phones",
                "children_count": 0,
                "image_url": "https://a.scdn.gr/categories/1442.jpg",
                "parent_id": 86,
                "fashion": false,
                "layout_mode": "tiles",
                "web_uri": "https://www.skroutz.gr/c/1442/kinhta-thlefwna.html",
                "code": "mobile-phones",
                "path": "76,1269,1442",
                "show_specifications": true
            }
        });

        let retrieved: CategoryRetrieve = serde_json::from_value(body).unwrap();
        assert_eq!(retrieved.category.id, 1442);
        assert_eq!(retrieved.category.parent_id, Some(86));
    }

    #[test]
    fn test_category_list_rejects_missing_categories_key() {
        let body = json!({"meta": {}});
        let result: Result<CategoryList, _> = serde_json::from_value(body);
        assert!(result.is_err());
    }
}
