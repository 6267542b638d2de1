//! User resource: profile, avatars, addresses, saved orders.
//!
//! Groups the endpoints under the `/user` path prefix. All of them require a
//! token with the `user` scope except where noted. See the
//! [user](https://developer.skroutz.gr/api/v3/user) section of the API docs.
//!
//! # Example
//!
//! ```rust,ignore
//! let profile = client.users().get().execute().await?;
//! println!("{} ({})", profile.user.username, profile.user.account_type);
//!
//! let addresses = client.users().get_addresses().execute().await?;
//! for address in &addresses.addresses {
//!     println!("{}: {}", address.id, address.label);
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::client::SkroutzClient;
use crate::api::request::{to_body, PreparedRequest, RawRequest};
use crate::api::resources::common::Meta;

/// Path prefix shared by all user endpoints.
const ENDPOINT_PATH: &str = "user";

/// Review and comment statistics attached to a user profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    /// Number of SKU reviews the user has written.
    pub sku_reviews_count: Option<u32>,
    /// Number of shop reviews the user has written.
    pub shop_reviews_count: Option<u32>,
}

/// One email notification preference and its state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailNotification {
    /// The preference identifier (e.g., `price_drop`).
    pub name: String,
    /// Whether the notification is enabled.
    pub enabled: bool,
}

/// The profile of the authenticated user.
///
/// **Field Guide** (per the API docs): `id`, `username` and the account
/// `type` are always present; `sex` is `male`, `female` or null; the
/// remaining fields depend on the account type and granted scopes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// The unique identifier reference to the resource.
    pub id: u64,
    /// The username of the user.
    pub username: String,
    /// The type of the account: `skroutz`, `open_id`, `twitter`, `facebook`
    /// or `google`.
    #[serde(rename = "type")]
    pub account_type: String,
    /// `male`, `female` or null.
    pub sex: Option<String>,
    /// URI of the avatar image of the user.
    pub avatar: Option<String>,
    /// Account creation date.
    pub created_at: Option<DateTime<Utc>>,
    /// The email of the user.
    pub email: Option<String>,
    /// The birthyear of the user.
    pub birthyear: Option<u16>,
    /// The mobile number of the user.
    pub mobile: Option<String>,
    /// Review / comment related stats.
    pub stats: Option<UserStats>,
    /// Available email preferences and their status.
    pub email_notifications: Option<Vec<EmailNotification>>,
    /// True when the user is a staff member.
    pub is_staff: Option<bool>,
}

/// Response shape of `GET /user` and `PATCH /user`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRetrieve {
    /// The user profile.
    pub user: User,
}

/// A predefined avatar choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Avatar {
    /// The avatar identifier.
    pub id: u64,
    /// URI of the avatar image.
    pub avatar: String,
}

/// Response shape of `GET /user/avatars`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarList {
    /// The selection of predefined avatars.
    pub avatars: Vec<Avatar>,
}

/// A user address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    /// The address identifier.
    pub id: u64,
    /// The address label (e.g., `home`).
    pub label: String,
    /// First name of the recipient.
    pub first_name: Option<String>,
    /// Last name of the recipient.
    pub last_name: Option<String>,
    /// Street name.
    pub street_name: Option<String>,
    /// Street number.
    pub street_number: Option<String>,
    /// City.
    pub city: Option<String>,
    /// Zip code.
    pub zip: Option<u32>,
    /// Region name.
    pub region: Option<String>,
    /// Region identifier.
    pub region_id: Option<u32>,
    /// Phone number.
    pub phone: Option<String>,
    /// Mobile number.
    pub mobile: Option<String>,
    /// Latitude.
    pub lat: Option<f64>,
    /// Longitude.
    pub lng: Option<f64>,
}

/// Response shape of `GET /user/addresses`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressList {
    /// The user's addresses.
    pub addresses: Vec<Address>,
    /// Collection metadata.
    pub meta: Option<Meta>,
}

/// Response shape of the address create/update endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressRetrieve {
    /// The created or updated address.
    pub address: Address,
}

/// A region option offered by the address form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// The region identifier.
    pub id: u32,
    /// The region name.
    pub name: String,
}

/// The address form: which fields a new address needs and the region options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressForm {
    /// Names of the required address fields.
    pub required_fields: Option<Vec<String>>,
    /// Available regions.
    pub regions: Option<Vec<Region>>,
}

/// Response shape of `GET /user/addresses/new`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressFormRetrieve {
    /// The address form.
    pub address_form: AddressForm,
}

/// A saved order reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedOrder {
    /// The order code.
    pub code: Option<String>,
    /// The shop the order was placed with.
    pub shop_id: Option<u64>,
    /// When the order was saved.
    pub created_at: Option<DateTime<Utc>>,
}

/// Response shape of `GET /user/saved_orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedOrderList {
    /// The saved orders.
    pub orders: Vec<SavedOrder>,
    /// Collection metadata.
    pub meta: Option<Meta>,
}

/// Profile fields accepted by `PATCH /user`.
///
/// Unset fields are omitted from the request body, so an update only touches
/// what you set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserUpdate {
    /// `male` or `female`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    /// The birthyear of the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthyear: Option<u16>,
    /// The mobile number of the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
}

/// Address fields accepted by the address create/update endpoints.
///
/// Unset fields are omitted from the request body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AddressParams {
    /// Address label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Street name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_name: Option<String>,
    /// Street number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_number: Option<String>,
    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Zip code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<u32>,
    /// Region identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<u32>,
    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Mobile number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    /// Latitude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    /// Longitude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

/// User endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    client: &'a SkroutzClient,
}

impl<'a> Users<'a> {
    pub(crate) const fn new(client: &'a SkroutzClient) -> Self {
        Self { client }
    }

    /// Retrieve the profile of the authenticated user.
    ///
    /// ```rust,ignore
    /// let profile = client.users().get().execute().await?;
    /// ```
    #[must_use]
    pub fn get(&self) -> PreparedRequest<'a, UserRetrieve> {
        PreparedRequest::get(self.client.http(), ENDPOINT_PATH)
    }

    /// Update profile information.
    ///
    /// ```rust,ignore
    /// let update = UserUpdate { sex: Some("male".into()), birthyear: Some(1980), ..Default::default() };
    /// client.users().update(&update).execute().await?;
    /// ```
    #[must_use]
    pub fn update(&self, update: &UserUpdate) -> PreparedRequest<'a, UserRetrieve> {
        PreparedRequest::patch(self.client.http(), ENDPOINT_PATH, to_body(update))
    }

    /// Retrieve the selection of predefined avatars.
    #[must_use]
    pub fn get_avatars(&self) -> PreparedRequest<'a, AvatarList> {
        PreparedRequest::get(self.client.http(), format!("{ENDPOINT_PATH}/avatars"))
    }

    /// Retrieve the user's addresses.
    #[must_use]
    pub fn get_addresses(&self) -> PreparedRequest<'a, AddressList> {
        PreparedRequest::get(self.client.http(), format!("{ENDPOINT_PATH}/addresses"))
    }

    /// Retrieve the address form.
    #[must_use]
    pub fn get_address_form(&self) -> PreparedRequest<'a, AddressFormRetrieve> {
        PreparedRequest::get(self.client.http(), format!("{ENDPOINT_PATH}/addresses/new"))
    }

    /// Create a new address.
    ///
    /// ```rust,ignore
    /// let params = AddressParams {
    ///     label: Some("home".into()),
    ///     street_name: Some("Panagouli".into()),
    ///     street_number: Some("61".into()),
    ///     city: Some("Nea Ionia".into()),
    ///     zip: Some(14123),
    ///     region_id: Some(5),
    ///     ..Default::default()
    /// };
    /// client.users().new_address(&params).execute().await?;
    /// ```
    #[must_use]
    pub fn new_address(&self, address: &AddressParams) -> PreparedRequest<'a, AddressRetrieve> {
        PreparedRequest::post(
            self.client.http(),
            format!("{ENDPOINT_PATH}/addresses"),
            to_body(address),
        )
    }

    /// Update an existing address.
    ///
    /// The endpoint accepts POST, not PATCH.
    ///
    /// ```rust,ignore
    /// let params = AddressParams { street_number: Some("62".into()), ..Default::default() };
    /// client.users().update_address(48937, &params).execute().await?;
    /// ```
    #[must_use]
    pub fn update_address(
        &self,
        id: u64,
        address: &AddressParams,
    ) -> PreparedRequest<'a, AddressRetrieve> {
        PreparedRequest::post(
            self.client.http(),
            format!("{ENDPOINT_PATH}/addresses/{id}"),
            to_body(address),
        )
    }

    /// Delete an existing address.
    ///
    /// No response schema; the raw response is returned.
    #[must_use]
    pub fn delete_address(&self, id: u64) -> RawRequest<'a> {
        RawRequest::delete(
            self.client.http(),
            format!("{ENDPOINT_PATH}/addresses/{id}"),
        )
    }

    /// Retrieve the user's saved orders.
    #[must_use]
    pub fn saved_orders(&self) -> PreparedRequest<'a, SavedOrderList> {
        PreparedRequest::get(self.client.http(), format!("{ENDPOINT_PATH}/saved_orders"))
    }

    /// Log the user out.
    ///
    /// No response schema; the raw response is returned.
    #[must_use]
    pub fn logout(&self) -> RawRequest<'a> {
        RawRequest::delete(self.client.http(), format!("{ENDPOINT_PATH}/logout"))
    }
}
