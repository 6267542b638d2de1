//! Pending typed requests: the build-then-execute pipeline.
//!
//! Every resource method returns one of the two pending request types in
//! this module. Building one performs no I/O; it only assembles an immutable
//! [`HttpRequest`] descriptor paired with the expected response model.
//! `execute()` is the single point where a network call happens, and it
//! consumes the pending request, so a descriptor can be executed at most
//! once.
//!
//! - [`PreparedRequest<T>`]: the response body is validated against model `T`
//! - [`RawRequest`]: schema-less endpoints (deletes, flags, logout); the raw
//!   [`HttpResponse`] is returned as-is
//!
//! # Example
//!
//! ```rust,ignore
//! // Nothing has hit the network yet:
//! let pending = client.skus().get(3_783_654);
//!
//! // Exactly one GET /skus/3783654 happens here:
//! let sku = pending.execute().await?;
//! println!("{}", sku.sku.name);
//! ```

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::errors::ApiError;
use crate::clients::{DataType, HttpClient, HttpMethod, HttpRequest, HttpResponse};

/// A pending request whose response is validated against model `T`.
///
/// Produced by resource methods; the type parameter is the declared response
/// schema. The descriptor is immutable — inspect it with
/// [`request`](Self::request), execute it with [`execute`](Self::execute).
#[derive(Debug)]
pub struct PreparedRequest<'c, T> {
    client: &'c HttpClient,
    request: HttpRequest,
    _model: PhantomData<fn() -> T>,
}

impl<'c, T: DeserializeOwned> PreparedRequest<'c, T> {
    /// Builds a pending GET request.
    pub(crate) fn get(client: &'c HttpClient, path: impl Into<String>) -> Self {
        Self::from_parts(client, HttpMethod::Get, path, None, None)
    }

    /// Builds a pending GET request with query parameters.
    pub(crate) fn get_with_query(
        client: &'c HttpClient,
        path: impl Into<String>,
        query: Vec<(String, String)>,
    ) -> Self {
        let query = if query.is_empty() { None } else { Some(query) };
        Self::from_parts(client, HttpMethod::Get, path, None, query)
    }

    /// Builds a pending POST request with a JSON body.
    pub(crate) fn post(
        client: &'c HttpClient,
        path: impl Into<String>,
        body: serde_json::Value,
    ) -> Self {
        Self::from_parts(client, HttpMethod::Post, path, Some(body), None)
    }

    /// Builds a pending PATCH request with a JSON body.
    pub(crate) fn patch(
        client: &'c HttpClient,
        path: impl Into<String>,
        body: serde_json::Value,
    ) -> Self {
        Self::from_parts(client, HttpMethod::Patch, path, Some(body), None)
    }

    fn from_parts(
        client: &'c HttpClient,
        method: HttpMethod,
        path: impl Into<String>,
        body: Option<serde_json::Value>,
        query: Option<Vec<(String, String)>>,
    ) -> Self {
        let body_type = body.as_ref().map(|_| DataType::Json);
        Self {
            client,
            request: HttpRequest {
                http_method: method,
                path: path.into(),
                body,
                body_type,
                query,
                extra_headers: None,
            },
            _model: PhantomData,
        }
    }

    /// Returns the underlying request descriptor.
    #[must_use]
    pub const fn request(&self) -> &HttpRequest {
        &self.request
    }

    /// Executes the request and validates the response body against `T`.
    ///
    /// Performs exactly one network call and consumes the pending request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] for transport failures and non-2xx
    /// responses, and [`ApiError::Validation`] when a 2xx body does not
    /// match the declared model.
    pub async fn execute(self) -> Result<T, ApiError> {
        let path = self.request.path.clone();
        let response = self.client.request(self.request).await?;

        serde_json::from_value(response.body).map_err(|source| ApiError::Validation {
            path,
            source,
        })
    }
}

/// A pending request with no associated response model.
///
/// Used by endpoints that answer with no meaningful body (address deletion,
/// review flagging, logout). [`execute`](Self::execute) returns the raw
/// [`HttpResponse`] so callers can still inspect the status and headers.
#[derive(Debug)]
pub struct RawRequest<'c> {
    client: &'c HttpClient,
    request: HttpRequest,
}

impl<'c> RawRequest<'c> {
    /// Builds a pending DELETE request.
    pub(crate) fn delete(client: &'c HttpClient, path: impl Into<String>) -> Self {
        Self {
            client,
            request: HttpRequest {
                http_method: HttpMethod::Delete,
                path: path.into(),
                body: None,
                body_type: None,
                query: None,
                extra_headers: None,
            },
        }
    }

    /// Builds a pending POST request with a JSON body.
    pub(crate) fn post(
        client: &'c HttpClient,
        path: impl Into<String>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            client,
            request: HttpRequest {
                http_method: HttpMethod::Post,
                path: path.into(),
                body: Some(body),
                body_type: Some(DataType::Json),
                query: None,
                extra_headers: None,
            },
        }
    }

    /// Returns the underlying request descriptor.
    #[must_use]
    pub const fn request(&self) -> &HttpRequest {
        &self.request
    }

    /// Executes the request and returns the raw response.
    ///
    /// Performs exactly one network call and consumes the pending request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] for transport failures and non-2xx
    /// responses.
    pub async fn execute(self) -> Result<HttpResponse, ApiError> {
        Ok(self.client.request(self.request).await?)
    }
}

/// Serializes a typed params struct into a JSON request body.
///
/// Params structs skip unset fields, so the body is exactly the set fields.
pub(crate) fn to_body<T: Serialize>(params: &T) -> serde_json::Value {
    serde_json::to_value(params)
        .unwrap_or_else(|_| serde_json::Value::Object(serde_json::Map::new()))
}

/// Serializes a typed params struct into query pairs.
///
/// `None` fields are skipped (the structs use `skip_serializing_if`), arrays
/// become repeated `key[]` pairs the way the Skroutz API expects
/// (`manufacturer_ids[]=1&manufacturer_ids[]=2`), and scalars are rendered
/// with their natural string form.
pub(crate) fn serialize_query<T: Serialize>(params: &T) -> Vec<(String, String)> {
    let value = serde_json::to_value(params).unwrap_or(serde_json::Value::Null);

    let mut query = Vec::new();
    let serde_json::Value::Object(map) = value else {
        return query;
    };

    for (key, val) in map {
        match val {
            serde_json::Value::Null => {}
            serde_json::Value::String(s) => query.push((key, s)),
            serde_json::Value::Number(n) => query.push((key, n.to_string())),
            serde_json::Value::Bool(b) => query.push((key, b.to_string())),
            serde_json::Value::Array(arr) => {
                let array_key = format!("{key}[]");
                for item in arr {
                    match item {
                        serde_json::Value::String(s) => query.push((array_key.clone(), s)),
                        serde_json::Value::Number(n) => {
                            query.push((array_key.clone(), n.to_string()));
                        }
                        _ => {}
                    }
                }
            }
            serde_json::Value::Object(_) => query.push((key, val.to_string())),
        }
    }

    query
}

// Verify pending requests are Send at compile time so they can cross awaits
const _: fn() = || {
    const fn assert_send<T: Send>() {}
    assert_send::<PreparedRequest<'static, serde_json::Value>>();
    assert_send::<RawRequest<'static>>();
};
