//! Per-resource endpoint groups and their response models.
//!
//! Each submodule pairs a resource handle (the struct with the endpoint
//! methods) with the serde models mirroring its response shapes. Handles are
//! obtained from [`SkroutzClient`](crate::api::SkroutzClient) accessors and
//! borrow the client for the duration of the fluent chain.
//!
//! | Handle | Path prefix |
//! |---|---|
//! | [`Users`] | `/user` |
//! | [`Categories`] | `/categories` |
//! | [`Skus`] | `/skus` |
//! | [`Products`] | `/products` |
//! | [`Manufacturers`] | `/manufacturers` |
//! | [`Books`] | `/books`, `/author`, `/publisher`, `/book_categories` |
//! | [`Shops`] | `/shops` |

pub mod books;
pub mod categories;
pub mod common;
pub mod manufacturers;
pub mod products;
pub mod shops;
pub mod skus;
pub mod users;

pub use books::Books;
pub use categories::Categories;
pub use common::{Meta, OrderParams, PageParams, Pagination};
pub use manufacturers::Manufacturers;
pub use products::Products;
pub use shops::Shops;
pub use skus::Skus;
pub use users::Users;
