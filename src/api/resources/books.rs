//! Book resource: books, authors, publishers and book categories.
//!
//! Books are SKUs with bibliographic extras, and authors, publishers and
//! book categories hang off their own top-level paths. See the
//! [book](https://developer.skroutz.gr/api/v3/book) section of the API docs.
//!
//! # Example
//!
//! ```rust,ignore
//! let book = client.books().get(242_327).execute().await?;
//! let by_same_author = client.books().get_similar_by_author(242_327).execute().await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::api::client::SkroutzClient;
use crate::api::request::PreparedRequest;
use crate::api::resources::common::Meta;
use crate::api::resources::skus::SkuImages;

/// Path prefix shared by the book endpoints.
const ENDPOINT_PATH: &str = "books";

/// A book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// The book identifier.
    pub id: u64,
    /// The book title.
    pub name: String,
    /// The main author.
    pub main_author_id: Option<u64>,
    /// The main author's name.
    pub main_author: Option<String>,
    /// Highest price across shops.
    pub price_max: Option<f64>,
    /// Lowest price across shops.
    pub price_min: Option<f64>,
    /// Number of shops offering the book.
    pub shop_count: Option<u32>,
    /// Number of user reviews.
    pub reviews_count: Option<u32>,
    /// Attached images.
    pub images: Option<SkuImages>,
    /// Web location of the book.
    pub web_uri: Option<String>,
}

/// Response shape of `GET /books/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRetrieve {
    /// The book.
    pub book: Book,
}

/// Response shape of the book collection endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookList {
    /// The books.
    pub books: Vec<Book>,
    /// Collection metadata.
    pub meta: Option<Meta>,
}

/// Bibliographic details of a book.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDetails {
    /// International standard book number.
    pub isbn: Option<String>,
    /// The publisher.
    pub publisher_id: Option<u64>,
    /// Publication date as reported by the publisher.
    pub publication_date: Option<String>,
    /// Binding format (e.g., paperback).
    pub format: Option<String>,
    /// Page count.
    pub pages: Option<u32>,
    /// Language of the text.
    pub language: Option<String>,
    /// Back-cover description.
    pub description: Option<String>,
}

/// Response shape of `GET /books/{id}/details`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDetailsRetrieve {
    /// The bibliographic details.
    pub book_details: BookDetails,
}

/// An author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// The author identifier.
    pub id: u64,
    /// The author name.
    pub name: String,
    /// URI of the author portrait.
    pub image_url: Option<String>,
    /// Short biography.
    pub bio: Option<String>,
}

/// Response shape of `GET /author/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRetrieve {
    /// The author.
    pub author: Author,
}

/// A publisher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publisher {
    /// The publisher identifier.
    pub id: u64,
    /// The publisher name.
    pub name: String,
    /// The publisher website.
    pub website: Option<String>,
}

/// Response shape of `GET /publisher/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublisherRetrieve {
    /// The publisher.
    pub publisher: Publisher,
}

/// A node of the book category tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookCategory {
    /// The book category identifier.
    pub id: u64,
    /// The book category name.
    pub name: String,
    /// Number of books in the category.
    pub match_count: Option<u32>,
    /// Child categories, present on tree endpoints.
    pub children: Option<Vec<BookCategory>>,
}

/// Response shape of `GET /book_categories`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookCategoryList {
    /// The book categories.
    pub categories: Vec<BookCategory>,
    /// Collection metadata.
    pub meta: Option<Meta>,
}

/// Response shape of `GET /book_categories/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookCategoryRetrieve {
    /// The book category.
    pub category: BookCategory,
}

/// Book, author, publisher and book category endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Books<'a> {
    client: &'a SkroutzClient,
}

impl<'a> Books<'a> {
    pub(crate) const fn new(client: &'a SkroutzClient) -> Self {
        Self { client }
    }

    /// Retrieve a single book.
    #[must_use]
    pub fn get(&self, id: u64) -> PreparedRequest<'a, BookRetrieve> {
        PreparedRequest::get(self.client.http(), format!("{ENDPOINT_PATH}/{id}"))
    }

    /// Retrieve the bibliographic details of a book.
    #[must_use]
    pub fn get_details(&self, id: u64) -> PreparedRequest<'a, BookDetailsRetrieve> {
        PreparedRequest::get(self.client.http(), format!("{ENDPOINT_PATH}/{id}/details"))
    }

    /// Retrieve an author.
    #[must_use]
    pub fn get_author(&self, id: u64) -> PreparedRequest<'a, AuthorRetrieve> {
        PreparedRequest::get(self.client.http(), format!("author/{id}"))
    }

    /// List the books of an author.
    #[must_use]
    pub fn get_author_books(&self, id: u64) -> PreparedRequest<'a, BookList> {
        PreparedRequest::get(self.client.http(), format!("author/{id}/books"))
    }

    /// List books by the same author as the given book.
    #[must_use]
    pub fn get_similar_by_author(&self, id: u64) -> PreparedRequest<'a, BookList> {
        PreparedRequest::get(
            self.client.http(),
            format!("{ENDPOINT_PATH}/{id}/similar_by_author"),
        )
    }

    /// Retrieve a publisher.
    #[must_use]
    pub fn get_publisher(&self, id: u64) -> PreparedRequest<'a, PublisherRetrieve> {
        PreparedRequest::get(self.client.http(), format!("publisher/{id}"))
    }

    /// List the books of a publisher.
    #[must_use]
    pub fn get_publisher_books(&self, id: u64) -> PreparedRequest<'a, BookList> {
        PreparedRequest::get(self.client.http(), format!("publisher/{id}/books"))
    }

    /// List the book categories.
    #[must_use]
    pub fn get_categories(&self) -> PreparedRequest<'a, BookCategoryList> {
        PreparedRequest::get(self.client.http(), "book_categories")
    }

    /// Retrieve a book category.
    #[must_use]
    pub fn get_category(&self, id: u64) -> PreparedRequest<'a, BookCategoryRetrieve> {
        PreparedRequest::get(self.client.http(), format!("book_categories/{id}"))
    }

    /// List the books of a book category.
    #[must_use]
    pub fn get_category_books(&self, id: u64) -> PreparedRequest<'a, BookList> {
        PreparedRequest::get(self.client.http(), format!("book_categories/{id}/books"))
    }
}
