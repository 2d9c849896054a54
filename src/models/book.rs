//! Book (catalog) model and related reference data types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Book row from the database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub isbn: String,
    pub title: String,
    pub publication_year: i32,
    pub publisher_id: i32,
    pub category_id: i32,
}

/// Book with resolved author/category/publisher names and copy count
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookDetail {
    pub isbn: String,
    pub title: String,
    pub author_name: String,
    pub category_name: String,
    pub publisher_name: String,
    pub publication_year: i32,
    pub number_of_copies: i64,
}

/// Book with at least one copy currently on the shelf, as served by
/// the for-ordering / for-renting listings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AvailableBook {
    pub isbn: String,
    pub title: String,
    pub author_name: String,
    pub category_name: String,
    pub publisher_name: String,
    pub publication_year: i32,
    pub available_copies: i64,
}

/// Search result row for keyword search (title, author or ISBN)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookSearchResult {
    pub isbn: String,
    pub title: String,
    pub author_name: String,
    pub category_name: String,
}

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1, max = 20))]
    pub isbn: String,
    #[validate(length(min = 1))]
    pub title: String,
    pub publication_year: i32,
    pub publisher_id: i32,
    pub category_id: i32,
    #[validate(length(min = 1))]
    pub author_first_name: String,
    #[validate(length(min = 1))]
    pub author_last_name: String,
    pub author_initials: Option<String>,
    /// Price of the initial copy; when present one copy is created
    /// alongside the book.
    pub price: Option<Decimal>,
    #[serde(default)]
    pub can_rent: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    pub author_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub initials: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Publisher {
    pub publisher_id: i32,
    pub publisher_name: String,
    pub publisher_city: Option<String>,
}

/// Create publisher request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePublisher {
    #[validate(length(min = 1))]
    pub publisher_name: String,
    pub publisher_city: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Category {
    pub category_id: i32,
    pub category_name: String,
    pub description: String,
}
