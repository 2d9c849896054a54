//! Review model (append-only)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Review {
    pub review_id: i32,
    pub item_id: i32,
    pub reviewer: String,
    pub rating: i16,
    pub content: String,
    pub creation_date: DateTime<Utc>,
}

/// Create review request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReview {
    pub item_id: i32,
    #[validate(length(min = 1, max = 50))]
    pub reviewer: String,
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: i16,
    #[validate(length(max = 1000))]
    pub content: String,
}

/// Aggregate rating for an item
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ItemRating {
    pub item_id: i32,
    pub review_count: i64,
    pub average_rating: Option<rust_decimal::Decimal>,
}
