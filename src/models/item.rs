//! Generic sellable item and merchandise models
//!
//! Every book copy and every piece of merchandise is backed by one
//! `items` row carrying the catalog price.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Item {
    pub item_id: i32,
    pub description: String,
    pub price: Decimal,
    pub item_type: String,
}

/// Merchandise item with its category
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Merchandise {
    pub item_id: i32,
    pub description: String,
    pub price: Decimal,
    pub category_name: String,
}
