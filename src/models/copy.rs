//! Book copy (inventory unit) model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Lifecycle status of a physical copy.
///
/// Transitions are one-directional per operation:
/// available → rented → available (rental cycle) or
/// available → sold (purchase, terminal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CopyStatus {
    Available,
    Rented,
    Sold,
}

impl CopyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CopyStatus::Available => "available",
            CopyStatus::Rented => "rented",
            CopyStatus::Sold => "sold",
        }
    }
}

impl std::fmt::Display for CopyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Book copy row joined with its item price
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookCopy {
    pub copy_id: i32,
    pub isbn: String,
    pub can_rent: bool,
    pub status: String,
    pub price: Decimal,
}

/// Add copies request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddCopies {
    #[validate(range(min = 1))]
    pub quantity: i32,
    pub price: Decimal,
    #[serde(default)]
    pub can_rent: bool,
}

/// Per-ISBN inventory rollup
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct InventorySummary {
    pub isbn: String,
    pub title: String,
    pub total_copies: i64,
    pub available_copies: i64,
    pub rented_copies: i64,
    pub sold_copies: i64,
}
