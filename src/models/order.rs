//! Order model and related types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Order row from the database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Order {
    pub order_id: i32,
    pub order_amount: Decimal,
    pub item_count: i32,
    pub order_date: DateTime<Utc>,
    pub customer_id: i32,
    pub promotion_id: Option<i32>,
}

/// Order line with its item description and price snapshot
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct OrderItem {
    pub order_item_id: i32,
    pub order_id: i32,
    pub item_id: i32,
    pub description: String,
    pub quantity: i32,
    pub unit_price: Decimal,
}

/// Order with embedded line items
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderDetails {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
}

/// One requested line of a new order: either a book (by ISBN) or a
/// generic merchandise item (by item id).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderLine {
    pub isbn: Option<String>,
    pub item_id: Option<i32>,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

fn default_quantity() -> i32 {
    1
}

/// Create order request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateOrder {
    pub customer_id: i32,
    pub promotion_id: Option<i32>,
    #[validate(length(min = 1, message = "order must contain at least one line"))]
    pub lines: Vec<CreateOrderLine>,
}

/// Promotion-adjusted grand total over (unit_price, quantity) pairs,
/// rounded to the currency's minor unit. The discount applies to the
/// grand total, not per line.
pub fn order_total(lines: &[(Decimal, i32)], discount_percent: Option<Decimal>) -> Decimal {
    let subtotal: Decimal = lines
        .iter()
        .map(|(price, quantity)| price * Decimal::from(*quantity))
        .sum();
    let total = match discount_percent {
        Some(discount) => subtotal * (Decimal::ONE - discount / Decimal::ONE_HUNDRED),
        None => subtotal,
    };
    total.round_dp(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn total_sums_line_subtotals() {
        let lines = vec![(dec("20.00"), 1), (dec("5.50"), 3)];
        assert_eq!(order_total(&lines, None), dec("36.50"));
    }

    #[test]
    fn discount_applies_to_grand_total() {
        let lines = vec![(dec("20.00"), 1), (dec("30.00"), 1)];
        assert_eq!(order_total(&lines, Some(dec("10"))), dec("45.00"));
    }

    #[test]
    fn total_rounds_to_minor_unit() {
        // 19.99 * 3 = 59.97, 15% off = 50.9745 -> 50.97
        let lines = vec![(dec("19.99"), 3)];
        assert_eq!(order_total(&lines, Some(dec("15"))), dec("50.97"));
    }

    #[test]
    fn single_copy_no_discount() {
        let lines = vec![(dec("20.00"), 1)];
        assert_eq!(order_total(&lines, None), dec("20.00"));
    }

    #[test]
    fn full_discount_yields_zero() {
        let lines = vec![(dec("12.34"), 2)];
        assert_eq!(order_total(&lines, Some(dec("100"))), dec("0.00"));
    }
}
