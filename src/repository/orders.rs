//! Orders repository for database operations
//!
//! Order creation, copy reservation and total computation run in a
//! single transaction: a failed order leaves no order rows behind and
//! no copy marked sold.

use rust_decimal::Decimal;

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult, ErrorCode},
    models::order::{order_total, CreateOrder, Order, OrderDetails, OrderItem},
};

use super::inventory::InventoryRepository;

#[derive(Clone)]
pub struct OrdersRepository {
    pool: Pool<Postgres>,
}

impl OrdersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get all orders with their items, newest first
    pub async fn get_all(&self) -> AppResult<Vec<OrderDetails>> {
        let orders = sqlx::query_as::<_, Order>("SELECT * FROM orders ORDER BY order_date DESC")
            .fetch_all(&self.pool)
            .await?;

        let mut result = Vec::with_capacity(orders.len());
        for order in orders {
            let items = self.get_order_items(order.order_id).await?;
            result.push(OrderDetails { order, items });
        }
        Ok(result)
    }

    /// Get a single order by ID with its items
    pub async fn get_by_id(&self, order_id: i32) -> AppResult<OrderDetails> {
        let order = sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE order_id = $1")
            .bind(order_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(ErrorCode::NoSuchOrder, format!("Order {} not found", order_id))
            })?;

        let items = self.get_order_items(order_id).await?;
        Ok(OrderDetails { order, items })
    }

    /// Get all line items for an order
    pub async fn get_order_items(&self, order_id: i32) -> AppResult<Vec<OrderItem>> {
        Ok(sqlx::query_as::<_, OrderItem>(
            r#"
            SELECT oi.order_item_id, oi.order_id, oi.item_id,
                   i.description, oi.quantity, oi.unit_price
            FROM order_items oi
            JOIN items i ON oi.item_id = i.item_id
            WHERE oi.order_id = $1
            ORDER BY oi.order_item_id
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?)
    }

    /// Create a new order.
    ///
    /// Book lines reserve available copies (lowest copy id first, row
    /// locked) and mark them sold with their price snapshotted; item
    /// lines snapshot the catalog price without touching any state. The
    /// promotion discount applies to the grand total.
    pub async fn create(&self, order: &CreateOrder) -> AppResult<OrderDetails> {
        if order.lines.is_empty() {
            return Err(AppError::Validation(
                "order must contain at least one line".into(),
            ));
        }

        let mut tx = self.pool.begin().await?;

        let customer_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM customers WHERE customer_id = $1)")
                .bind(order.customer_id)
                .fetch_one(&mut *tx)
                .await?;
        if !customer_exists {
            return Err(AppError::NotFound(
                ErrorCode::NoSuchCustomer,
                format!("Customer {} not found", order.customer_id),
            ));
        }

        let discount_percent: Option<Decimal> = match order.promotion_id {
            Some(promotion_id) => Some(
                sqlx::query_scalar::<_, Decimal>(
                    "SELECT discount_percent FROM promotions WHERE promotion_id = $1",
                )
                .bind(promotion_id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(
                        ErrorCode::NoSuchPromotion,
                        format!("Promotion {} not found", promotion_id),
                    )
                })?,
            ),
            None => None,
        };

        let order_id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO orders (order_amount, item_count, order_date, customer_id, promotion_id)
            VALUES (0, 0, NOW(), $1, $2)
            RETURNING order_id
            "#,
        )
        .bind(order.customer_id)
        .bind(order.promotion_id)
        .fetch_one(&mut *tx)
        .await?;

        let mut priced_lines: Vec<(Decimal, i32)> = Vec::new();
        let mut item_count = 0;

        for line in &order.lines {
            if line.quantity <= 0 {
                return Err(AppError::Validation(
                    "line quantity must be positive".into(),
                ));
            }

            match (&line.isbn, line.item_id) {
                (Some(isbn), None) => {
                    // NotFound for an unknown ISBN, InsufficientInventory
                    // when the book exists but copies run out.
                    super::books::BooksRepository::title_of(&mut tx, isbn).await?;
                    let reserved =
                        InventoryRepository::reserve_copies(&mut tx, isbn, line.quantity).await?;
                    for (copy_id, price) in reserved {
                        sqlx::query(
                            r#"
                            INSERT INTO order_items (order_id, item_id, quantity, unit_price)
                            VALUES ($1, $2, 1, $3)
                            "#,
                        )
                        .bind(order_id)
                        .bind(copy_id)
                        .bind(price)
                        .execute(&mut *tx)
                        .await?;
                        priced_lines.push((price, 1));
                    }
                }
                (None, Some(item_id)) => {
                    let price = sqlx::query_scalar::<_, Decimal>(
                        "SELECT price FROM items WHERE item_id = $1 AND item_type = 'merchandise'",
                    )
                    .bind(item_id)
                    .fetch_optional(&mut *tx)
                    .await?
                    .ok_or_else(|| {
                        AppError::NotFound(
                            ErrorCode::NoSuchItem,
                            format!("Item {} not found", item_id),
                        )
                    })?;

                    sqlx::query(
                        r#"
                        INSERT INTO order_items (order_id, item_id, quantity, unit_price)
                        VALUES ($1, $2, $3, $4)
                        "#,
                    )
                    .bind(order_id)
                    .bind(item_id)
                    .bind(line.quantity)
                    .bind(price)
                    .execute(&mut *tx)
                    .await?;
                    priced_lines.push((price, line.quantity));
                }
                _ => {
                    return Err(AppError::Validation(
                        "each line must reference exactly one of isbn or item_id".into(),
                    ));
                }
            }
            item_count += line.quantity;
        }

        let amount = order_total(&priced_lines, discount_percent);

        sqlx::query("UPDATE orders SET order_amount = $1, item_count = $2 WHERE order_id = $3")
            .bind(amount)
            .bind(item_count)
            .bind(order_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        self.get_by_id(order_id).await
    }
}
