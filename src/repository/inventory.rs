//! Inventory repository: book copy creation and status transitions
//!
//! Status transitions are guarded by the expected source state inside
//! the UPDATE itself; a transition that matches no row is reported as a
//! conflict and never applied.

use rust_decimal::Decimal;
use sqlx::{PgConnection, Pool, Postgres, Transaction};

use crate::{
    error::{AppError, AppResult, ErrorCode},
    models::copy::{BookCopy, CopyStatus, InventorySummary},
};

#[derive(Clone)]
pub struct InventoryRepository {
    pool: Pool<Postgres>,
}

impl InventoryRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Add `quantity` copies of a book, each with the given price and
    /// rentable flag, all status `available`. One transaction.
    pub async fn add_copies(
        &self,
        isbn: &str,
        quantity: i32,
        price: Decimal,
        can_rent: bool,
    ) -> AppResult<Vec<BookCopy>> {
        if quantity <= 0 {
            return Err(AppError::Validation("quantity must be positive".into()));
        }
        if price <= Decimal::ZERO {
            return Err(AppError::Validation("price must be positive".into()));
        }

        let mut tx = self.pool.begin().await?;
        let title = super::books::BooksRepository::title_of(&mut tx, isbn).await?;
        let copies = Self::insert_copies(&mut tx, isbn, &title, quantity, price, can_rent).await?;
        tx.commit().await?;

        Ok(copies)
    }

    /// Insert copy rows inside an existing transaction. Each copy gets
    /// its own priced item row plus a book_copies row.
    pub(crate) async fn insert_copies(
        tx: &mut Transaction<'_, Postgres>,
        isbn: &str,
        title: &str,
        quantity: i32,
        price: Decimal,
        can_rent: bool,
    ) -> AppResult<Vec<BookCopy>> {
        let mut copies = Vec::with_capacity(quantity as usize);
        for n in 1..=quantity {
            let item_id: i32 = sqlx::query_scalar(
                r#"
                INSERT INTO items (description, price, item_type)
                VALUES ($1, $2, 'book')
                RETURNING item_id
                "#,
            )
            .bind(format!("{} - Copy {}", title, n))
            .bind(price)
            .fetch_one(&mut **tx)
            .await?;

            sqlx::query(
                r#"
                INSERT INTO book_copies (copy_id, isbn, can_rent, status)
                VALUES ($1, $2, $3, 'available')
                "#,
            )
            .bind(item_id)
            .bind(isbn)
            .bind(can_rent)
            .execute(&mut **tx)
            .await?;

            copies.push(BookCopy {
                copy_id: item_id,
                isbn: isbn.to_string(),
                can_rent,
                status: CopyStatus::Available.as_str().to_string(),
                price,
            });
        }
        Ok(copies)
    }

    /// Get all copies for an ISBN regardless of status, lowest copy id
    /// first
    pub async fn copies(&self, isbn: &str) -> AppResult<Vec<BookCopy>> {
        Ok(sqlx::query_as::<_, BookCopy>(
            r#"
            SELECT bc.copy_id, bc.isbn, bc.can_rent, bc.status, i.price
            FROM book_copies bc
            JOIN items i ON bc.copy_id = i.item_id
            WHERE bc.isbn = $1
            ORDER BY bc.copy_id
            "#,
        )
        .bind(isbn)
        .fetch_all(&self.pool)
        .await?)
    }

    /// Get all available copies for an ISBN, lowest copy id first
    pub async fn available_copies(&self, isbn: &str) -> AppResult<Vec<BookCopy>> {
        Ok(sqlx::query_as::<_, BookCopy>(
            r#"
            SELECT bc.copy_id, bc.isbn, bc.can_rent, bc.status, i.price
            FROM book_copies bc
            JOIN items i ON bc.copy_id = i.item_id
            WHERE bc.isbn = $1 AND bc.status = 'available'
            ORDER BY bc.copy_id
            "#,
        )
        .bind(isbn)
        .fetch_all(&self.pool)
        .await?)
    }

    /// Inventory rollup, for one ISBN or the whole catalog
    pub async fn summary(&self, isbn: Option<&str>) -> AppResult<Vec<InventorySummary>> {
        const SELECT: &str = r#"
            SELECT b.isbn,
                   b.title,
                   COUNT(bc.copy_id) AS total_copies,
                   COUNT(bc.copy_id) FILTER (WHERE bc.status = 'available') AS available_copies,
                   COUNT(bc.copy_id) FILTER (WHERE bc.status = 'rented') AS rented_copies,
                   COUNT(bc.copy_id) FILTER (WHERE bc.status = 'sold') AS sold_copies
            FROM books b
            LEFT JOIN book_copies bc ON b.isbn = bc.isbn
        "#;

        let rows = match isbn {
            Some(isbn) => {
                let query = format!("{SELECT} WHERE b.isbn = $1 GROUP BY b.isbn, b.title");
                sqlx::query_as::<_, InventorySummary>(&query)
                    .bind(isbn)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let query = format!("{SELECT} GROUP BY b.isbn, b.title ORDER BY b.title");
                sqlx::query_as::<_, InventorySummary>(&query)
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(rows)
    }

    /// Lock and reserve `quantity` available copies of an ISBN for a
    /// purchase, marking them sold. Returns (copy_id, unit_price) pairs.
    /// Runs inside the caller's transaction so a failed order leaves
    /// inventory untouched.
    pub(crate) async fn reserve_copies(
        tx: &mut Transaction<'_, Postgres>,
        isbn: &str,
        quantity: i32,
    ) -> AppResult<Vec<(i32, Decimal)>> {
        let locked: Vec<(i32, Decimal)> = sqlx::query_as(
            r#"
            SELECT bc.copy_id, i.price
            FROM book_copies bc
            JOIN items i ON bc.copy_id = i.item_id
            WHERE bc.isbn = $1 AND bc.status = 'available'
            ORDER BY bc.copy_id
            LIMIT $2
            FOR UPDATE OF bc
            "#,
        )
        .bind(isbn)
        .bind(quantity as i64)
        .fetch_all(&mut **tx)
        .await?;

        if (locked.len() as i32) < quantity {
            return Err(AppError::InsufficientInventory(format!(
                "Only {} copies of {} available, but {} requested",
                locked.len(),
                isbn,
                quantity
            )));
        }

        for (copy_id, _) in &locked {
            Self::transition(&mut **tx, *copy_id, CopyStatus::Available, CopyStatus::Sold).await?;
        }

        Ok(locked)
    }

    /// Apply one status transition, failing with a conflict when the
    /// copy is not in the expected source state.
    pub(crate) async fn transition(
        conn: &mut PgConnection,
        copy_id: i32,
        from: CopyStatus,
        to: CopyStatus,
    ) -> AppResult<()> {
        let result = sqlx::query("UPDATE book_copies SET status = $1 WHERE copy_id = $2 AND status = $3")
            .bind(to.as_str())
            .bind(copy_id)
            .bind(from.as_str())
            .execute(conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::Conflict(
                ErrorCode::CopyNotAvailable,
                format!("Copy {} is not {} (cannot mark it {})", copy_id, from, to),
            ));
        }
        Ok(())
    }
}
