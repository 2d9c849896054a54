//! Rentals repository for database operations

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult, ErrorCode},
    models::copy::CopyStatus,
    models::rental::{compute_penalty, Rental, RentalDetails},
};

use super::inventory::InventoryRepository;

const RENTAL_DETAILS_SELECT: &str = r#"
    SELECT r.rental_id, r.customer_id, r.copy_id,
           r.rent_date, r.due_date, r.return_date, r.penalty,
           b.title AS book_title,
           b.isbn,
           c.first_name || ' ' || c.last_name AS customer_name
    FROM rentals r
    JOIN book_copies bc ON r.copy_id = bc.copy_id
    JOIN books b ON bc.isbn = b.isbn
    JOIN customers c ON r.customer_id = c.customer_id
"#;

#[derive(Clone)]
pub struct RentalsRepository {
    pool: Pool<Postgres>,
}

impl RentalsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get all rentals with book and customer details, newest first,
    /// optionally filtered by customer
    pub async fn get_all(&self, customer_id: Option<i32>) -> AppResult<Vec<RentalDetails>> {
        let rentals = match customer_id {
            Some(id) => {
                let query =
                    format!("{RENTAL_DETAILS_SELECT} WHERE r.customer_id = $1 ORDER BY r.rent_date DESC");
                sqlx::query_as::<_, RentalDetails>(&query)
                    .bind(id)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let query = format!("{RENTAL_DETAILS_SELECT} ORDER BY r.rent_date DESC");
                sqlx::query_as::<_, RentalDetails>(&query)
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(rentals)
    }

    /// Get rental details by ID
    pub async fn get_by_id(&self, rental_id: i32) -> AppResult<RentalDetails> {
        let query = format!("{RENTAL_DETAILS_SELECT} WHERE r.rental_id = $1");
        sqlx::query_as::<_, RentalDetails>(&query)
            .bind(rental_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(
                    ErrorCode::NoSuchRental,
                    format!("Rental {} not found", rental_id),
                )
            })
    }

    /// Rent a book: lock the lowest-id available, rentable copy of the
    /// ISBN, mark it rented and create the rental record, all in one
    /// transaction.
    pub async fn create(
        &self,
        customer_id: i32,
        isbn: &str,
        grace_period_days: i64,
    ) -> AppResult<RentalDetails> {
        let mut tx = self.pool.begin().await?;

        let customer_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM customers WHERE customer_id = $1)")
                .bind(customer_id)
                .fetch_one(&mut *tx)
                .await?;
        if !customer_exists {
            return Err(AppError::NotFound(
                ErrorCode::NoSuchCustomer,
                format!("Customer {} not found", customer_id),
            ));
        }

        super::books::BooksRepository::title_of(&mut tx, isbn).await?;

        let copy_id: Option<i32> = sqlx::query_scalar(
            r#"
            SELECT copy_id FROM book_copies
            WHERE isbn = $1 AND status = 'available' AND can_rent
            ORDER BY copy_id
            LIMIT 1
            FOR UPDATE
            "#,
        )
        .bind(isbn)
        .fetch_optional(&mut *tx)
        .await?;

        let copy_id = copy_id.ok_or_else(|| {
            AppError::InsufficientInventory(format!("No rentable copies available for ISBN {}", isbn))
        })?;

        InventoryRepository::transition(&mut tx, copy_id, CopyStatus::Available, CopyStatus::Rented)
            .await?;

        let now = Utc::now();
        let due_date = now + Duration::days(grace_period_days);

        let rental_id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO rentals (customer_id, copy_id, rent_date, due_date)
            VALUES ($1, $2, $3, $4)
            RETURNING rental_id
            "#,
        )
        .bind(customer_id)
        .bind(copy_id)
        .bind(now)
        .bind(due_date)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        self.get_by_id(rental_id).await
    }

    /// Return a rented book: set the return date, fix the penalty and
    /// make the copy available again. Returning twice is a conflict and
    /// mutates nothing.
    pub async fn return_rental(
        &self,
        rental_id: i32,
        grace_period_days: i64,
        daily_penalty_rate: Decimal,
    ) -> AppResult<RentalDetails> {
        let mut tx = self.pool.begin().await?;

        let rental: Rental =
            sqlx::query_as::<_, Rental>("SELECT * FROM rentals WHERE rental_id = $1 FOR UPDATE")
                .bind(rental_id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(
                        ErrorCode::NoSuchRental,
                        format!("Rental {} not found", rental_id),
                    )
                })?;

        if rental.return_date.is_some() {
            return Err(AppError::Conflict(
                ErrorCode::AlreadyReturned,
                format!("Rental {} already returned", rental_id),
            ));
        }

        let now = Utc::now();
        let penalty = compute_penalty(rental.rent_date, now, grace_period_days, daily_penalty_rate);

        sqlx::query("UPDATE rentals SET return_date = $1, penalty = $2 WHERE rental_id = $3")
            .bind(now)
            .bind(penalty)
            .bind(rental_id)
            .execute(&mut *tx)
            .await?;

        InventoryRepository::transition(
            &mut tx,
            rental.copy_id,
            CopyStatus::Rented,
            CopyStatus::Available,
        )
        .await?;

        tx.commit().await?;

        self.get_by_id(rental_id).await
    }

    /// Count rentals with no return date
    pub async fn count_active(&self) -> AppResult<i64> {
        Ok(
            sqlx::query_scalar("SELECT COUNT(*) FROM rentals WHERE return_date IS NULL")
                .fetch_one(&self.pool)
                .await?,
        )
    }
}
