//! Customers repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult, ErrorCode},
    models::customer::{CreateCustomer, Customer},
};

#[derive(Clone)]
pub struct CustomersRepository {
    pool: Pool<Postgres>,
}

impl CustomersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get all customers
    pub async fn get_all(&self) -> AppResult<Vec<Customer>> {
        Ok(
            sqlx::query_as::<_, Customer>("SELECT * FROM customers ORDER BY last_name, first_name")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    /// Get customer by ID
    pub async fn get_by_id(&self, customer_id: i32) -> AppResult<Customer> {
        sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE customer_id = $1")
            .bind(customer_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(
                    ErrorCode::NoSuchCustomer,
                    format!("Customer {} not found", customer_id),
                )
            })
    }

    /// Create a new customer
    pub async fn create(&self, customer: &CreateCustomer) -> AppResult<Customer> {
        let created = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (first_name, last_name, customer_type, phone_number, zip_code)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.customer_type)
        .bind(&customer.phone_number)
        .bind(customer.zip_code)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => AppError::Conflict(
                ErrorCode::Duplicate,
                format!(
                    "Customer with phone number {} already exists",
                    customer.phone_number
                ),
            ),
            _ => AppError::Database(e),
        })?;

        Ok(created)
    }
}
