//! Promotions repository for database operations

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::promotion::Promotion};

#[derive(Clone)]
pub struct PromotionsRepository {
    pool: Pool<Postgres>,
}

impl PromotionsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get all promotions, newest first
    pub async fn get_all(&self) -> AppResult<Vec<Promotion>> {
        Ok(
            sqlx::query_as::<_, Promotion>("SELECT * FROM promotions ORDER BY start_date DESC")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    /// Get promotions whose date window covers today
    pub async fn get_active(&self) -> AppResult<Vec<Promotion>> {
        Ok(sqlx::query_as::<_, Promotion>(
            r#"
            SELECT * FROM promotions
            WHERE start_date <= CURRENT_DATE AND end_date >= CURRENT_DATE
            ORDER BY discount_percent DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?)
    }
}
