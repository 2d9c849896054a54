//! Reviews repository (append-only)

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult, ErrorCode},
    models::review::{CreateReview, ItemRating, Review},
};

#[derive(Clone)]
pub struct ReviewsRepository {
    pool: Pool<Postgres>,
}

impl ReviewsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get all reviews, optionally filtered by item, newest first
    pub async fn get_all(&self, item_id: Option<i32>) -> AppResult<Vec<Review>> {
        let reviews = match item_id {
            Some(id) => {
                sqlx::query_as::<_, Review>(
                    "SELECT * FROM reviews WHERE item_id = $1 ORDER BY creation_date DESC",
                )
                .bind(id)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Review>("SELECT * FROM reviews ORDER BY creation_date DESC")
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(reviews)
    }

    /// Create a new review
    pub async fn create(&self, review: &CreateReview) -> AppResult<Review> {
        let item_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM items WHERE item_id = $1)")
                .bind(review.item_id)
                .fetch_one(&self.pool)
                .await?;
        if !item_exists {
            return Err(AppError::NotFound(
                ErrorCode::NoSuchItem,
                format!("Item {} not found", review.item_id),
            ));
        }

        Ok(sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (item_id, reviewer, rating, content, creation_date)
            VALUES ($1, $2, $3, $4, NOW())
            RETURNING *
            "#,
        )
        .bind(review.item_id)
        .bind(&review.reviewer)
        .bind(review.rating)
        .bind(&review.content)
        .fetch_one(&self.pool)
        .await?)
    }

    /// Aggregate rating for an item
    pub async fn rating(&self, item_id: i32) -> AppResult<ItemRating> {
        sqlx::query_as::<_, ItemRating>(
            r#"
            SELECT i.item_id,
                   COUNT(r.review_id) AS review_count,
                   AVG(r.rating)::numeric(3,2) AS average_rating
            FROM items i
            LEFT JOIN reviews r ON r.item_id = i.item_id
            WHERE i.item_id = $1
            GROUP BY i.item_id
            "#,
        )
        .bind(item_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(ErrorCode::NoSuchItem, format!("Item {} not found", item_id))
        })
    }
}
