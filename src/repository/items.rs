//! Items repository: generic sellable items and merchandise

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult, ErrorCode},
    models::item::{Item, Merchandise},
};

#[derive(Clone)]
pub struct ItemsRepository {
    pool: Pool<Postgres>,
}

impl ItemsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get all items, optionally filtered by type ('book' / 'merchandise')
    pub async fn get_all(&self, item_type: Option<&str>) -> AppResult<Vec<Item>> {
        let items = match item_type {
            Some(t) => {
                sqlx::query_as::<_, Item>(
                    "SELECT * FROM items WHERE item_type = $1 ORDER BY item_id",
                )
                .bind(t)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Item>("SELECT * FROM items ORDER BY item_id")
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(items)
    }

    /// Get a single item by ID
    pub async fn get_by_id(&self, item_id: i32) -> AppResult<Item> {
        sqlx::query_as::<_, Item>("SELECT * FROM items WHERE item_id = $1")
            .bind(item_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(ErrorCode::NoSuchItem, format!("Item {} not found", item_id))
            })
    }

    /// Get all merchandise items with their category
    pub async fn get_merchandise(&self) -> AppResult<Vec<Merchandise>> {
        Ok(sqlx::query_as::<_, Merchandise>(
            r#"
            SELECT i.item_id, i.description, i.price, c.category_name
            FROM merchandise m
            JOIN items i ON m.item_id = i.item_id
            JOIN categories c ON m.category_id = c.category_id
            ORDER BY i.item_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?)
    }
}
