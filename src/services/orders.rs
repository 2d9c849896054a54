//! Order management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::order::{CreateOrder, OrderDetails},
    repository::Repository,
};

#[derive(Clone)]
pub struct OrdersService {
    repository: Repository,
}

impl OrdersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get all orders
    pub async fn list_orders(&self) -> AppResult<Vec<OrderDetails>> {
        self.repository.orders.get_all().await
    }

    /// Get a single order by ID
    pub async fn get_order(&self, order_id: i32) -> AppResult<OrderDetails> {
        self.repository.orders.get_by_id(order_id).await
    }

    /// Create a new order
    pub async fn create_order(&self, order: CreateOrder) -> AppResult<OrderDetails> {
        order
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.orders.create(&order).await
    }
}
