//! Inventory management service

use rust_decimal::Decimal;

use crate::{
    error::AppResult,
    models::copy::{BookCopy, InventorySummary},
    repository::Repository,
};

#[derive(Clone)]
pub struct InventoryService {
    repository: Repository,
}

impl InventoryService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Add copies of a book to inventory
    pub async fn add_copies(
        &self,
        isbn: &str,
        quantity: i32,
        price: Decimal,
        can_rent: bool,
    ) -> AppResult<Vec<BookCopy>> {
        self.repository
            .inventory
            .add_copies(isbn, quantity, price, can_rent)
            .await
    }

    /// List every copy of an ISBN regardless of status
    pub async fn copies(&self, isbn: &str) -> AppResult<Vec<BookCopy>> {
        self.repository.books.get_by_isbn(isbn).await?;
        self.repository.inventory.copies(isbn).await
    }

    /// List available copies for an ISBN
    pub async fn available_copies(&self, isbn: &str) -> AppResult<Vec<BookCopy>> {
        // Verify the book exists so an unknown ISBN is a 404, not an
        // empty list.
        self.repository.books.get_by_isbn(isbn).await?;
        self.repository.inventory.available_copies(isbn).await
    }

    /// Inventory summary for the whole catalog or one ISBN
    pub async fn summary(&self, isbn: Option<&str>) -> AppResult<Vec<InventorySummary>> {
        self.repository.inventory.summary(isbn).await
    }
}
