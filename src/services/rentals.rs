//! Rental management service

use crate::{
    config::RentalConfig,
    error::AppResult,
    models::rental::RentalDetails,
    repository::Repository,
};

#[derive(Clone)]
pub struct RentalsService {
    repository: Repository,
    config: RentalConfig,
}

impl RentalsService {
    pub fn new(repository: Repository, config: RentalConfig) -> Self {
        Self { repository, config }
    }

    /// Get all rentals, optionally filtered by customer
    pub async fn list_rentals(&self, customer_id: Option<i32>) -> AppResult<Vec<RentalDetails>> {
        if let Some(id) = customer_id {
            // Verify the customer exists
            self.repository.customers.get_by_id(id).await?;
        }
        self.repository.rentals.get_all(customer_id).await
    }

    /// Get a single rental by ID
    pub async fn get_rental(&self, rental_id: i32) -> AppResult<RentalDetails> {
        self.repository.rentals.get_by_id(rental_id).await
    }

    /// Rent a book by ISBN for a customer
    pub async fn rent_book(&self, customer_id: i32, isbn: &str) -> AppResult<RentalDetails> {
        self.repository
            .rentals
            .create(customer_id, isbn, self.config.grace_period_days)
            .await
    }

    /// Return a rented book, computing the overdue penalty
    pub async fn return_book(&self, rental_id: i32) -> AppResult<RentalDetails> {
        self.repository
            .rentals
            .return_rental(
                rental_id,
                self.config.grace_period_days,
                self.config.daily_penalty_rate,
            )
            .await
    }
}
