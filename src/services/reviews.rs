//! Review service (append-only ledger)

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::review::{CreateReview, ItemRating, Review},
    repository::Repository,
};

#[derive(Clone)]
pub struct ReviewsService {
    repository: Repository,
}

impl ReviewsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get all reviews, optionally filtered by item
    pub async fn list_reviews(&self, item_id: Option<i32>) -> AppResult<Vec<Review>> {
        self.repository.reviews.get_all(item_id).await
    }

    /// Create a new review
    pub async fn create_review(&self, review: CreateReview) -> AppResult<Review> {
        review
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.reviews.create(&review).await
    }

    /// Aggregate rating for an item
    pub async fn item_rating(&self, item_id: i32) -> AppResult<ItemRating> {
        self.repository.reviews.rating(item_id).await
    }
}
