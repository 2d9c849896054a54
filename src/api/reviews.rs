//! Review endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::AppResult,
    models::review::{CreateReview, ItemRating, Review},
    AppState,
};

#[derive(Deserialize, IntoParams)]
pub struct ReviewListQuery {
    /// Restrict the list to one item's reviews
    pub item_id: Option<i32>,
}

/// List reviews, newest first
#[utoipa::path(
    get,
    path = "/reviews",
    tag = "reviews",
    params(ReviewListQuery),
    responses(
        (status = 200, description = "Reviews", body = [Review])
    )
)]
pub async fn get_reviews(
    State(state): State<AppState>,
    Query(query): Query<ReviewListQuery>,
) -> AppResult<Json<Vec<Review>>> {
    let reviews = state.services.reviews.list_reviews(query.item_id).await?;
    Ok(Json(reviews))
}

/// Submit a review for an item
#[utoipa::path(
    post,
    path = "/reviews",
    tag = "reviews",
    request_body = CreateReview,
    responses(
        (status = 201, description = "Review created", body = Review),
        (status = 400, description = "Rating outside 1..=5"),
        (status = 404, description = "Item not found")
    )
)]
pub async fn create_review(
    State(state): State<AppState>,
    Json(review): Json<CreateReview>,
) -> AppResult<(StatusCode, Json<Review>)> {
    let created = state.services.reviews.create_review(review).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Aggregate rating for an item
#[utoipa::path(
    get,
    path = "/items/{item_id}/rating",
    tag = "reviews",
    params(
        ("item_id" = i32, Path, description = "Item identifier")
    ),
    responses(
        (status = 200, description = "Review count and average rating", body = ItemRating),
        (status = 404, description = "Item not found")
    )
)]
pub async fn get_item_rating(
    State(state): State<AppState>,
    Path(item_id): Path<i32>,
) -> AppResult<Json<ItemRating>> {
    let rating = state.services.reviews.item_rating(item_id).await?;
    Ok(Json(rating))
}
