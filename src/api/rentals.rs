//! Rental endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::AppResult,
    models::rental::{CreateRental, RentalDetails},
    AppState,
};

#[derive(Deserialize, IntoParams)]
pub struct RentalListQuery {
    /// Restrict the list to one customer's rentals
    pub customer_id: Option<i32>,
}

/// List rentals, newest first
#[utoipa::path(
    get,
    path = "/rentals",
    tag = "rentals",
    params(RentalListQuery),
    responses(
        (status = 200, description = "Rentals with book and customer info", body = [RentalDetails]),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn get_rentals(
    State(state): State<AppState>,
    Query(query): Query<RentalListQuery>,
) -> AppResult<Json<Vec<RentalDetails>>> {
    let rentals = state.services.rentals.list_rentals(query.customer_id).await?;
    Ok(Json(rentals))
}

/// Get a single rental by id
#[utoipa::path(
    get,
    path = "/rentals/{rental_id}",
    tag = "rentals",
    params(
        ("rental_id" = i32, Path, description = "Rental identifier")
    ),
    responses(
        (status = 200, description = "Rental found", body = RentalDetails),
        (status = 404, description = "Rental not found")
    )
)]
pub async fn get_rental(
    State(state): State<AppState>,
    Path(rental_id): Path<i32>,
) -> AppResult<Json<RentalDetails>> {
    let rental = state.services.rentals.get_rental(rental_id).await?;
    Ok(Json(rental))
}

/// Rent an available copy of a book
#[utoipa::path(
    post,
    path = "/rentals",
    tag = "rentals",
    request_body = CreateRental,
    responses(
        (status = 201, description = "Rental created", body = RentalDetails),
        (status = 404, description = "Customer or book not found"),
        (status = 422, description = "No rentable copy available")
    )
)]
pub async fn create_rental(
    State(state): State<AppState>,
    Json(rental): Json<CreateRental>,
) -> AppResult<(StatusCode, Json<RentalDetails>)> {
    let created = state
        .services
        .rentals
        .rent_book(rental.customer_id, &rental.isbn)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Return a rented book, computing any overdue penalty
#[utoipa::path(
    post,
    path = "/rentals/{rental_id}/return",
    tag = "rentals",
    params(
        ("rental_id" = i32, Path, description = "Rental identifier")
    ),
    responses(
        (status = 200, description = "Book returned", body = RentalDetails),
        (status = 404, description = "Rental not found"),
        (status = 409, description = "Rental already returned")
    )
)]
pub async fn return_rental(
    State(state): State<AppState>,
    Path(rental_id): Path<i32>,
) -> AppResult<Json<RentalDetails>> {
    let returned = state.services.rentals.return_book(rental_id).await?;
    Ok(Json(returned))
}
