//! Book copy inventory endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::{AppError, AppResult, ErrorCode},
    models::copy::{AddCopies, BookCopy, InventorySummary},
    AppState,
};

/// Available copies of one ISBN together with their count
#[derive(Serialize, ToSchema)]
pub struct AvailableCopies {
    pub isbn: String,
    pub available_count: i64,
    pub copies: Vec<BookCopy>,
}

/// Add copies of a book to inventory
#[utoipa::path(
    post,
    path = "/inventory/{isbn}/copies",
    tag = "inventory",
    params(
        ("isbn" = String, Path, description = "Book ISBN")
    ),
    request_body = AddCopies,
    responses(
        (status = 201, description = "Copies added", body = [BookCopy]),
        (status = 400, description = "Invalid quantity or price"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn add_copies(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    Json(request): Json<AddCopies>,
) -> AppResult<(StatusCode, Json<Vec<BookCopy>>)> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let copies = state
        .services
        .inventory
        .add_copies(&isbn, request.quantity, request.price, request.can_rent)
        .await?;
    Ok((StatusCode::CREATED, Json(copies)))
}

/// Inventory summary for the whole catalog
#[utoipa::path(
    get,
    path = "/inventory",
    tag = "inventory",
    responses(
        (status = 200, description = "Copy counts per ISBN", body = [InventorySummary])
    )
)]
pub async fn get_inventory(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<InventorySummary>>> {
    let summary = state.services.inventory.summary(None).await?;
    Ok(Json(summary))
}

/// Inventory summary for one ISBN
#[utoipa::path(
    get,
    path = "/inventory/{isbn}",
    tag = "inventory",
    params(
        ("isbn" = String, Path, description = "Book ISBN")
    ),
    responses(
        (status = 200, description = "Copy counts for the ISBN", body = InventorySummary),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_inventory_for_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<InventorySummary>> {
    let mut summary = state.services.inventory.summary(Some(&isbn)).await?;
    summary
        .pop()
        .map(Json)
        .ok_or_else(|| {
            AppError::NotFound(ErrorCode::NoSuchBook, format!("Book with ISBN {isbn} not found"))
        })
}

/// Available copies of one ISBN
#[utoipa::path(
    get,
    path = "/inventory/{isbn}/available",
    tag = "inventory",
    params(
        ("isbn" = String, Path, description = "Book ISBN")
    ),
    responses(
        (status = 200, description = "Available copies", body = AvailableCopies),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_available_copies(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<AvailableCopies>> {
    let copies = state.services.inventory.available_copies(&isbn).await?;
    Ok(Json(AvailableCopies {
        isbn,
        available_count: copies.len() as i64,
        copies,
    }))
}
