//! Promotion endpoints

use axum::{extract::State, Json};

use crate::{error::AppResult, models::promotion::Promotion, AppState};

/// List all promotions, newest first
#[utoipa::path(
    get,
    path = "/promotions",
    tag = "promotions",
    responses(
        (status = 200, description = "All promotions", body = [Promotion])
    )
)]
pub async fn get_promotions(State(state): State<AppState>) -> AppResult<Json<Vec<Promotion>>> {
    let promotions = state.services.catalog.list_promotions().await?;
    Ok(Json(promotions))
}

/// List promotions whose date window covers today
#[utoipa::path(
    get,
    path = "/promotions/active",
    tag = "promotions",
    responses(
        (status = 200, description = "Currently active promotions", body = [Promotion])
    )
)]
pub async fn get_active_promotions(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Promotion>>> {
    let promotions = state.services.catalog.list_active_promotions().await?;
    Ok(Json(promotions))
}
