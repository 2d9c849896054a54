//! Sellable item endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::AppResult,
    models::item::{Item, Merchandise},
    AppState,
};

#[derive(Deserialize, IntoParams)]
pub struct ItemTypeQuery {
    /// Filter items by type (`book` or `merchandise`)
    pub item_type: Option<String>,
}

/// List all sellable items
#[utoipa::path(
    get,
    path = "/items",
    tag = "items",
    params(ItemTypeQuery),
    responses(
        (status = 200, description = "All items", body = [Item])
    )
)]
pub async fn get_items(
    State(state): State<AppState>,
    Query(query): Query<ItemTypeQuery>,
) -> AppResult<Json<Vec<Item>>> {
    let items = state
        .services
        .catalog
        .list_items(query.item_type.as_deref())
        .await?;
    Ok(Json(items))
}

/// Get a single item by id
#[utoipa::path(
    get,
    path = "/items/{item_id}",
    tag = "items",
    params(
        ("item_id" = i32, Path, description = "Item identifier")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 404, description = "Item not found")
    )
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(item_id): Path<i32>,
) -> AppResult<Json<Item>> {
    let item = state.services.catalog.get_item(item_id).await?;
    Ok(Json(item))
}

/// List merchandise items with their category
#[utoipa::path(
    get,
    path = "/merchandise",
    tag = "items",
    responses(
        (status = 200, description = "All merchandise", body = [Merchandise])
    )
)]
pub async fn get_merchandise(State(state): State<AppState>) -> AppResult<Json<Vec<Merchandise>>> {
    let merchandise = state.services.catalog.list_merchandise().await?;
    Ok(Json(merchandise))
}
