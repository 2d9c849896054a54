//! Order endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::order::{CreateOrder, OrderDetails},
    AppState,
};

/// List all orders with their line items
#[utoipa::path(
    get,
    path = "/orders",
    tag = "orders",
    responses(
        (status = 200, description = "All orders", body = [OrderDetails])
    )
)]
pub async fn get_orders(State(state): State<AppState>) -> AppResult<Json<Vec<OrderDetails>>> {
    let orders = state.services.orders.list_orders().await?;
    Ok(Json(orders))
}

/// Get a single order by id
#[utoipa::path(
    get,
    path = "/orders/{order_id}",
    tag = "orders",
    params(
        ("order_id" = i32, Path, description = "Order identifier")
    ),
    responses(
        (status = 200, description = "Order found", body = OrderDetails),
        (status = 404, description = "Order not found")
    )
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<i32>,
) -> AppResult<Json<OrderDetails>> {
    let order = state.services.orders.get_order(order_id).await?;
    Ok(Json(order))
}

/// Place a new order
#[utoipa::path(
    post,
    path = "/orders",
    tag = "orders",
    request_body = CreateOrder,
    responses(
        (status = 201, description = "Order placed", body = OrderDetails),
        (status = 400, description = "Invalid order data"),
        (status = 404, description = "Customer, promotion, book or item not found"),
        (status = 422, description = "Not enough copies in stock")
    )
)]
pub async fn create_order(
    State(state): State<AppState>,
    Json(order): Json<CreateOrder>,
) -> AppResult<(StatusCode, Json<OrderDetails>)> {
    let created = state.services.orders.create_order(order).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
