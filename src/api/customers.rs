//! Customer endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::customer::{CreateCustomer, Customer},
    AppState,
};

/// List all customers
#[utoipa::path(
    get,
    path = "/customers",
    tag = "customers",
    responses(
        (status = 200, description = "All customers", body = [Customer])
    )
)]
pub async fn get_customers(State(state): State<AppState>) -> AppResult<Json<Vec<Customer>>> {
    let customers = state.services.catalog.list_customers().await?;
    Ok(Json(customers))
}

/// Get a single customer by id
#[utoipa::path(
    get,
    path = "/customers/{customer_id}",
    tag = "customers",
    params(
        ("customer_id" = i32, Path, description = "Customer identifier")
    ),
    responses(
        (status = 200, description = "Customer found", body = Customer),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn get_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<i32>,
) -> AppResult<Json<Customer>> {
    let customer = state.services.catalog.get_customer(customer_id).await?;
    Ok(Json(customer))
}

/// Register a new customer
#[utoipa::path(
    post,
    path = "/customers",
    tag = "customers",
    request_body = CreateCustomer,
    responses(
        (status = 201, description = "Customer created", body = Customer),
        (status = 400, description = "Invalid customer data"),
        (status = 409, description = "Phone number already registered")
    )
)]
pub async fn create_customer(
    State(state): State<AppState>,
    Json(customer): Json<CreateCustomer>,
) -> AppResult<(StatusCode, Json<Customer>)> {
    let created = state.services.catalog.create_customer(customer).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
