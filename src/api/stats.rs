//! Statistics dashboard endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{error::AppResult, AppState};

/// Top-level counters for the dashboard
#[derive(Serialize, ToSchema)]
pub struct DashboardStats {
    pub total_books: i64,
    pub total_customers: i64,
    pub total_orders: i64,
    #[schema(value_type = String, example = "1249.50")]
    pub total_revenue: Decimal,
    pub active_rentals: i64,
    pub total_reviews: i64,
}

/// Book ranked by how often it has been rented
#[derive(Serialize, ToSchema)]
pub struct PopularBook {
    pub isbn: String,
    pub title: String,
    pub rental_count: i64,
}

/// Order row for the recent-activity feed
#[derive(Serialize, ToSchema)]
pub struct RecentOrder {
    pub order_id: i32,
    #[schema(value_type = String, example = "59.98")]
    pub order_amount: Decimal,
    pub order_date: DateTime<Utc>,
    pub customer_name: String,
}

/// Revenue rollup for one calendar month
#[derive(Serialize, ToSchema)]
pub struct MonthlyRevenue {
    /// Month in YYYY-MM form
    pub month: String,
    pub order_count: i64,
    #[schema(value_type = String, example = "843.20")]
    pub total_revenue: Decimal,
}

#[derive(Deserialize, IntoParams)]
pub struct LimitQuery {
    /// Maximum number of rows to return
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    10
}

/// Dashboard counters and total revenue
#[utoipa::path(
    get,
    path = "/stats/dashboard",
    tag = "stats",
    responses(
        (status = 200, description = "Dashboard statistics", body = DashboardStats)
    )
)]
pub async fn get_dashboard(State(state): State<AppState>) -> AppResult<Json<DashboardStats>> {
    let stats = state.services.stats.dashboard().await?;
    Ok(Json(stats))
}

/// Books ranked by rental count
#[utoipa::path(
    get,
    path = "/stats/popular-books",
    tag = "stats",
    params(LimitQuery),
    responses(
        (status = 200, description = "Most rented books", body = [PopularBook])
    )
)]
pub async fn get_popular_books(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> AppResult<Json<Vec<PopularBook>>> {
    let books = state.services.stats.popular_books(query.limit).await?;
    Ok(Json(books))
}

/// Most recent orders
#[utoipa::path(
    get,
    path = "/stats/recent-orders",
    tag = "stats",
    params(LimitQuery),
    responses(
        (status = 200, description = "Latest orders", body = [RecentOrder])
    )
)]
pub async fn get_recent_orders(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> AppResult<Json<Vec<RecentOrder>>> {
    let orders = state.services.stats.recent_orders(query.limit).await?;
    Ok(Json(orders))
}

/// Revenue grouped by calendar month
#[utoipa::path(
    get,
    path = "/stats/revenue-by-month",
    tag = "stats",
    responses(
        (status = 200, description = "Monthly revenue rollup", body = [MonthlyRevenue])
    )
)]
pub async fn get_revenue_by_month(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<MonthlyRevenue>>> {
    let revenue = state.services.stats.revenue_by_month().await?;
    Ok(Json(revenue))
}
