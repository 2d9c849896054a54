//! Statistics service
//!
//! All rollups are recomputed per request over the live tables; they
//! are best-effort snapshots, not incrementally maintained views.

use sqlx::Row;

use crate::{
    api::stats::{DashboardStats, MonthlyRevenue, PopularBook, RecentOrder},
    error::AppResult,
    repository::Repository,
};

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Dashboard counters and revenue sum
    pub async fn dashboard(&self) -> AppResult<DashboardStats> {
        let pool = &self.repository.pool;

        let total_books: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(pool)
            .await?;

        let total_customers: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(pool)
            .await?;

        let total_orders: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(pool)
            .await?;

        let total_revenue = sqlx::query_scalar::<_, rust_decimal::Decimal>(
            "SELECT COALESCE(SUM(order_amount), 0) FROM orders",
        )
        .fetch_one(pool)
        .await?;

        let active_rentals = self.repository.rentals.count_active().await?;

        let total_reviews: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reviews")
            .fetch_one(pool)
            .await?;

        Ok(DashboardStats {
            total_books,
            total_customers,
            total_orders,
            total_revenue,
            active_rentals,
            total_reviews,
        })
    }

    /// Books ranked by rental count, most rented first
    pub async fn popular_books(&self, limit: i64) -> AppResult<Vec<PopularBook>> {
        let rows = sqlx::query(
            r#"
            SELECT b.isbn,
                   b.title,
                   COUNT(r.rental_id) AS rental_count
            FROM books b
            LEFT JOIN book_copies bc ON b.isbn = bc.isbn
            LEFT JOIN rentals r ON bc.copy_id = r.copy_id
            GROUP BY b.isbn, b.title
            ORDER BY rental_count DESC, b.isbn
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.repository.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| PopularBook {
                isbn: row.get("isbn"),
                title: row.get("title"),
                rental_count: row.get("rental_count"),
            })
            .collect())
    }

    /// Most recent orders with customer names
    pub async fn recent_orders(&self, limit: i64) -> AppResult<Vec<RecentOrder>> {
        let rows = sqlx::query(
            r#"
            SELECT o.order_id,
                   o.order_amount,
                   o.order_date,
                   c.first_name || ' ' || c.last_name AS customer_name
            FROM orders o
            JOIN customers c ON o.customer_id = c.customer_id
            ORDER BY o.order_date DESC, o.order_id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.repository.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| RecentOrder {
                order_id: row.get("order_id"),
                order_amount: row.get("order_amount"),
                order_date: row.get("order_date"),
                customer_name: row.get("customer_name"),
            })
            .collect())
    }

    /// Revenue grouped by month, latest 12 months with orders
    pub async fn revenue_by_month(&self) -> AppResult<Vec<MonthlyRevenue>> {
        let rows = sqlx::query(
            r#"
            SELECT TO_CHAR(DATE_TRUNC('month', order_date), 'YYYY-MM') AS month,
                   COUNT(*) AS order_count,
                   SUM(order_amount) AS total_revenue
            FROM orders
            GROUP BY DATE_TRUNC('month', order_date)
            ORDER BY month DESC
            LIMIT 12
            "#,
        )
        .fetch_all(&self.repository.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| MonthlyRevenue {
                month: row.get("month"),
                order_count: row.get("order_count"),
                total_revenue: row.get("total_revenue"),
            })
            .collect())
    }
}
