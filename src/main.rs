//! Bookstore Server - Bookstore Management System
//!
//! A REST API server for running a bookstore: book catalog, per-copy
//! inventory, customer orders with promotions, rentals and reviews.

use axum::{
    routing::{get, post},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookstore_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("bookstore_server={},tower_http=debug", config.logging.level).into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Bookstore Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services =
        Services::new(repository, config.rental.clone()).expect("Failed to create services");

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Books
        .route("/books", get(api::books::get_books))
        .route("/books", post(api::books::create_book))
        .route("/books/for-ordering", get(api::books::get_books_for_ordering))
        .route("/books/for-renting", get(api::books::get_books_for_renting))
        .route("/books/search/:keyword", get(api::books::search_books))
        .route("/books/:isbn", get(api::books::get_book))
        .route("/books/:isbn/copies", get(api::books::get_book_copies))
        // Authors
        .route("/authors", get(api::books::get_authors))
        .route("/authors/search/:name", get(api::books::search_authors))
        // Publishers
        .route("/publishers", get(api::books::get_publishers))
        .route("/publishers", post(api::books::create_publisher))
        // Categories
        .route("/categories", get(api::books::get_categories))
        // Customers
        .route("/customers", get(api::customers::get_customers))
        .route("/customers", post(api::customers::create_customer))
        .route("/customers/:id", get(api::customers::get_customer))
        // Items
        .route("/items", get(api::items::get_items))
        .route("/items/:id", get(api::items::get_item))
        .route("/items/:id/rating", get(api::reviews::get_item_rating))
        .route("/merchandise", get(api::items::get_merchandise))
        // Promotions
        .route("/promotions", get(api::promotions::get_promotions))
        .route("/promotions/active", get(api::promotions::get_active_promotions))
        // Inventory
        .route("/inventory", get(api::inventory::get_inventory))
        .route("/inventory/:isbn", get(api::inventory::get_inventory_for_isbn))
        .route("/inventory/:isbn/copies", post(api::inventory::add_copies))
        .route(
            "/inventory/:isbn/available",
            get(api::inventory::get_available_copies),
        )
        // Orders
        .route("/orders", get(api::orders::get_orders))
        .route("/orders", post(api::orders::create_order))
        .route("/orders/:id", get(api::orders::get_order))
        // Rentals
        .route("/rentals", get(api::rentals::get_rentals))
        .route("/rentals", post(api::rentals::create_rental))
        .route("/rentals/:id", get(api::rentals::get_rental))
        .route("/rentals/:id/return", post(api::rentals::return_rental))
        // Reviews
        .route("/reviews", get(api::reviews::get_reviews))
        .route("/reviews", post(api::reviews::create_review))
        // Statistics
        .route("/stats/dashboard", get(api::stats::get_dashboard))
        .route("/stats/popular-books", get(api::stats::get_popular_books))
        .route("/stats/recent-orders", get(api::stats::get_recent_orders))
        .route(
            "/stats/revenue-by-month",
            get(api::stats::get_revenue_by_month),
        )
        .with_state(state.clone());

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
