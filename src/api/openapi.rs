//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, customers, health, inventory, items, orders, promotions, rentals, reviews, stats};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookstore API",
        version = "1.0.0",
        description = "Bookstore Management System REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::get_books,
        books::get_books_for_ordering,
        books::get_books_for_renting,
        books::search_books,
        books::get_book,
        books::get_book_copies,
        books::create_book,
        books::get_authors,
        books::search_authors,
        books::get_publishers,
        books::create_publisher,
        books::get_categories,
        // Customers
        customers::get_customers,
        customers::get_customer,
        customers::create_customer,
        // Items
        items::get_items,
        items::get_item,
        items::get_merchandise,
        // Promotions
        promotions::get_promotions,
        promotions::get_active_promotions,
        // Inventory
        inventory::add_copies,
        inventory::get_inventory,
        inventory::get_inventory_for_isbn,
        inventory::get_available_copies,
        // Orders
        orders::get_orders,
        orders::get_order,
        orders::create_order,
        // Rentals
        rentals::get_rentals,
        rentals::get_rental,
        rentals::create_rental,
        rentals::return_rental,
        // Reviews
        reviews::get_reviews,
        reviews::create_review,
        reviews::get_item_rating,
        // Stats
        stats::get_dashboard,
        stats::get_popular_books,
        stats::get_recent_orders,
        stats::get_revenue_by_month,
    ),
    components(
        schemas(
            // Books
            crate::models::book::Book,
            crate::models::book::BookDetail,
            crate::models::book::AvailableBook,
            crate::models::book::BookSearchResult,
            crate::models::book::CreateBook,
            crate::models::book::Author,
            crate::models::book::Publisher,
            crate::models::book::CreatePublisher,
            crate::models::book::Category,
            // Customers
            crate::models::customer::Customer,
            crate::models::customer::CreateCustomer,
            // Items
            crate::models::item::Item,
            crate::models::item::Merchandise,
            // Promotions
            crate::models::promotion::Promotion,
            // Inventory
            crate::models::copy::BookCopy,
            crate::models::copy::AddCopies,
            crate::models::copy::InventorySummary,
            inventory::AvailableCopies,
            // Orders
            crate::models::order::Order,
            crate::models::order::OrderItem,
            crate::models::order::OrderDetails,
            crate::models::order::CreateOrderLine,
            crate::models::order::CreateOrder,
            // Rentals
            crate::models::rental::Rental,
            crate::models::rental::RentalDetails,
            crate::models::rental::CreateRental,
            // Reviews
            crate::models::review::Review,
            crate::models::review::CreateReview,
            crate::models::review::ItemRating,
            // Stats
            stats::DashboardStats,
            stats::PopularBook,
            stats::RecentOrder,
            stats::MonthlyRevenue,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book catalog management"),
        (name = "customers", description = "Customer management"),
        (name = "items", description = "Sellable items"),
        (name = "promotions", description = "Promotions"),
        (name = "inventory", description = "Book copy inventory"),
        (name = "orders", description = "Order management"),
        (name = "rentals", description = "Rental management"),
        (name = "reviews", description = "Item reviews"),
        (name = "stats", description = "Statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
