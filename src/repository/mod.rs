//! Repository layer for database operations

pub mod books;
pub mod customers;
pub mod inventory;
pub mod items;
pub mod orders;
pub mod promotions;
pub mod rentals;
pub mod reviews;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub books: books::BooksRepository,
    pub customers: customers::CustomersRepository,
    pub inventory: inventory::InventoryRepository,
    pub items: items::ItemsRepository,
    pub orders: orders::OrdersRepository,
    pub promotions: promotions::PromotionsRepository,
    pub rentals: rentals::RentalsRepository,
    pub reviews: reviews::ReviewsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            books: books::BooksRepository::new(pool.clone()),
            customers: customers::CustomersRepository::new(pool.clone()),
            inventory: inventory::InventoryRepository::new(pool.clone()),
            items: items::ItemsRepository::new(pool.clone()),
            orders: orders::OrdersRepository::new(pool.clone()),
            promotions: promotions::PromotionsRepository::new(pool.clone()),
            rentals: rentals::RentalsRepository::new(pool.clone()),
            reviews: reviews::ReviewsRepository::new(pool.clone()),
            pool,
        }
    }
}
