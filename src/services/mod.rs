//! Business logic services

pub mod catalog;
pub mod inventory;
pub mod orders;
pub mod rentals;
pub mod reviews;
pub mod stats;

use sqlx::{Pool, Postgres};

use crate::{config::RentalConfig, error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub inventory: inventory::InventoryService,
    pub orders: orders::OrdersService,
    pub rentals: rentals::RentalsService,
    pub reviews: reviews::ReviewsService,
    pub stats: stats::StatsService,
    pool: Pool<Postgres>,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, rental_config: RentalConfig) -> AppResult<Self> {
        let pool = repository.pool.clone();
        Ok(Self {
            catalog: catalog::CatalogService::new(repository.clone()),
            inventory: inventory::InventoryService::new(repository.clone()),
            orders: orders::OrdersService::new(repository.clone()),
            rentals: rentals::RentalsService::new(repository.clone(), rental_config),
            reviews: reviews::ReviewsService::new(repository.clone()),
            stats: stats::StatsService::new(repository),
            pool,
        })
    }

    /// Shared database pool, used by readiness probes
    pub fn pool(&self) -> &Pool<Postgres> {
        &self.pool
    }
}
