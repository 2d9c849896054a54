//! API handlers for the bookstore REST endpoints

pub mod books;
pub mod customers;
pub mod health;
pub mod inventory;
pub mod items;
pub mod openapi;
pub mod orders;
pub mod promotions;
pub mod rentals;
pub mod reviews;
pub mod stats;
