//! Data models for the bookstore server

pub mod book;
pub mod copy;
pub mod customer;
pub mod item;
pub mod order;
pub mod promotion;
pub mod rental;
pub mod review;

// Re-export commonly used types
pub use book::{Author, Book, BookDetail, Category, Publisher};
pub use copy::{BookCopy, CopyStatus, InventorySummary};
pub use customer::Customer;
pub use item::{Item, Merchandise};
pub use order::{Order, OrderItem};
pub use promotion::Promotion;
pub use rental::{Rental, RentalDetails};
pub use review::Review;
