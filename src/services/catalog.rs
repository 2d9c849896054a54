//! Catalog service: books, authors, publishers, categories, items

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{
        Author, AvailableBook, BookDetail, BookSearchResult, Category, CreateBook,
        CreatePublisher, Publisher,
    },
    models::customer::{CreateCustomer, Customer},
    models::item::{Item, Merchandise},
    models::promotion::Promotion,
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_books(&self) -> AppResult<Vec<BookDetail>> {
        self.repository.books.get_all().await
    }

    pub async fn get_book(&self, isbn: &str) -> AppResult<BookDetail> {
        self.repository.books.get_by_isbn(isbn).await
    }

    pub async fn list_books_for_ordering(&self) -> AppResult<Vec<AvailableBook>> {
        self.repository.books.get_for_ordering().await
    }

    pub async fn list_books_for_renting(&self) -> AppResult<Vec<AvailableBook>> {
        self.repository.books.get_for_renting().await
    }

    pub async fn search_books(&self, keyword: &str) -> AppResult<Vec<BookSearchResult>> {
        self.repository.books.search(keyword).await
    }

    pub async fn create_book(&self, book: CreateBook) -> AppResult<BookDetail> {
        book.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        if let Some(price) = book.price {
            if price <= rust_decimal::Decimal::ZERO {
                return Err(AppError::Validation("price must be positive".into()));
            }
        }
        self.repository.books.create(&book).await
    }

    pub async fn list_authors(&self) -> AppResult<Vec<Author>> {
        self.repository.books.get_all_authors().await
    }

    pub async fn search_authors(&self, name: &str) -> AppResult<Vec<Author>> {
        self.repository.books.search_authors(name).await
    }

    pub async fn list_publishers(&self) -> AppResult<Vec<Publisher>> {
        self.repository.books.get_all_publishers().await
    }

    pub async fn create_publisher(&self, publisher: CreatePublisher) -> AppResult<Publisher> {
        publisher
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        let name = publisher.publisher_name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("publisher name is required".into()));
        }
        let city = publisher
            .publisher_city
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());
        self.repository.books.create_publisher(name, city).await
    }

    pub async fn list_categories(&self) -> AppResult<Vec<Category>> {
        self.repository.books.get_all_categories().await
    }

    pub async fn list_customers(&self) -> AppResult<Vec<Customer>> {
        self.repository.customers.get_all().await
    }

    pub async fn get_customer(&self, customer_id: i32) -> AppResult<Customer> {
        self.repository.customers.get_by_id(customer_id).await
    }

    pub async fn create_customer(&self, customer: CreateCustomer) -> AppResult<Customer> {
        customer
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.customers.create(&customer).await
    }

    pub async fn list_items(&self, item_type: Option<&str>) -> AppResult<Vec<Item>> {
        self.repository.items.get_all(item_type).await
    }

    pub async fn get_item(&self, item_id: i32) -> AppResult<Item> {
        self.repository.items.get_by_id(item_id).await
    }

    pub async fn list_merchandise(&self) -> AppResult<Vec<Merchandise>> {
        self.repository.items.get_merchandise().await
    }

    pub async fn list_promotions(&self) -> AppResult<Vec<Promotion>> {
        self.repository.promotions.get_all().await
    }

    pub async fn list_active_promotions(&self) -> AppResult<Vec<Promotion>> {
        self.repository.promotions.get_active().await
    }
}
