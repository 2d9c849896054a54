//! Books repository for catalog database operations

use sqlx::{PgConnection, Pool, Postgres};

use crate::{
    error::{AppError, AppResult, ErrorCode},
    models::book::{
        Author, AvailableBook, BookDetail, BookSearchResult, Category, CreateBook, Publisher,
    },
};

const BOOK_DETAIL_SELECT: &str = r#"
    SELECT b.isbn,
           b.title,
           a.first_name || ' ' || a.last_name AS author_name,
           cat.category_name,
           pub.publisher_name,
           b.publication_year,
           COUNT(bc.copy_id) AS number_of_copies
    FROM books b
    JOIN publishers pub ON b.publisher_id = pub.publisher_id
    JOIN categories cat ON b.category_id = cat.category_id
    JOIN book_authors ba ON b.isbn = ba.isbn
    JOIN authors a ON ba.author_id = a.author_id
    LEFT JOIN book_copies bc ON b.isbn = bc.isbn
"#;

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get all books with author, category and publisher names
    pub async fn get_all(&self) -> AppResult<Vec<BookDetail>> {
        let query = format!(
            "{BOOK_DETAIL_SELECT}
             GROUP BY b.isbn, b.title, a.first_name, a.last_name,
                      cat.category_name, pub.publisher_name, b.publication_year
             ORDER BY b.title"
        );
        Ok(sqlx::query_as::<_, BookDetail>(&query)
            .fetch_all(&self.pool)
            .await?)
    }

    /// Get a single book by ISBN
    pub async fn get_by_isbn(&self, isbn: &str) -> AppResult<BookDetail> {
        let query = format!(
            "{BOOK_DETAIL_SELECT}
             WHERE b.isbn = $1
             GROUP BY b.isbn, b.title, a.first_name, a.last_name,
                      cat.category_name, pub.publisher_name, b.publication_year"
        );
        sqlx::query_as::<_, BookDetail>(&query)
            .bind(isbn)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(
                    ErrorCode::NoSuchBook,
                    format!("Book with ISBN {} not found", isbn),
                )
            })
    }

    /// Check a book exists, returning its title
    pub async fn title_of(conn: &mut PgConnection, isbn: &str) -> AppResult<String> {
        sqlx::query_scalar::<_, String>("SELECT title FROM books WHERE isbn = $1")
            .bind(isbn)
            .fetch_optional(conn)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(
                    ErrorCode::NoSuchBook,
                    format!("Book with ISBN {} not found", isbn),
                )
            })
    }

    /// Books with at least one available copy, for the ordering view
    pub async fn get_for_ordering(&self) -> AppResult<Vec<AvailableBook>> {
        self.available_books(false).await
    }

    /// Books with at least one available, rentable copy
    pub async fn get_for_renting(&self) -> AppResult<Vec<AvailableBook>> {
        self.available_books(true).await
    }

    async fn available_books(&self, rentable_only: bool) -> AppResult<Vec<AvailableBook>> {
        let copy_filter = if rentable_only { "AND bc.can_rent" } else { "" };
        let query = format!(
            r#"
            SELECT b.isbn,
                   b.title,
                   a.first_name || ' ' || a.last_name AS author_name,
                   cat.category_name,
                   pub.publisher_name,
                   b.publication_year,
                   COUNT(bc.copy_id) AS available_copies
            FROM books b
            JOIN publishers pub ON b.publisher_id = pub.publisher_id
            JOIN categories cat ON b.category_id = cat.category_id
            JOIN book_authors ba ON b.isbn = ba.isbn
            JOIN authors a ON ba.author_id = a.author_id
            JOIN book_copies bc ON b.isbn = bc.isbn
                AND bc.status = 'available' {copy_filter}
            GROUP BY b.isbn, b.title, a.first_name, a.last_name,
                     cat.category_name, pub.publisher_name, b.publication_year
            ORDER BY b.title
            "#
        );
        Ok(sqlx::query_as::<_, AvailableBook>(&query)
            .fetch_all(&self.pool)
            .await?)
    }

    /// Search books by title, author name or ISBN
    pub async fn search(&self, keyword: &str) -> AppResult<Vec<BookSearchResult>> {
        let pattern = format!("%{}%", keyword);
        Ok(sqlx::query_as::<_, BookSearchResult>(
            r#"
            SELECT DISTINCT b.isbn,
                   b.title,
                   a.first_name || ' ' || a.last_name AS author_name,
                   cat.category_name
            FROM books b
            JOIN book_authors ba ON b.isbn = ba.isbn
            JOIN authors a ON ba.author_id = a.author_id
            JOIN categories cat ON b.category_id = cat.category_id
            WHERE b.title ILIKE $1 OR a.first_name ILIKE $1 OR a.last_name ILIKE $1
               OR b.isbn ILIKE $1
            ORDER BY b.title
            "#,
        )
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?)
    }

    /// Create a book together with its author link and, when a price is
    /// given, one initial copy. Everything runs in one transaction.
    pub async fn create(&self, book: &CreateBook) -> AppResult<BookDetail> {
        let mut tx = self.pool.begin().await?;

        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE isbn = $1)")
            .bind(&book.isbn)
            .fetch_one(&mut *tx)
            .await?;
        if exists {
            return Err(AppError::Conflict(
                ErrorCode::Duplicate,
                format!("Book with ISBN {} already exists", book.isbn),
            ));
        }

        let publisher_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM publishers WHERE publisher_id = $1)")
                .bind(book.publisher_id)
                .fetch_one(&mut *tx)
                .await?;
        if !publisher_exists {
            return Err(AppError::NotFound(
                ErrorCode::NoSuchItem,
                format!("Publisher {} not found", book.publisher_id),
            ));
        }

        let category_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM categories WHERE category_id = $1)")
                .bind(book.category_id)
                .fetch_one(&mut *tx)
                .await?;
        if !category_exists {
            return Err(AppError::NotFound(
                ErrorCode::NoSuchItem,
                format!("Category {} not found", book.category_id),
            ));
        }

        sqlx::query(
            r#"
            INSERT INTO books (isbn, title, publication_year, publisher_id, category_id)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&book.isbn)
        .bind(&book.title)
        .bind(book.publication_year)
        .bind(book.publisher_id)
        .bind(book.category_id)
        .execute(&mut *tx)
        .await?;

        // Reuse an author with the same name, create one otherwise
        let author_id: i32 = match sqlx::query_scalar::<_, i32>(
            "SELECT author_id FROM authors WHERE first_name = $1 AND last_name = $2",
        )
        .bind(&book.author_first_name)
        .bind(&book.author_last_name)
        .fetch_optional(&mut *tx)
        .await?
        {
            Some(id) => id,
            None => {
                let initials = book.author_initials.clone().unwrap_or_else(|| {
                    let mut s = String::new();
                    if let Some(c) = book.author_first_name.chars().next() {
                        s.push(c);
                        s.push('.');
                    }
                    if let Some(c) = book.author_last_name.chars().next() {
                        s.push(c);
                        s.push('.');
                    }
                    s
                });
                sqlx::query_scalar::<_, i32>(
                    r#"
                    INSERT INTO authors (first_name, last_name, initials)
                    VALUES ($1, $2, $3)
                    RETURNING author_id
                    "#,
                )
                .bind(&book.author_first_name)
                .bind(&book.author_last_name)
                .bind(&initials)
                .fetch_one(&mut *tx)
                .await?
            }
        };

        sqlx::query("INSERT INTO book_authors (isbn, author_id) VALUES ($1, $2)")
            .bind(&book.isbn)
            .bind(author_id)
            .execute(&mut *tx)
            .await?;

        if let Some(price) = book.price {
            super::inventory::InventoryRepository::insert_copies(
                &mut tx,
                &book.isbn,
                &book.title,
                1,
                price,
                book.can_rent,
            )
            .await?;
        }

        tx.commit().await?;

        self.get_by_isbn(&book.isbn).await
    }

    /// Get all authors
    pub async fn get_all_authors(&self) -> AppResult<Vec<Author>> {
        Ok(
            sqlx::query_as::<_, Author>("SELECT * FROM authors ORDER BY last_name, first_name")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    /// Search authors by first or last name
    pub async fn search_authors(&self, name: &str) -> AppResult<Vec<Author>> {
        let pattern = format!("%{}%", name);
        Ok(sqlx::query_as::<_, Author>(
            "SELECT * FROM authors WHERE first_name ILIKE $1 OR last_name ILIKE $1",
        )
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?)
    }

    /// Get all publishers
    pub async fn get_all_publishers(&self) -> AppResult<Vec<Publisher>> {
        Ok(
            sqlx::query_as::<_, Publisher>("SELECT * FROM publishers ORDER BY publisher_name")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    /// Create a publisher
    pub async fn create_publisher(
        &self,
        name: &str,
        city: Option<&str>,
    ) -> AppResult<Publisher> {
        Ok(sqlx::query_as::<_, Publisher>(
            r#"
            INSERT INTO publishers (publisher_name, publisher_city)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(city)
        .fetch_one(&self.pool)
        .await?)
    }

    /// Get all categories
    pub async fn get_all_categories(&self) -> AppResult<Vec<Category>> {
        Ok(
            sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY category_name")
                .fetch_all(&self.pool)
                .await?,
        )
    }
}
