//! Book catalog endpoints: books, authors, publishers, categories

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::book::{
        Author, AvailableBook, BookDetail, BookSearchResult, Category, CreateBook,
        CreatePublisher, Publisher,
    },
    models::copy::BookCopy,
    AppState,
};

/// List all books with author, category and copy counts
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books in the catalog", body = [BookDetail])
    )
)]
pub async fn get_books(State(state): State<AppState>) -> AppResult<Json<Vec<BookDetail>>> {
    let books = state.services.catalog.list_books().await?;
    Ok(Json(books))
}

/// List books with at least one copy available for purchase
#[utoipa::path(
    get,
    path = "/books/for-ordering",
    tag = "books",
    responses(
        (status = 200, description = "Books in stock", body = [AvailableBook])
    )
)]
pub async fn get_books_for_ordering(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<AvailableBook>>> {
    let books = state.services.catalog.list_books_for_ordering().await?;
    Ok(Json(books))
}

/// List books with at least one available, rentable copy
#[utoipa::path(
    get,
    path = "/books/for-renting",
    tag = "books",
    responses(
        (status = 200, description = "Books that can be rented", body = [AvailableBook])
    )
)]
pub async fn get_books_for_renting(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<AvailableBook>>> {
    let books = state.services.catalog.list_books_for_renting().await?;
    Ok(Json(books))
}

/// List every copy of a book, whatever its status
#[utoipa::path(
    get,
    path = "/books/{isbn}/copies",
    tag = "books",
    params(
        ("isbn" = String, Path, description = "Book ISBN")
    ),
    responses(
        (status = 200, description = "All copies of the book", body = [BookCopy]),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book_copies(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<Vec<BookCopy>>> {
    let copies = state.services.inventory.copies(&isbn).await?;
    Ok(Json(copies))
}

/// Search books by keyword
#[utoipa::path(
    get,
    path = "/books/search/{keyword}",
    tag = "books",
    params(
        ("keyword" = String, Path, description = "Keyword matched against title, author name and ISBN")
    ),
    responses(
        (status = 200, description = "Matching books", body = [BookSearchResult])
    )
)]
pub async fn search_books(
    State(state): State<AppState>,
    Path(keyword): Path<String>,
) -> AppResult<Json<Vec<BookSearchResult>>> {
    let books = state.services.catalog.search_books(&keyword).await?;
    Ok(Json(books))
}

/// Get a single book by ISBN
#[utoipa::path(
    get,
    path = "/books/{isbn}",
    tag = "books",
    params(
        ("isbn" = String, Path, description = "Book ISBN")
    ),
    responses(
        (status = 200, description = "Book found", body = BookDetail),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<BookDetail>> {
    let book = state.services.catalog.get_book(&isbn).await?;
    Ok(Json(book))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = BookDetail),
        (status = 400, description = "Invalid book data"),
        (status = 404, description = "Publisher or category not found"),
        (status = 409, description = "ISBN already exists")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    Json(book): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<BookDetail>)> {
    let created = state.services.catalog.create_book(book).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// List all authors
#[utoipa::path(
    get,
    path = "/authors",
    tag = "books",
    responses(
        (status = 200, description = "All authors", body = [Author])
    )
)]
pub async fn get_authors(State(state): State<AppState>) -> AppResult<Json<Vec<Author>>> {
    let authors = state.services.catalog.list_authors().await?;
    Ok(Json(authors))
}

/// Search authors by name
#[utoipa::path(
    get,
    path = "/authors/search/{name}",
    tag = "books",
    params(
        ("name" = String, Path, description = "Name fragment matched against first and last name")
    ),
    responses(
        (status = 200, description = "Matching authors", body = [Author])
    )
)]
pub async fn search_authors(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Vec<Author>>> {
    let authors = state.services.catalog.search_authors(&name).await?;
    Ok(Json(authors))
}

/// List all publishers
#[utoipa::path(
    get,
    path = "/publishers",
    tag = "books",
    responses(
        (status = 200, description = "All publishers", body = [Publisher])
    )
)]
pub async fn get_publishers(State(state): State<AppState>) -> AppResult<Json<Vec<Publisher>>> {
    let publishers = state.services.catalog.list_publishers().await?;
    Ok(Json(publishers))
}

/// Create a new publisher
#[utoipa::path(
    post,
    path = "/publishers",
    tag = "books",
    request_body = CreatePublisher,
    responses(
        (status = 201, description = "Publisher created", body = Publisher),
        (status = 400, description = "Invalid publisher data")
    )
)]
pub async fn create_publisher(
    State(state): State<AppState>,
    Json(publisher): Json<CreatePublisher>,
) -> AppResult<(StatusCode, Json<Publisher>)> {
    let created = state.services.catalog.create_publisher(publisher).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// List all categories
#[utoipa::path(
    get,
    path = "/categories",
    tag = "books",
    responses(
        (status = 200, description = "All categories", body = [Category])
    )
)]
pub async fn get_categories(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = state.services.catalog.list_categories().await?;
    Ok(Json(categories))
}
