//! API integration tests
//!
//! These tests expect a running server with a fresh database:
//! `cargo run`, then `cargo test -- --ignored`.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Helper to register a customer, returning its id
async fn create_customer(client: &Client, phone: &str) -> i32 {
    let response = client
        .post(format!("{}/customers", BASE_URL))
        .json(&json!({
            "first_name": "Test",
            "last_name": "Customer",
            "customer_type": "regular",
            "phone_number": phone,
            "zip_code": 75001
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    body["customer_id"].as_i64().expect("No customer_id") as i32
}

/// Helper to create a book with one publisher and add sellable copies
async fn create_book_with_copies(client: &Client, isbn: &str, copies: u32, can_rent: bool) {
    let response = client
        .post(format!("{}/publishers", BASE_URL))
        .json(&json!({ "publisher_name": "Test House" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let publisher: Value = response.json().await.expect("Failed to parse response");

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "isbn": isbn,
            "title": "Integration Testing in Practice",
            "publication_year": 2020,
            "publisher_id": publisher["publisher_id"],
            "category_id": 1,
            "author_first_name": "Ada",
            "author_last_name": "Writer"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{}/inventory/{}/copies", BASE_URL, isbn))
        .json(&json!({
            "quantity": copies,
            "price": "19.99",
            "can_rent": can_rent
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_create_customer_rejects_bad_zip() {
    let client = Client::new();

    let response = client
        .post(format!("{}/customers", BASE_URL))
        .json(&json!({
            "first_name": "Bad",
            "last_name": "Zip",
            "customer_type": "regular",
            "phone_number": "0000000001",
            "zip_code": 3
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_get_unknown_book_returns_404() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books/does-not-exist", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_order_flow() {
    let client = Client::new();
    let isbn = "978-0-000-11111-1";

    create_book_with_copies(&client, isbn, 3, false).await;
    let customer_id = create_customer(&client, "0600000001").await;

    // Order two copies
    let response = client
        .post(format!("{}/orders", BASE_URL))
        .json(&json!({
            "customer_id": customer_id,
            "lines": [{ "isbn": isbn, "quantity": 2 }]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let order: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(order["item_count"], 2);
    assert_eq!(order["order_amount"], "39.98");
    assert_eq!(order["items"].as_array().unwrap().len(), 2);

    // Only one copy left; ordering two more must fail atomically
    let response = client
        .post(format!("{}/orders", BASE_URL))
        .json(&json!({
            "customer_id": customer_id,
            "lines": [{ "isbn": isbn, "quantity": 2 }]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);

    // The failed order must not have consumed the last copy
    let response = client
        .get(format!("{}/inventory/{}/available", BASE_URL, isbn))
        .send()
        .await
        .expect("Failed to send request");
    let available: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(available["available_count"], 1);
}

#[tokio::test]
#[ignore]
async fn test_empty_order_rejected() {
    let client = Client::new();
    let customer_id = create_customer(&client, "0600000002").await;

    let response = client
        .post(format!("{}/orders", BASE_URL))
        .json(&json!({
            "customer_id": customer_id,
            "lines": []
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_rental_flow() {
    let client = Client::new();
    let isbn = "978-0-000-22222-2";

    create_book_with_copies(&client, isbn, 1, true).await;
    let customer_id = create_customer(&client, "0600000003").await;

    // Rent the only copy
    let response = client
        .post(format!("{}/rentals", BASE_URL))
        .json(&json!({ "customer_id": customer_id, "isbn": isbn }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let rental: Value = response.json().await.expect("Failed to parse response");
    assert!(rental["return_date"].is_null());
    let rental_id = rental["rental_id"].as_i64().unwrap();

    // Second rental of the same ISBN must fail
    let response = client
        .post(format!("{}/rentals", BASE_URL))
        .json(&json!({ "customer_id": customer_id, "isbn": isbn }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 422);

    // Return it; within the grace period the penalty is zero
    let response = client
        .post(format!("{}/rentals/{}/return", BASE_URL, rental_id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let returned: Value = response.json().await.expect("Failed to parse response");
    assert!(!returned["return_date"].is_null());
    assert_eq!(returned["penalty"], "0");

    // Returning twice is a conflict with the AlreadyReturned code
    let response = client
        .post(format!("{}/rentals/{}/return", BASE_URL, rental_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "AlreadyReturned");
}

#[tokio::test]
#[ignore]
async fn test_browse_listings() {
    let client = Client::new();
    let sellable_isbn = "978-0-000-44444-4";
    let rentable_isbn = "978-0-000-55555-5";

    create_book_with_copies(&client, sellable_isbn, 2, false).await;
    create_book_with_copies(&client, rentable_isbn, 2, true).await;

    let isbns_of = |books: &Value| -> Vec<String> {
        books
            .as_array()
            .unwrap()
            .iter()
            .map(|b| b["isbn"].as_str().unwrap().to_string())
            .collect()
    };

    // Both books have available copies, so both are orderable
    let response = client
        .get(format!("{}/books/for-ordering", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let orderable: Value = response.json().await.expect("Failed to parse response");
    let orderable = isbns_of(&orderable);
    assert!(orderable.contains(&sellable_isbn.to_string()));
    assert!(orderable.contains(&rentable_isbn.to_string()));

    // Only the rentable one shows up for renting
    let response = client
        .get(format!("{}/books/for-renting", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let rentable: Value = response.json().await.expect("Failed to parse response");
    let rentable = isbns_of(&rentable);
    assert!(rentable.contains(&rentable_isbn.to_string()));
    assert!(!rentable.contains(&sellable_isbn.to_string()));
}

#[tokio::test]
#[ignore]
async fn test_book_copies_lists_all_statuses() {
    let client = Client::new();
    let isbn = "978-0-000-66666-6";

    create_book_with_copies(&client, isbn, 2, false).await;
    let customer_id = create_customer(&client, "0600000010").await;

    // Sell one copy; the copy list must still show both
    let response = client
        .post(format!("{}/orders", BASE_URL))
        .json(&json!({
            "customer_id": customer_id,
            "lines": [{ "isbn": isbn, "quantity": 1 }]
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .get(format!("{}/books/{}/copies", BASE_URL, isbn))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let copies: Value = response.json().await.expect("Failed to parse response");
    let copies = copies.as_array().unwrap();
    assert_eq!(copies.len(), 2);
    let statuses: Vec<&str> = copies.iter().map(|c| c["status"].as_str().unwrap()).collect();
    assert!(statuses.contains(&"sold"));
    assert!(statuses.contains(&"available"));

    // Unknown ISBN is a 404, not an empty list
    let response = client
        .get(format!("{}/books/does-not-exist/copies", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_search_matches_isbn() {
    let client = Client::new();
    let isbn = "978-0-000-77777-7";

    create_book_with_copies(&client, isbn, 1, false).await;

    let response = client
        .get(format!("{}/books/search/77777", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let results: Value = response.json().await.expect("Failed to parse response");
    assert!(results
        .as_array()
        .unwrap()
        .iter()
        .any(|b| b["isbn"] == isbn));
}

#[tokio::test]
#[ignore]
async fn test_review_flow() {
    let client = Client::new();
    let isbn = "978-0-000-33333-3";

    create_book_with_copies(&client, isbn, 1, false).await;

    // Find the item id of the created copy
    let response = client
        .get(format!("{}/items?item_type=book", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    let items: Value = response.json().await.expect("Failed to parse response");
    let item_id = items.as_array().unwrap().last().unwrap()["item_id"]
        .as_i64()
        .unwrap();

    // Rating outside 1..=5 is rejected
    let response = client
        .post(format!("{}/reviews", BASE_URL))
        .json(&json!({
            "item_id": item_id,
            "reviewer": "alice",
            "rating": 6,
            "content": "too good to be true"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    let response = client
        .post(format!("{}/reviews", BASE_URL))
        .json(&json!({
            "item_id": item_id,
            "reviewer": "alice",
            "rating": 4,
            "content": "solid read"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .get(format!("{}/items/{}/rating", BASE_URL, item_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let rating: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(rating["review_count"], 1);
}

#[tokio::test]
#[ignore]
async fn test_stats_dashboard_shape() {
    let client = Client::new();

    let response = client
        .get(format!("{}/stats/dashboard", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["total_books"].is_i64());
    assert!(body["total_customers"].is_i64());
    assert!(body["total_orders"].is_i64());
    assert!(body["active_rentals"].is_i64());
}
