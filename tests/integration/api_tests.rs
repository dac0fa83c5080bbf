//! Live server tests
//!
//! Run against a started server (with a fresh database) using:
//! cargo test --test api_tests -- --ignored

use reqwest::{redirect::Policy, Client, StatusCode};
use serde_json::Value;

const BASE_URL: &str = "http://localhost:3000";

/// Client that reports redirects instead of following them
fn client() -> Client {
    Client::builder()
        .redirect(Policy::none())
        .build()
        .expect("Failed to build client")
}

/// Helper to create a book and return its page path
async fn create_book(client: &Client, title: &str, genre: &str, year: &str) -> String {
    let response = client
        .post(format!("{}/books/new", BASE_URL))
        .form(&[
            ("title", title),
            ("author", "Integration Tester"),
            ("genre", genre),
            ("year", year),
        ])
        .send()
        .await
        .expect("Failed to send create request");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .expect("No location header")
        .to_string()
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let response = client()
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
    let response = client()
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_list_books() {
    let response = client()
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("<h1>Books</h1>"));
}

#[tokio::test]
#[ignore]
async fn test_create_update_and_delete_book() {
    let client = client();
    let location = create_book(&client, "Live Test Book", "Testing", "2024").await;

    // Update
    let response = client
        .post(format!("{}{}/update", BASE_URL, location))
        .form(&[
            ("title", "Live Test Book (2nd ed.)"),
            ("author", "Integration Tester"),
            ("genre", "Testing"),
            ("year", "2025"),
        ])
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let body = client
        .get(format!("{}{}", BASE_URL, location))
        .send()
        .await
        .expect("Failed to send request")
        .text()
        .await
        .expect("Failed to read body");
    assert!(body.contains("value=\"2025\""));

    // Delete
    let response = client
        .post(format!("{}{}/delete", BASE_URL, location))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = client
        .get(format!("{}{}", BASE_URL, location))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore]
async fn test_invalid_year_is_rejected() {
    let response = client()
        .post(format!("{}/books/new", BASE_URL))
        .form(&[
            ("title", "Bad Year"),
            ("author", "Integration Tester"),
            ("genre", ""),
            ("year", "abc"),
        ])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("Year must be a number"));
}

#[tokio::test]
#[ignore]
async fn test_search_books() {
    let client = client();
    let location = create_book(&client, "Searchable Title", "Unusual-Genre-Marker", "1999").await;

    let body = client
        .get(format!("{}/books/search?search=unusual-genre", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .text()
        .await
        .expect("Failed to read body");
    assert!(body.contains("Searchable Title"));

    let _ = client
        .post(format!("{}{}/delete", BASE_URL, location))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_delete_unknown_book() {
    let response = client()
        .post(format!("{}/books/2147483647/delete", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
