//! HTTP handlers and routing

pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    response::Redirect,
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let pages = Router::new()
        .route("/", get(|| async { Redirect::to("/books") }))
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Books (catalog)
        .route("/books", get(books::list_books))
        .route("/books/new", get(books::new_book_form).post(books::create_book))
        .route("/books/search", get(books::search_books))
        .route("/books/:id", get(books::get_book))
        .route("/books/:id/update", post(books::update_book))
        .route("/books/:id/delete", post(books::delete_book))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .merge(pages)
        .merge(openapi)
        .fallback(books::not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}
