//! Repository layer for book storage

pub mod books;
pub mod memory;
pub mod search;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{Book, NewBook, PageRequest},
};

pub use search::{BookField, SearchFilter};

/// Storage backend for book records.
///
/// Lookups by id return `None` when the row does not exist; deciding
/// whether that is an error belongs to the caller.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// One page of books in id order plus the total number of matches
    async fn find_page(
        &self,
        filter: Option<&SearchFilter>,
        page: PageRequest,
    ) -> AppResult<(Vec<Book>, i64)>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>>;

    async fn insert(&self, book: &NewBook) -> AppResult<Book>;

    /// Overwrite every field of an existing book
    async fn update(&self, id: i32, book: &NewBook) -> AppResult<Option<Book>>;

    /// Returns whether a row was removed
    async fn delete(&self, id: i32) -> AppResult<bool>;

    /// Check the backend is reachable
    async fn ping(&self) -> AppResult<()>;
}

/// Main repository struct holding the configured book store
#[derive(Clone)]
pub struct Repository {
    pub books: Arc<dyn BookStore>,
}

impl Repository {
    /// Create a repository backed by the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            books: Arc::new(books::BooksRepository::new(pool)),
        }
    }

    /// Create a repository that keeps everything in process memory
    pub fn in_memory() -> Self {
        Self {
            books: Arc::new(memory::MemoryBooksRepository::new()),
        }
    }
}
