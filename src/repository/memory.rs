//! In-memory book store for development and testing

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{BookStore, SearchFilter};
use crate::{
    error::AppResult,
    models::{Book, NewBook, PageRequest},
};

#[derive(Default)]
struct Table {
    rows: BTreeMap<i32, Book>,
    last_id: i32,
}

/// Books held in a map keyed by id. Ids are never reused.
#[derive(Default)]
pub struct MemoryBooksRepository {
    table: RwLock<Table>,
}

impl MemoryBooksRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookStore for MemoryBooksRepository {
    async fn find_page(
        &self,
        filter: Option<&SearchFilter>,
        page: PageRequest,
    ) -> AppResult<(Vec<Book>, i64)> {
        let table = self.table.read().await;
        let matching: Vec<&Book> = table
            .rows
            .values()
            .filter(|book| filter.map_or(true, |f| f.matches(book)))
            .collect();
        let total = matching.len() as i64;
        let books = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit as usize)
            .cloned()
            .collect();
        Ok((books, total))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn insert(&self, book: &NewBook) -> AppResult<Book> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let now = Utc::now();
        let row = Book {
            id: table.last_id,
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre.clone(),
            year: book.year,
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn update(&self, id: i32, book: &NewBook) -> AppResult<Option<Book>> {
        let mut table = self.table.write().await;
        let Some(row) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        row.title = book.title.clone();
        row.author = book.author.clone();
        row.genre = book.genre.clone();
        row.year = book.year;
        row.updated_at = Utc::now();
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
