//! Books repository for Postgres

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Pool, Postgres};

use super::{BookStore, SearchFilter};
use crate::{
    error::AppResult,
    models::{Book, NewBook, PageRequest},
};

const BOOK_COLUMNS: &str = "id, title, author, genre, year, created_at, updated_at";

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for BooksRepository {
    async fn find_page(
        &self,
        filter: Option<&SearchFilter>,
        page: PageRequest,
    ) -> AppResult<(Vec<Book>, i64)> {
        let (where_clause, pattern) = match filter {
            Some(filter) => (
                format!("WHERE {}", filter.sql_condition(1)),
                Some(filter.like_pattern()),
            ),
            None => (String::new(), None),
        };
        let next_param = if pattern.is_some() { 2 } else { 1 };

        let count_query = format!("SELECT COUNT(*) FROM books {}", where_clause);
        let mut count = sqlx::query_scalar::<_, i64>(&count_query);
        if let Some(ref pattern) = pattern {
            count = count.bind(pattern);
        }
        let total = count.fetch_one(&self.pool).await?;

        let select_query = format!(
            "SELECT {} FROM books {} ORDER BY id LIMIT ${} OFFSET ${}",
            BOOK_COLUMNS,
            where_clause,
            next_param,
            next_param + 1
        );
        let mut select = sqlx::query_as::<_, Book>(&select_query);
        if let Some(ref pattern) = pattern {
            select = select.bind(pattern);
        }
        let books = select
            .bind(page.limit as i64)
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;

        Ok((books, total))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        let query = format!("SELECT {} FROM books WHERE id = $1", BOOK_COLUMNS);
        let book = sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(book)
    }

    async fn insert(&self, book: &NewBook) -> AppResult<Book> {
        let now = Utc::now();
        let query = format!(
            r#"
            INSERT INTO books (title, author, genre, year, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            RETURNING {}
            "#,
            BOOK_COLUMNS
        );
        let row = sqlx::query_as::<_, Book>(&query)
            .bind(&book.title)
            .bind(&book.author)
            .bind(&book.genre)
            .bind(book.year)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: i32, book: &NewBook) -> AppResult<Option<Book>> {
        let now = Utc::now();
        let query = format!(
            r#"
            UPDATE books
            SET title = $1, author = $2, genre = $3, year = $4, updated_at = $5
            WHERE id = $6
            RETURNING {}
            "#,
            BOOK_COLUMNS
        );
        let row = sqlx::query_as::<_, Book>(&query)
            .bind(&book.title)
            .bind(&book.author)
            .bind(&book.genre)
            .bind(book.year)
            .bind(now)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
