//! Catalog management service

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookForm, Page, PageRequest},
    repository::{Repository, SearchFilter},
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
    page_size: u32,
}

impl CatalogService {
    pub fn new(repository: Repository, page_size: u32) -> Self {
        Self {
            repository,
            page_size: page_size.max(1),
        }
    }

    /// Resolve the raw `page` query value against the configured page size
    pub fn page_request(&self, raw_page: Option<&str>) -> PageRequest {
        PageRequest::parse(raw_page, self.page_size)
    }

    /// One page of the full catalog
    pub async fn list_books(&self, page: PageRequest) -> AppResult<Page<Book>> {
        let (books, total) = self.repository.books.find_page(None, page).await?;
        Ok(Page::new(books, total, page))
    }

    /// One page of books matching a free-text term
    pub async fn search_books(&self, term: &str, page: PageRequest) -> AppResult<Page<Book>> {
        let filter = SearchFilter::new(term);
        let (books, total) = self.repository.books.find_page(Some(&filter), page).await?;
        tracing::debug!("Search '{}' page {}: {} matches", term, page.page, total);
        Ok(Page::new(books, total, page))
    }

    /// Get book by ID
    pub async fn get_book(&self, id: i32) -> AppResult<Book> {
        self.repository
            .books
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Validate and store a new book
    pub async fn create_book(&self, form: &BookForm) -> AppResult<Book> {
        let book = form.to_new_book().map_err(AppError::Validation)?;
        let created = self.repository.books.insert(&book).await?;
        tracing::info!("Created book id={} title={:?}", created.id, created.title);
        Ok(created)
    }

    /// Validate and overwrite an existing book.
    ///
    /// A missing book is reported before the form is looked at.
    pub async fn update_book(&self, id: i32, form: &BookForm) -> AppResult<Book> {
        self.get_book(id).await?;
        let book = form.to_new_book().map_err(AppError::Validation)?;
        let updated = self
            .repository
            .books
            .update(id, &book)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;
        tracing::info!("Updated book id={}", id);
        Ok(updated)
    }

    /// Permanently remove a book
    pub async fn delete_book(&self, id: i32) -> AppResult<()> {
        self.get_book(id).await?;
        if !self.repository.books.delete(id).await? {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        tracing::info!("Deleted book id={}", id);
        Ok(())
    }

    /// Check the storage backend responds
    pub async fn ping(&self) -> AppResult<()> {
        self.repository.books.ping().await
    }
}
