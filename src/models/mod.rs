//! Data models for the catalog

pub mod book;
pub mod pagination;

// Re-export commonly used types
pub use book::{Book, BookForm, FieldError, NewBook};
pub use pagination::{ListParams, Page, PageRequest};
