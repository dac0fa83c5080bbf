//! Free-text search over book fields.
//!
//! A search term matches a book when any searchable field contains it,
//! ignoring case. The same filter renders to a SQL condition for Postgres
//! and evaluates directly against rows for the in-memory store.

use crate::models::Book;

/// Book columns that take part in free-text search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookField {
    Title,
    Author,
    Genre,
    Year,
}

impl BookField {
    pub const SEARCHABLE: [BookField; 4] = [
        BookField::Title,
        BookField::Author,
        BookField::Genre,
        BookField::Year,
    ];

    /// SQL expression yielding the column as text
    pub fn sql_text(&self) -> &'static str {
        match self {
            BookField::Title => "title",
            BookField::Author => "author",
            BookField::Genre => "COALESCE(genre, '')",
            BookField::Year => "CAST(year AS TEXT)",
        }
    }

    /// Textual value of the field on a loaded row
    pub fn text_of(&self, book: &Book) -> String {
        match self {
            BookField::Title => book.title.clone(),
            BookField::Author => book.author.clone(),
            BookField::Genre => book.genre.clone().unwrap_or_default(),
            BookField::Year => book.year.to_string(),
        }
    }
}

/// Case-insensitive OR-substring filter across [`BookField::SEARCHABLE`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    term: String,
}

impl SearchFilter {
    pub fn new(term: impl Into<String>) -> Self {
        Self { term: term.into() }
    }

    /// `LIKE` pattern for the term, with wildcards in the term taken literally
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.term.len() + 2);
        pattern.push('%');
        for c in self.term.to_lowercase().chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }

    /// SQL condition testing every searchable field against bind parameter `$param`
    pub fn sql_condition(&self, param: usize) -> String {
        let clauses: Vec<String> = BookField::SEARCHABLE
            .iter()
            .map(|field| format!("LOWER({}) LIKE ${}", field.sql_text(), param))
            .collect();
        format!("({})", clauses.join(" OR "))
    }

    pub fn matches(&self, book: &Book) -> bool {
        let needle = self.term.to_lowercase();
        BookField::SEARCHABLE
            .iter()
            .any(|field| field.text_of(book).to_lowercase().contains(&needle))
    }
}
