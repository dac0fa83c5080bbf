//! Book model

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// A catalog record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub genre: Option<String>,
    /// Year of publication
    pub year: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Book form as submitted by the create and update pages.
///
/// Every field is kept as raw text so an invalid submission can be
/// rendered back to the user exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct BookForm {
    #[validate(
        required(message = "Title is required"),
        custom(function = "not_blank", message = "Title is required")
    )]
    pub title: Option<String>,
    #[validate(
        required(message = "Author is required"),
        custom(function = "not_blank", message = "Author is required")
    )]
    pub author: Option<String>,
    pub genre: Option<String>,
    #[validate(
        required(message = "Year published is required"),
        custom(function = "year_published")
    )]
    pub year: Option<String>,
}

/// Validated payload for inserting or overwriting a book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub genre: Option<String>,
    pub year: i32,
}

/// A single violated field constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Form fields in display order
const FORM_FIELDS: [&str; 4] = ["title", "author", "genre", "year"];

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn year_published(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    let (code, message) = if value.is_empty() {
        ("blank", "Year published is required")
    } else if value.parse::<i32>().is_err() {
        ("numeric", "Year must be a number")
    } else {
        return Ok(());
    };
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    Err(error)
}

impl BookForm {
    /// Validate the form and convert it into an insertable book.
    ///
    /// Errors come back in form order, one message per field.
    pub fn to_new_book(&self) -> Result<NewBook, Vec<FieldError>> {
        if let Err(errors) = self.validate() {
            let by_field = errors.field_errors();
            let ordered = FORM_FIELDS
                .iter()
                .filter_map(|field| {
                    let first = by_field.get(*field)?.first()?;
                    let message = first
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field));
                    Some(FieldError::new(*field, message))
                })
                .collect();
            return Err(ordered);
        }

        let year = self
            .year
            .as_deref()
            .and_then(|y| y.trim().parse::<i32>().ok())
            .ok_or_else(|| vec![FieldError::new("year", "Year must be a number")])?;

        Ok(NewBook {
            title: self.title.clone().unwrap_or_default(),
            author: self.author.clone().unwrap_or_default(),
            genre: self.genre.clone().filter(|g| !g.trim().is_empty()),
            year,
        })
    }
}

impl From<&Book> for BookForm {
    fn from(book: &Book) -> Self {
        Self {
            title: Some(book.title.clone()),
            author: Some(book.author.clone()),
            genre: book.genre.clone(),
            year: Some(book.year.to_string()),
        }
    }
}
