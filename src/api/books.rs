//! Book (catalog) pages

use axum::{
    extract::{rejection::FormRejection, Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};

use crate::{
    error::{AppError, AppResult},
    models::{BookForm, ListParams},
    views, AppState,
};

/// Parse a `{id}` path segment. Anything that is not an id cannot name a book.
fn parse_id(raw: &str) -> AppResult<i32> {
    raw.parse::<i32>()
        .map_err(|_| AppError::NotFound(format!("Book {} not found", raw)))
}

/// Turn an undecodable form body into the HTML bad-request page
fn submitted(form: Result<Form<BookForm>, FormRejection>) -> AppResult<BookForm> {
    form.map(|Form(form)| form)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// List books, one page at a time
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(ListParams),
    responses(
        (status = 200, description = "Book listing page", content_type = "text/html", body = String)
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Html<String>> {
    let catalog = &state.services.catalog;
    let page = catalog.page_request(params.page.as_deref());
    let books = catalog.list_books(page).await?;
    Ok(Html(views::books::index(&books, None)))
}

/// Search books by title, author, genre or year
#[utoipa::path(
    get,
    path = "/books/search",
    tag = "books",
    params(ListParams),
    responses(
        (status = 200, description = "Search results page", content_type = "text/html", body = String)
    )
)]
pub async fn search_books(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Html<String>> {
    let catalog = &state.services.catalog;
    let term = params.search.unwrap_or_default();
    let page = catalog.page_request(params.page.as_deref());
    let books = catalog.search_books(&term, page).await?;
    Ok(Html(views::books::index(&books, Some(&term))))
}

/// Empty creation form
#[utoipa::path(
    get,
    path = "/books/new",
    tag = "books",
    responses(
        (status = 200, description = "New book form", content_type = "text/html", body = String)
    )
)]
pub async fn new_book_form() -> Html<String> {
    Html(views::books::new_book(&BookForm::default(), &[]))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books/new",
    tag = "books",
    request_body(content = BookForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Book created, redirect to its page"),
        (status = 400, description = "Form body could not be decoded", content_type = "text/html", body = String),
        (status = 422, description = "Form re-rendered with validation errors", content_type = "text/html", body = String)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    form: Result<Form<BookForm>, FormRejection>,
) -> AppResult<Response> {
    let form = submitted(form)?;
    match state.services.catalog.create_book(&form).await {
        Ok(book) => Ok(Redirect::to(&format!("/books/{}", book.id)).into_response()),
        Err(AppError::Validation(errors)) => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(views::books::new_book(&form, &errors)),
        )
            .into_response()),
        Err(e) => Err(e),
    }
}

/// Show a book in its edit form
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book edit page", content_type = "text/html", body = String),
        (status = 404, description = "Book not found", content_type = "text/html", body = String)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    let id = parse_id(&id)?;
    let book = state.services.catalog.get_book(id).await?;
    Ok(Html(views::books::update_book(book.id, &BookForm::from(&book), &[])))
}

/// Update an existing book
#[utoipa::path(
    post,
    path = "/books/{id}/update",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    request_body(content = BookForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Book updated, redirect to its page"),
        (status = 400, description = "Form body could not be decoded", content_type = "text/html", body = String),
        (status = 404, description = "Book not found", content_type = "text/html", body = String),
        (status = 422, description = "Form re-rendered with validation errors", content_type = "text/html", body = String)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    form: Result<Form<BookForm>, FormRejection>,
) -> AppResult<Response> {
    let id = parse_id(&id)?;
    let form = submitted(form)?;
    match state.services.catalog.update_book(id, &form).await {
        Ok(book) => Ok(Redirect::to(&format!("/books/{}", book.id)).into_response()),
        Err(AppError::Validation(errors)) => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(views::books::update_book(id, &form, &errors)),
        )
            .into_response()),
        Err(e) => Err(e),
    }
}

/// Delete a book
#[utoipa::path(
    post,
    path = "/books/{id}/delete",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 303, description = "Book deleted, redirect to the listing"),
        (status = 404, description = "Book not found", content_type = "text/html", body = String)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Redirect> {
    let id = parse_id(&id)?;
    state.services.catalog.delete_book(id).await?;
    Ok(Redirect::to("/books"))
}

/// Anything no route matched
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(views::errors::not_found()))
}
