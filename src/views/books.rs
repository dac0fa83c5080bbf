//! Book listing and form pages

use std::fmt::Write;

use super::{escape, layout};
use crate::models::{Book, BookForm, FieldError, Page};

/// Listing page, shared by the plain listing and search results.
///
/// When `search` is set, page links carry the search text along.
pub fn index(page: &Page<Book>, search: Option<&str>) -> String {
    let mut body = String::new();
    body.push_str("<h1>Books</h1>\n");
    body.push_str("<p><a class=\"button\" href=\"/books/new\">Create New Book</a></p>\n");

    let _ = write!(
        body,
        r#"<form action="/books/search" method="get">
<input type="search" name="search" placeholder="Search..." value="{}">
<button type="submit">Search</button>
</form>
"#,
        escape(search.unwrap_or_default())
    );

    if page.items.is_empty() {
        body.push_str("<p>No books found.</p>\n");
    } else {
        body.push_str(
            "<table>\n<thead>\n<tr><th>Title</th><th>Author</th><th>Genre</th><th>Year</th></tr>\n</thead>\n<tbody>\n",
        );
        for book in &page.items {
            let _ = writeln!(
                body,
                "<tr><td><a href=\"/books/{}\">{}</a></td><td>{}</td><td>{}</td><td>{}</td></tr>",
                book.id,
                escape(&book.title),
                escape(&book.author),
                escape(book.genre.as_deref().unwrap_or_default()),
                book.year
            );
        }
        body.push_str("</tbody>\n</table>\n");
    }

    let indices = page.page_indices();
    if !indices.is_empty() {
        body.push_str("<ul class=\"pagination\">\n");
        for index in indices {
            let number = index + 1;
            let class = if number == page.page { " class=\"active\"" } else { "" };
            let _ = writeln!(
                body,
                "<li><a{} href=\"{}\">{}</a></li>",
                class,
                escape(&page_href(search, number)),
                number
            );
        }
        body.push_str("</ul>\n");
    }

    layout("Books", &body)
}

/// Link target for a 1-based page number
pub fn page_href(search: Option<&str>, page: u32) -> String {
    match search {
        Some(term) => format!("/books/search?search={}&page={}", urlencoding::encode(term), page),
        None => format!("/books?page={}", page),
    }
}

pub fn new_book(form: &BookForm, errors: &[FieldError]) -> String {
    let mut body = String::from("<h1>New Book</h1>\n");
    body.push_str(&validation_errors(errors));
    body.push_str(&book_form("/books/new", form, "Create New Book"));
    body.push_str("<p><a class=\"button\" href=\"/books\">Cancel</a></p>\n");
    layout("New Book", &body)
}

pub fn update_book(id: i32, form: &BookForm, errors: &[FieldError]) -> String {
    let title = form
        .title
        .as_deref()
        .filter(|t| !t.trim().is_empty() && errors.is_empty())
        .unwrap_or("Update Book");

    let mut body = format!("<h1>{}</h1>\n", escape(title));
    body.push_str(&validation_errors(errors));
    body.push_str(&book_form(&format!("/books/{}/update", id), form, "Update Book"));
    let _ = write!(
        body,
        r#"<form method="post" action="/books/{}/delete" onsubmit="return confirm('Do you really want to delete this book?');">
<p><input type="submit" value="Delete Book"></p>
</form>
<p><a class="button" href="/books">Cancel</a></p>
"#,
        id
    );
    layout(title, &body)
}

fn validation_errors(errors: &[FieldError]) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let mut out = String::from("<h2 class=\"validation--errors--label\">Oooops!</h2>\n<div class=\"validation-errors\">\n<ul>\n");
    for error in errors {
        let _ = writeln!(
            out,
            "<li data-field=\"{}\">{}</li>",
            escape(&error.field),
            escape(&error.message)
        );
    }
    out.push_str("</ul>\n</div>\n");
    out
}

fn book_form(action: &str, form: &BookForm, submit: &str) -> String {
    let fields = [
        ("title", "Title", &form.title),
        ("author", "Author", &form.author),
        ("genre", "Genre", &form.genre),
        ("year", "Year", &form.year),
    ];

    let mut out = format!("<form method=\"post\" action=\"{}\">\n", escape(action));
    for (name, label, value) in fields {
        let _ = writeln!(
            out,
            "<p><label for=\"{name}\">{label}</label>\n<input name=\"{name}\" type=\"text\" id=\"{name}\" value=\"{value}\"></p>",
            name = name,
            label = label,
            value = escape(value.as_deref().unwrap_or_default())
        );
    }
    let _ = writeln!(out, "<p><input type=\"submit\" value=\"{}\"></p>\n</form>", escape(submit));
    out
}
