//! Generic error pages

use super::{escape, layout};

pub fn not_found() -> String {
    layout(
        "Page Not Found",
        r#"<h1>Page Not Found</h1>
<p>Sorry! We couldn't find the page you were looking for.</p>
<p><a href="/books">Back to the catalog</a></p>"#,
    )
}

pub fn bad_request(messages: &[String]) -> String {
    let items: String = messages
        .iter()
        .map(|m| format!("<li>{}</li>\n", escape(m)))
        .collect();
    layout(
        "Bad Request",
        &format!(
            "<h1>Bad Request</h1>\n<ul>\n{}</ul>\n<p><a href=\"/books\">Back to the catalog</a></p>",
            items
        ),
    )
}

pub fn server_error() -> String {
    layout(
        "Server Error",
        r#"<h1>Server Error</h1>
<p>Sorry! There was an unexpected error on the server.</p>
<p><a href="/books">Back to the catalog</a></p>"#,
    )
}
