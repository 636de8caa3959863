//! Request echo for debugging webhook senders and proxies.

use axum::body::Bytes;
use axum::extract::OriginalUri;
use axum::http::request::Parts;

/// `ANY /api/echo` — plain-text dump of the request line, headers and body.
///
/// The `Bytes` extractor enforces axum's default body limit (2 MB); larger
/// bodies are rejected with 413 before the handler runs.
#[utoipa::path(
    method(get, post, put, patch, delete),
    path = "/api/echo",
    responses(
        (status = 200, description = "Plain-text dump of the request", body = String, content_type = "text/plain"),
        (status = 401, description = "Missing or wrong token"),
        (status = 413, description = "Body larger than 2 MB")
    )
)]
pub async fn handler(parts: Parts, body: Bytes) -> String {
    render(&parts, &body)
}

pub(crate) fn render(parts: &Parts, body: &Bytes) -> String {
    // Under a nested router `parts.uri` is stripped; report what the client sent.
    let uri = parts
        .extensions
        .get::<OriginalUri>()
        .map_or(&parts.uri, |original| &original.0);

    let mut out = format!("Method: {}\nURI: {}\nVersion: {:?}\n", parts.method, uri, parts.version);

    out.push_str("Headers:\n");
    for (name, value) in &parts.headers {
        let value = value.to_str().unwrap_or("[invalid UTF-8]");
        out.push_str(&format!("  {name}: {value}\n"));
    }

    if let Ok(text) = std::str::from_utf8(body) {
        if !text.is_empty() {
            out.push_str("\nBody:\n");
            out.push_str(text);
        }
    }

    out
}

#[cfg(test)]
#[path = "echo_test.rs"]
mod tests;
