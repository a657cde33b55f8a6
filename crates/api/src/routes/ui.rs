//! Browser form.

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// GET / — the submission form and recent checks, driven by the JSON API.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
