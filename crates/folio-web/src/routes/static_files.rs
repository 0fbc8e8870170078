//! Static file serving

use axum::response::Html;

/// Serve the HTML shell that boots the WASM bundle
pub async fn serve_index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

pub async fn health() -> &'static str {
    "OK"
}
