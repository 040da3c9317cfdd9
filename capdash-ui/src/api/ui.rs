//! UI serving routes
//!
//! Serves the embedded HTML/JS dashboard

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

const INDEX_HTML: &str = include_str!("../ui/index.html");
const WEBCAM_JS: &str = include_str!("../ui/webcam.js");

/// GET /
///
/// Serves the main dashboard page
pub async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /static/webcam.js
///
/// Serves the webcam capture script
pub async fn serve_webcam_js() -> Response {
    (
        StatusCode::OK,
        [("content-type", "application/javascript")],
        WEBCAM_JS,
    )
        .into_response()
}
