//! HTTP route handlers: directory page, health, fallback.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::Json;

use compdir_core::{db, render};

use super::state::AppState;

/// Construct a minimal HTML error page with the given status code.
fn html_error(status: StatusCode, message: &str) -> (StatusCode, Html<String>) {
    let body = format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"UTF-8\"><title>Error</title></head>\n<body><h1>Error</h1><p>{}</p></body>\n</html>\n",
        render::escape_html(message)
    );
    (status, Html(body))
}

/// Fallback handler for unmatched routes.
pub(crate) async fn handle_not_found() -> impl IntoResponse {
    html_error(StatusCode::NOT_FOUND, "not found")
}

/// GET /health
pub(crate) async fn handle_health() -> impl IntoResponse {
    let response = serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    });
    (StatusCode::OK, Json(response))
}

/// GET /
///
/// One full pass per request: connect, fetch, render, close. An unreachable
/// database is 503, a failed query 500; neither emits partial row output.
pub(crate) async fn handle_directory(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match db::load_companies(&state.config.database).await {
        Ok(records) => (StatusCode::OK, Html(render::render_page(&records))).into_response(),
        Err(e) if e.is_unavailable() => html_error(
            StatusCode::SERVICE_UNAVAILABLE,
            &format!("database unavailable: {}", e),
        )
        .into_response(),
        Err(e) => {
            html_error(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()).into_response()
        }
    }
}
