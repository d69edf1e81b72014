//! History-mode fallback.
//!
//! Every non-asset GET gets the SPA shell so the client router can render
//! the requested path. Paths the route table resolves answer `200`; the rest
//! answer `404` with the same shell, and the client shows its not-found page.

use axum::extract::{OriginalUri, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use navigation::Location;

use crate::state::AppState;

/// Status for a request path under the configured base.
pub fn spa_status(state: &AppState, path: &str) -> StatusCode {
    let location = state.router_config.strip_base(Location::parse(path));
    match state.table.resolve(&location) {
        Some(resolved) => {
            tracing::debug!(path, view = %resolved.view, "spa route");
            StatusCode::OK
        }
        None => {
            tracing::debug!(path, "spa route not found");
            StatusCode::NOT_FOUND
        }
    }
}

/// Nested under a base, the request URI has the base stripped; the status
/// is computed from the original URI so the base is stripped exactly once.
pub async fn spa_fallback(State(state): State<AppState>, OriginalUri(uri): OriginalUri) -> Response {
    let status = spa_status(&state, uri.path());
    (status, Html(state.index_html.to_string())).into_response()
}

#[cfg(test)]
#[path = "spa_test.rs"]
mod tests;
