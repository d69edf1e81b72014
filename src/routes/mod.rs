//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client is a history-mode SPA, so the browser asks this server for
//! arbitrary app paths on reload or deep link. Built assets are served from
//! the static directory; everything else falls through to [`spa`], which
//! answers with the SPA shell and a status taken from the shared route table.
//!
//! DESIGN
//! ======
//! With a non-root base the assets and the fallback are nested under it, so
//! `/gradpath/app.js` maps to `STATIC_DIR/app.js`. Paths outside the base
//! answer a bare `404`. `/healthz` always lives at the root.

pub mod spa;

use std::path::Path;

use axum::Router;
use axum::handler::Handler;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application router: health check, static assets, SPA fallback.
pub fn app(state: AppState, static_dir: &Path) -> Router {
    let base = state.router_config.base().to_owned();
    let assets = ServeDir::new(static_dir)
        .append_index_html_on_directories(false)
        .fallback(spa::spa_fallback.with_state(state));

    let router = Router::new().route("/healthz", get(healthz));
    let router = if base == "/" {
        router.fallback_service(assets)
    } else {
        router.nest_service(&base, assets).fallback(outside_base)
    };

    router.layer(CompressionLayer::new()).layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn outside_base() -> StatusCode {
    StatusCode::NOT_FOUND
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
