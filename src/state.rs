//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! route table and the SPA shell are read once at startup and shared
//! immutably; nothing here changes while the server runs.

use std::path::PathBuf;
use std::sync::Arc;

use navigation::{RouteTable, RouterConfig};

use crate::config::ServerConfig;

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("failed to read SPA shell {}: {source}", path.display())]
    IndexHtml { path: PathBuf, source: std::io::Error },
}

#[derive(Clone)]
pub struct AppState {
    pub table: Arc<RouteTable>,
    pub router_config: RouterConfig,
    /// Body of `index.html`, returned for every history-mode fallback.
    pub index_html: Arc<str>,
}

impl AppState {
    pub fn new(table: RouteTable, router_config: RouterConfig, index_html: impl Into<Arc<str>>) -> Self {
        Self { table: Arc::new(table), router_config, index_html: index_html.into() }
    }

    /// Load the SPA shell from the configured static directory.
    pub async fn load(config: &ServerConfig) -> Result<Self, StateError> {
        let path = config.index_html();
        let index_html = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| StateError::IndexHtml { path, source })?;
        Ok(Self::new(RouteTable::gradpath(), config.router_config(), index_html))
    }
}
