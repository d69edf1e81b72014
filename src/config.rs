//! Server configuration parsed from environment variables.

use std::path::PathBuf;

use navigation::RouterConfig;
use navigation::location::normalize_base;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "client/dist";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {0:?}: expected an integer in 0..=65535")]
    InvalidPort(String),
    #[error("STATIC_DIR must not be empty")]
    EmptyStaticDir,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory holding the built client (`index.html`, wasm, css).
    pub static_dir: PathBuf,
    /// Path prefix the app is mounted under.
    pub base: String,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `STATIC_DIR`: default `client/dist`
    /// - `APP_BASE`: default `/`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let static_dir = match lookup("STATIC_DIR") {
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptyStaticDir),
            Some(raw) => PathBuf::from(raw.trim()),
            None => PathBuf::from(DEFAULT_STATIC_DIR),
        };
        let base = normalize_base(lookup("APP_BASE").as_deref().unwrap_or("/"));

        Ok(Self { port, static_dir, base })
    }

    pub fn router_config(&self) -> RouterConfig {
        RouterConfig::new(&self.base)
    }

    pub fn index_html(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
