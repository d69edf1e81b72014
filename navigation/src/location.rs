//! Parsed request targets and base-path handling.
//!
//! A [`Location`] is what the router resolves: a normalized path (dot
//! segments removed, still percent-encoded), the decoded query pairs, and
//! the fragment. Absolute URLs are accepted and their origin is dropped.

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

use serde::{Deserialize, Serialize};
use url::Url;
use url::form_urlencoded;

/// Origin used to resolve relative hrefs. Never leaves this module.
const LOCAL_ORIGIN: &str = "http://localhost/";

/// A request target: `path[?query][#hash]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub path: String,
    pub query: Vec<(String, String)>,
    pub hash: Option<String>,
}

impl Default for Location {
    fn default() -> Self {
        Self::root()
    }
}

impl Location {
    #[must_use]
    pub fn root() -> Self {
        Self { path: "/".to_owned(), query: Vec::new(), hash: None }
    }

    /// Parse an href. Empty input is the root; input that cannot be read as
    /// an http(s) target also falls back to the root.
    #[must_use]
    pub fn parse(href: &str) -> Self {
        let href = href.trim();
        if href.is_empty() {
            return Self::root();
        }
        match parse_url(href) {
            Some(url) => Self::from_url(&url),
            None => {
                tracing::warn!(href, "unreadable location; using root");
                Self::root()
            }
        }
    }

    fn from_url(url: &Url) -> Self {
        let query = url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect();
        let hash = url.fragment().filter(|f| !f.is_empty()).map(str::to_owned);
        Self { path: url.path().to_owned(), query, hash }
    }

    /// Raw path segments, without the leading slash and without a single
    /// trailing empty segment.
    #[must_use]
    pub fn segments(&self) -> Vec<&str> {
        let trimmed = self.path.strip_prefix('/').unwrap_or(&self.path);
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
        if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').collect()
        }
    }

    /// First value for `key` in the query string.
    #[must_use]
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Serialize back to `path[?query][#hash]`.
    #[must_use]
    pub fn href(&self) -> String {
        let mut out = self.path.clone();
        if !self.query.is_empty() {
            let encoded = form_urlencoded::Serializer::new(String::new()).extend_pairs(&self.query).finish();
            out.push('?');
            out.push_str(&encoded);
        }
        if let Some(hash) = &self.hash {
            out.push('#');
            out.push_str(hash);
        }
        out
    }
}

fn parse_url(href: &str) -> Option<Url> {
    if let Ok(url) = Url::parse(href) {
        return is_http(&url).then_some(url);
    }
    match Url::parse(LOCAL_ORIGIN).and_then(|origin| origin.join(href)) {
        Ok(url) if is_http(&url) => Some(url),
        _ => None,
    }
}

fn is_http(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}

/// Router configuration.
///
/// `base` is the path prefix the app is mounted under. It is stripped from
/// browser locations before matching and prepended to hrefs handed to the
/// history backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouterConfig {
    base: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self { base: "/".to_owned() }
    }
}

impl RouterConfig {
    /// Build a config with `base` normalized to a leading slash and no
    /// trailing slash (except the root itself).
    #[must_use]
    pub fn new(base: &str) -> Self {
        Self { base: normalize_base(base) }
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    fn is_root(&self) -> bool {
        self.base == "/"
    }

    /// Remove the base prefix from a browser location. Locations outside the
    /// base are returned unchanged.
    #[must_use]
    pub fn strip_base(&self, mut location: Location) -> Location {
        if self.is_root() {
            return location;
        }
        if location.path == self.base {
            location.path = "/".to_owned();
        } else if let Some(rest) = location.path.strip_prefix(&self.base) {
            if rest.starts_with('/') {
                location.path = rest.to_owned();
            }
        }
        location
    }

    /// Prefix an app-relative href with the base.
    #[must_use]
    pub fn with_base(&self, href: &str) -> String {
        if self.is_root() {
            return href.to_owned();
        }
        if href == "/" {
            return self.base.clone();
        }
        format!("{}{href}", self.base)
    }
}

/// Normalize a base path: leading slash, no trailing slash, `/` for empty.
#[must_use]
pub fn normalize_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_owned()
    } else {
        format!("/{trimmed}")
    }
}
