//! `window.history` backend for the router.
//!
//! Each entry's `history.state` is a JSON string `{"index":n}` naming the
//! router entry it mirrors, so a later `popstate` can be mapped back to the
//! exact recorded state. Outside the browser every call is a no-op.
//!
//! ERROR HANDLING
//! ==============
//! History API failures are logged and dropped: the router's in-memory stack
//! stays authoritative and the page keeps working without URL updates.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use navigation::{HistoryBackend, Location, RouteTable, Router, RouterConfig};
use serde::{Deserialize, Serialize};

use super::AppRouter;

#[derive(Debug, Serialize, Deserialize)]
struct HistoryEntryState {
    index: usize,
}

/// Serialize the `history.state` payload for entry `index`.
pub fn encode_history_state(index: usize) -> String {
    serde_json::to_string(&HistoryEntryState { index }).unwrap_or_default()
}

/// Read an entry index back from a `history.state` payload.
pub fn decode_history_state(raw: &str) -> Option<usize> {
    serde_json::from_str::<HistoryEntryState>(raw).ok().map(|s| s.index)
}

/// Router config from the document's `<base href>`, if any.
pub fn config_from_base_href(base_href: Option<&str>) -> RouterConfig {
    match base_href.map(str::trim).filter(|h| !h.is_empty()) {
        Some(href) => RouterConfig::new(&Location::parse(href).path),
        None => RouterConfig::default(),
    }
}

/// Current browser href, or `/` outside the browser.
pub fn current_href() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_else(|| "/".to_owned())
    }
    #[cfg(not(feature = "csr"))]
    {
        "/".to_owned()
    }
}

fn document_base_href() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let document = web_sys::window()?.document()?;
        document.query_selector("base").ok().flatten()?.get_attribute("href")
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Router for the graduate pathway table, resolved against the current URL.
pub fn initial_router() -> AppRouter {
    let config = config_from_base_href(document_base_href().as_deref());
    Router::new(RouteTable::gradpath(), config, BrowserHistory, &current_href())
}

/// [`HistoryBackend`] over `window.history`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHistory;

#[cfg(feature = "csr")]
fn history() -> Option<web_sys::History> {
    web_sys::window().and_then(|w| w.history().ok())
}

#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
impl HistoryBackend for BrowserHistory {
    fn push(&mut self, index: usize, href: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(history) = history() else {
                return;
            };
            let state = wasm_bindgen::JsValue::from_str(&encode_history_state(index));
            if let Err(err) = history.push_state_with_url(&state, "", Some(href)) {
                log::warn!("pushState to {href} failed: {err:?}");
            }
        }
    }

    fn replace(&mut self, index: usize, href: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(history) = history() else {
                return;
            };
            let state = wasm_bindgen::JsValue::from_str(&encode_history_state(index));
            if let Err(err) = history.replace_state_with_url(&state, "", Some(href)) {
                log::warn!("replaceState to {href} failed: {err:?}");
            }
        }
    }

    fn go(&mut self, delta: isize) {
        #[cfg(feature = "csr")]
        {
            let Some(history) = history() else {
                return;
            };
            let Ok(delta) = i32::try_from(delta) else {
                log::warn!("history delta {delta} out of range");
                return;
            };
            if let Err(err) = history.go_with_delta(delta) {
                log::warn!("history.go({delta}) failed: {err:?}");
            }
        }
    }
}
