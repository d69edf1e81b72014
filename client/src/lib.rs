//! # client
//!
//! Leptos + WASM frontend for the graduate pathway administration tool.
//!
//! The crate renders one page per route of the shared `navigation` table
//! (student application, reviewer list and detail, admin overview) and a
//! not-found fallback. Routing runs in history mode: links and programmatic
//! navigation push `window.history` entries instead of reloading the
//! document, and `popstate` restores the recorded state.

pub mod app;
pub mod components;
pub mod pages;
pub mod router;

/// Browser entry point: logging, panic hook, then mount [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }
    log::info!("gradpath client starting");
    leptos::mount::mount_to_body(app::App);
}
