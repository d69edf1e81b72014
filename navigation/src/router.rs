//! History-mode router.
//!
//! ARCHITECTURE
//! ============
//! The router owns the entry stack (`entries` + `cursor`) and treats the
//! [`HistoryBackend`] as a mirror. Every operation first updates the stack,
//! then tells the backend. Traversal therefore restores the exact
//! [`NavigationState`] that was recorded, never a re-resolution.
//!
//! Hrefs passed to [`Router::navigate`] and [`Router::replace`] are
//! app-relative. Hrefs coming from the browser ([`Router::new`],
//! [`Router::sync`]) carry the base and have it stripped.
//!
//! Navigating to a path with no route is not an error: the entry records the
//! not-found state and the UI renders its fallback.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use crate::history::HistoryBackend;
use crate::location::{Location, RouterConfig};
use crate::params::Params;
use crate::state::NavigationState;
use crate::table::{RouteError, RouteTable};
use crate::view::ViewId;

#[derive(Clone, Debug)]
pub struct Router<H> {
    table: RouteTable,
    config: RouterConfig,
    history: H,
    entries: Vec<NavigationState>,
    cursor: usize,
}

impl<H: HistoryBackend> Router<H> {
    /// Resolve `initial_href` (a browser href, base included) and record it
    /// as entry 0.
    pub fn new(table: RouteTable, config: RouterConfig, mut history: H, initial_href: &str) -> Self {
        let location = config.strip_base(Location::parse(initial_href));
        let state = NavigationState::resolve(&table, location);
        history.replace(0, &config.with_base(&state.href()));
        tracing::debug!(href = %state.href(), view = ?state.view(), "router initialized");
        Self { table, config, history, entries: vec![state], cursor: 0 }
    }

    #[must_use]
    pub fn current(&self) -> &NavigationState {
        &self.entries[self.cursor]
    }

    /// Push a new entry for `href`, dropping any forward entries.
    ///
    /// Navigating to the current href is a no-op.
    pub fn navigate(&mut self, href: &str) -> &NavigationState {
        let location = Location::parse(href);
        if location.href() == self.current().href() {
            tracing::debug!(href = %location.href(), "navigation to current location skipped");
            return self.current();
        }
        let state = NavigationState::resolve(&self.table, location);
        self.push_entry(state);
        let href = self.config.with_base(&self.current().href());
        self.history.push(self.cursor, &href);
        self.current()
    }

    /// Push the href of the route rendering `view`.
    ///
    /// # Errors
    ///
    /// Propagates [`RouteError`] from [`RouteTable::href_for`].
    pub fn navigate_to(&mut self, view: ViewId, params: &Params) -> Result<&NavigationState, RouteError> {
        let href = self.table.href_for(view, params)?;
        Ok(self.navigate(&href))
    }

    /// Resolve `href` and overwrite the current entry.
    pub fn replace(&mut self, href: &str) -> &NavigationState {
        let state = NavigationState::resolve(&self.table, Location::parse(href));
        tracing::debug!(href = %state.href(), view = ?state.view(), index = self.cursor, "replaced");
        self.entries[self.cursor] = state;
        let href = self.config.with_base(&self.current().href());
        self.history.replace(self.cursor, &href);
        self.current()
    }

    pub fn back(&mut self) -> Option<&NavigationState> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Option<&NavigationState> {
        self.go(1)
    }

    /// Move `delta` entries through history. Out of range leaves the router
    /// untouched and returns `None`.
    pub fn go(&mut self, delta: isize) -> Option<&NavigationState> {
        let target = self.cursor.checked_add_signed(delta).filter(|t| *t < self.entries.len())?;
        if target != self.cursor {
            self.cursor = target;
            self.history.go(delta);
            tracing::debug!(index = target, href = %self.current().href(), "traversed");
        }
        Some(self.current())
    }

    /// Apply a traversal the browser already performed (`popstate`).
    ///
    /// `index` is the entry index stored in the browser's history state, if
    /// any. When it names a recorded entry with the same href, that exact
    /// entry becomes current. Otherwise the href is resolved and recorded as
    /// a new entry.
    pub fn sync(&mut self, index: Option<usize>, href: &str) -> &NavigationState {
        let location = self.config.strip_base(Location::parse(href));
        let known = index.filter(|i| self.entries.get(*i).is_some_and(|e| e.location.href() == location.href()));
        if let Some(index) = known {
            if index != self.cursor {
                tracing::debug!(from = self.cursor, to = index, "synced to recorded entry");
                self.cursor = index;
            }
            return self.current();
        }

        let state = NavigationState::resolve(&self.table, location);
        tracing::debug!(href = %state.href(), ?index, "synced to unrecorded location");
        self.push_entry(state);
        let href = self.config.with_base(&self.current().href());
        self.history.replace(self.cursor, &href);
        self.current()
    }

    /// Base-prefixed href for `view`, suitable for an `<a href>`.
    ///
    /// # Errors
    ///
    /// Propagates [`RouteError`] from [`RouteTable::href_for`].
    pub fn href_for(&self, view: ViewId, params: &Params) -> Result<String, RouteError> {
        self.table.href_for(view, params).map(|href| self.config.with_base(&href))
    }

    fn push_entry(&mut self, state: NavigationState) {
        tracing::debug!(href = %state.href(), view = ?state.view(), index = self.cursor + 1, "navigated");
        self.entries.truncate(self.cursor + 1);
        self.entries.push(state);
        self.cursor = self.entries.len() - 1;
    }
}

impl<H> Router<H> {
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: a router holds at least its initial entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the current entry.
    #[must_use]
    pub fn index(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    #[must_use]
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    #[must_use]
    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }
}
