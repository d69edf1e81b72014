//! Reactive router context.
//!
//! ARCHITECTURE
//! ============
//! The `navigation::Router` lives in a single `RwSignal` provided through
//! context. Every navigation replaces its current `NavigationState`
//! wholesale; components subscribe to the derived `Memo` and re-render only
//! when the state actually changes.
//!
//! SYSTEM CONTEXT
//! ==============
//! `popstate` events from the browser flow back in through
//! [`RouterContext::sync`], so back/forward buttons and programmatic
//! traversal land on the same recorded entries.

pub mod browser;

use leptos::prelude::*;
use navigation::{NavigationState, Params, RouteError, Router, ViewId};

use self::browser::BrowserHistory;

/// The router type used by the app.
pub type AppRouter = Router<BrowserHistory>;

/// Handle to the shared router, cheap to copy into closures.
#[derive(Clone, Copy)]
pub struct RouterContext {
    router: RwSignal<AppRouter>,
    state: Memo<NavigationState>,
}

impl RouterContext {
    /// Wrap `router` in signals and provide it to descendants.
    pub fn provide(router: AppRouter) -> Self {
        let router = RwSignal::new(router);
        let state = Memo::new(move |_| router.with(|r| r.current().clone()));
        let ctx = Self { router, state };
        provide_context(ctx);
        ctx
    }

    pub fn state(&self) -> Memo<NavigationState> {
        self.state
    }

    pub fn navigate(&self, href: &str) {
        self.router.update(|r| {
            r.navigate(href);
        });
    }

    /// Navigate to the route rendering `view`.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError`] when no route renders `view` or a param is
    /// missing; the current state is left untouched.
    pub fn navigate_to(&self, view: ViewId, params: &Params) -> Result<(), RouteError> {
        let href = self.router.with_untracked(|r| r.table().href_for(view, params))?;
        self.navigate(&href);
        Ok(())
    }

    pub fn replace(&self, href: &str) {
        self.router.update(|r| {
            r.replace(href);
        });
    }

    pub fn back(&self) {
        self.router.update(|r| {
            r.back();
        });
    }

    pub fn forward(&self) {
        self.router.update(|r| {
            r.forward();
        });
    }

    /// Apply a browser traversal (see `Router::sync`).
    pub fn sync(&self, index: Option<usize>, href: &str) {
        self.router.update(|r| {
            r.sync(index, href);
        });
    }

    /// Base-prefixed form of an app-relative href, for `<a href>`.
    pub fn with_base(&self, href: &str) -> String {
        self.router.with_untracked(|r| r.config().with_base(href))
    }

    /// Forward `popstate` events into [`RouterContext::sync`].
    #[cfg(feature = "csr")]
    pub fn listen_popstate(self) {
        let handle = window_event_listener(leptos::ev::popstate, move |ev| {
            let index = ev.state().as_string().as_deref().and_then(browser::decode_history_state);
            self.sync(index, &browser::current_href());
        });
        on_cleanup(move || handle.remove());
    }
}

/// The router provided by [`crate::app::App`].
pub fn use_router() -> RouterContext {
    expect_context::<RouterContext>()
}

/// Current navigation state.
pub fn use_navigation() -> Memo<NavigationState> {
    use_router().state()
}

/// A route param of the current state, e.g. `use_param("id")`.
pub fn use_param(name: &'static str) -> Signal<Option<String>> {
    let state = use_navigation();
    Signal::derive(move || state.with(|s| s.param(name).map(str::to_owned)))
}
