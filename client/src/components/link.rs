//! History-mode anchor.
//!
//! Renders a real `<a href>` so middle-click, copy-link and no-JS fallbacks
//! keep working, and turns plain left clicks into router navigations.

#[cfg(test)]
#[path = "link_test.rs"]
mod link_test;

use leptos::prelude::*;

use crate::router::use_router;

/// The parts of a click that decide whether the router handles it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickInfo {
    pub button: i16,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
    pub default_prevented: bool,
}

impl ClickInfo {
    pub fn from_event(ev: &leptos::ev::MouseEvent) -> Self {
        Self {
            button: ev.button(),
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
            shift: ev.shift_key(),
            alt: ev.alt_key(),
            default_prevented: ev.default_prevented(),
        }
    }
}

/// Whether a click on a link with `target` should become a router navigation.
///
/// Modified clicks, non-primary buttons, already-handled events and links
/// opening another browsing context are left to the browser.
pub fn should_intercept(click: ClickInfo, target: Option<&str>) -> bool {
    if click.default_prevented || click.button != 0 {
        return false;
    }
    if click.ctrl || click.meta || click.shift || click.alt {
        return false;
    }
    target.is_none_or(|t| t.is_empty() || t.eq_ignore_ascii_case("_self"))
}

/// Anchor that navigates through the router. `href` is app-relative.
#[component]
pub fn Link(
    #[prop(into)] href: String,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] target: Option<String>,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let state = router.state();
    let full_href = router.with_base(&href);
    let active = {
        let href = href.clone();
        move || state.with(|s| s.href() == href)
    };
    let target_attr = target.clone();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        if !should_intercept(ClickInfo::from_event(&ev), target.as_deref()) {
            return;
        }
        ev.prevent_default();
        router.navigate(&href);
    };

    view! {
        <a
            href=full_href
            class=class
            class:router-link-active=active
            target=target_attr
            on:click=on_click
        >
            {children()}
        </a>
    }
}
