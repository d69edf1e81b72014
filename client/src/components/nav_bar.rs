//! Top navigation grouped by role.
//!
//! Only routes without dynamic segments get a nav entry; detail pages are
//! reached from their list pages.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use navigation::{Params, Role, RouteTable};

use crate::components::link::Link;

/// A single nav link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub role: Role,
    pub label: &'static str,
    pub href: String,
}

/// Nav entries for every parameterless route, in table order.
pub fn nav_entries(table: &RouteTable) -> Vec<NavEntry> {
    table
        .routes()
        .filter(|route| !route.pattern().has_params())
        .filter_map(|route| {
            let href = route.pattern().build(&Params::new()).ok()?;
            Some(NavEntry { role: route.view().role(), label: route.view().title(), href })
        })
        .collect()
}

/// Entries grouped by role, skipping roles without entries.
pub fn nav_sections(entries: &[NavEntry]) -> Vec<(Role, Vec<NavEntry>)> {
    Role::ALL
        .into_iter()
        .filter_map(|role| {
            let links: Vec<NavEntry> = entries.iter().filter(|e| e.role == role).cloned().collect();
            (!links.is_empty()).then_some((role, links))
        })
        .collect()
}

#[component]
pub fn NavBar() -> impl IntoView {
    let sections = nav_sections(&nav_entries(&RouteTable::gradpath()));

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"GradPath"</span>
            {sections
                .into_iter()
                .map(|(role, links)| {
                    view! {
                        <div class="nav-bar__section" data-role=role.as_str()>
                            <span class="nav-bar__role">{role.label()}</span>
                            {links
                                .into_iter()
                                .map(|entry| {
                                    view! {
                                        <Link href=entry.href class="nav-bar__link">
                                            {entry.label}
                                        </Link>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}
