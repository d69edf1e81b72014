//! Fallback for paths no route matches.

use leptos::prelude::*;

use crate::components::link::Link;
use crate::router::use_navigation;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let state = use_navigation();
    let path = move || state.with(|s| s.path().to_owned());

    view! {
        <section class="page page--not-found">
            <h1>"Page not found."</h1>
            <p class="page__meta">
                "Nothing lives at " <code>{path}</code>
            </p>
            <Link href="/reviewer/applications">"Go to applications"</Link>
        </section>
    }
}
