//! Student view of their own application.

use leptos::prelude::*;
use navigation::ViewId;

use crate::router::use_param;

#[component]
pub fn MyApplicationPage() -> impl IntoView {
    let id = use_param("id");

    view! {
        <section class="page page--student" data-view=ViewId::MyApplication.identifier()>
            <h1>{ViewId::MyApplication.title()}</h1>
            <p class="page__meta">
                "Application " <span class="page__id">{move || id.get().unwrap_or_default()}</span>
            </p>
        </section>
    }
}
