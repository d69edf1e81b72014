//! Reviewer detail screen for one application.

use leptos::prelude::*;
use navigation::ViewId;

use crate::components::link::Link;
use crate::router::use_param;

#[component]
pub fn ReviewDetailPage() -> impl IntoView {
    let id = use_param("id");

    view! {
        <section class="page page--reviewer" data-view=ViewId::ReviewDetail.identifier()>
            <Link href="/reviewer/applications" class="page__back">
                "← Applications"
            </Link>
            <h1>{ViewId::ReviewDetail.title()}</h1>
            <p class="page__meta">
                "Application " <span class="page__id">{move || id.get().unwrap_or_default()}</span>
            </p>
        </section>
    }
}
