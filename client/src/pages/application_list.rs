//! Reviewer queue of applications.
//!
//! The list itself is filled by the review service; this page owns the
//! "open by id" jump that routes straight to a review detail screen.

#[cfg(test)]
#[path = "application_list_test.rs"]
mod application_list_test;

use leptos::prelude::*;
use navigation::{Params, ViewId};

use crate::router::use_router;

/// Normalize a typed application id; blank input yields `None`.
pub fn parse_application_id(raw: &str) -> Option<String> {
    let id = raw.trim();
    (!id.is_empty()).then(|| id.to_owned())
}

#[component]
pub fn ApplicationListPage() -> impl IntoView {
    let router = use_router();
    let lookup = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_open = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = parse_application_id(&lookup.get()) else {
            info.set("Enter an application id.".to_owned());
            return;
        };
        info.set(String::new());
        if let Err(e) = router.navigate_to(ViewId::ReviewDetail, &Params::from([("id", id)])) {
            info.set(format!("Cannot open application: {e}"));
        }
    };

    view! {
        <section class="page page--reviewer" data-view=ViewId::ApplicationList.identifier()>
            <h1>{ViewId::ApplicationList.title()}</h1>
            <form class="page__lookup" on:submit=on_open>
                <input
                    class="page__lookup-input"
                    type="text"
                    placeholder="Application id"
                    prop:value=move || lookup.get()
                    on:input=move |ev| lookup.set(event_target_value(&ev))
                />
                <button class="page__lookup-button" type="submit">
                    "Open"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="page__message">{move || info.get()}</p>
            </Show>
        </section>
    }
}
