//! Root application component with routing and the page outlet.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use navigation::{NavigationState, ViewId};

use crate::components::nav_bar::NavBar;
use crate::pages::{
    application_list::ApplicationListPage, my_application::MyApplicationPage, not_found::NotFoundPage,
    review_detail::ReviewDetailPage, system_overview::SystemOverviewPage,
};
use crate::router::{RouterContext, browser};

const APP_NAME: &str = "GradPath";

/// Document title for a navigation state.
pub fn document_title(state: &NavigationState) -> String {
    match state.view() {
        Some(view) => match state.param("id") {
            Some(id) => format!("{} #{id} · {APP_NAME}", view.title()),
            None => format!("{} · {APP_NAME}", view.title()),
        },
        None => format!("Page not found · {APP_NAME}"),
    }
}

/// Root application component.
///
/// Provides the router context and renders the page for the active view.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let router = RouterContext::provide(browser::initial_router());
    #[cfg(feature = "csr")]
    router.listen_popstate();

    let state = router.state();
    let active = Memo::new(move |_| state.with(NavigationState::view));
    let title = move || state.with(document_title);

    view! {
        <Title text=title/>
        <div class="app-shell">
            <NavBar/>
            <main class="app-main">{move || render_view(active.get())}</main>
        </div>
    }
}

fn render_view(view: Option<ViewId>) -> AnyView {
    match view {
        Some(ViewId::MyApplication) => view! { <MyApplicationPage/> }.into_any(),
        Some(ViewId::ApplicationList) => view! { <ApplicationListPage/> }.into_any(),
        Some(ViewId::ReviewDetail) => view! { <ReviewDetailPage/> }.into_any(),
        Some(ViewId::SystemOverview) => view! { <SystemOverviewPage/> }.into_any(),
        None => view! { <NotFoundPage/> }.into_any(),
    }
}
