//! Admin system overview.

use leptos::prelude::*;
use navigation::ViewId;

use crate::components::link::Link;

#[component]
pub fn SystemOverviewPage() -> impl IntoView {
    view! {
        <section class="page page--admin" data-view=ViewId::SystemOverview.identifier()>
            <h1>{ViewId::SystemOverview.title()}</h1>
            <ul class="page__links">
                <li>
                    <Link href="/reviewer/applications">"Review queue"</Link>
                </li>
            </ul>
        </section>
    }
}
