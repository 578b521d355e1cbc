//! Dashboard Page

use leptos::prelude::*;
use schoolpal_core::Page;

use crate::head::apply_page_meta;

#[component]
pub fn DashboardPage() -> impl IntoView {
    apply_page_meta(Page::Dashboard);

    view! {
        <main class="dashboard">
            <h1>"Dashboard"</h1>
        </main>
    }
}
