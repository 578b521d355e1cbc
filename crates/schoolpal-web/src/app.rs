//! Main App Component

use std::sync::Arc;

use leptos::logging::error;
use leptos::prelude::*;
use leptos_router::{components::*, path};
use schoolpal_core::Catalog;

use crate::pages::{DashboardPage, HomePage};

/// Root application component
///
/// Loads the content catalog once and shares it with every page.
#[component]
pub fn App() -> impl IntoView {
    let catalog = match Catalog::builtin() {
        Ok(catalog) => catalog,
        Err(err) => {
            error!("Failed to load content catalog: {err}");
            return view! {
                <main class="app">
                    <p class="load-error">"Something went wrong loading this page."</p>
                </main>
            }
            .into_any();
        }
    };
    provide_context(Arc::new(catalog));

    view! {
        <Router>
            <Routes fallback=|| view! { <p>"Page not found"</p> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/dashboard") view=DashboardPage />
            </Routes>
        </Router>
    }
    .into_any()
}
