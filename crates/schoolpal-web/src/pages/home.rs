//! Home Page

use std::sync::Arc;

use leptos::prelude::*;
use schoolpal_core::{Catalog, Page, Section};

use crate::head::apply_page_meta;
use crate::sections::{Contact, Features, Hero, HowItWorks, Pricing, Testimonials};

/// Landing page: every section in `Section::PAGE_ORDER`
#[component]
pub fn HomePage() -> impl IntoView {
    let catalog = expect_context::<Arc<Catalog>>();
    apply_page_meta(Page::Home);

    view! {
        <main class="main-home">
            {Section::PAGE_ORDER
                .into_iter()
                .map(|section| section_view(section, &catalog))
                .collect_view()}
        </main>
    }
}

fn section_view(section: Section, catalog: &Catalog) -> AnyView {
    match section {
        Section::Hero => view! { <Hero /> }.into_any(),
        Section::Features => view! { <Features features=catalog.features.clone() /> }.into_any(),
        Section::HowItWorks => view! { <HowItWorks steps=catalog.steps.clone() /> }.into_any(),
        Section::Pricing => view! { <Pricing plans=catalog.pricing_plans.clone() /> }.into_any(),
        Section::Testimonials => {
            view! { <Testimonials testimonials=catalog.testimonials.clone() /> }.into_any()
        }
        Section::Contact => view! { <Contact /> }.into_any(),
    }
}
