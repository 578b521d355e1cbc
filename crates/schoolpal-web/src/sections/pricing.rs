//! Pricing Section

use leptos::prelude::*;
use schoolpal_core::{Icon, KeyedBlock, PricingPlan, Section, keyed_blocks};

use crate::components::{IconGlyph, SectionHeading};
use crate::nav::scroll_to;

#[component]
pub fn Pricing(plans: Vec<PricingPlan>) -> impl IntoView {
    view! {
        <section id=Section::Pricing.anchor_id()>
            <SectionHeading
                title="Free for Everyone"
                lead="Education should be accessible to all. That's why Schoolpal AI is completely free, forever."
            />

            <div class="grid plan-grid">
                <For
                    each=move || keyed_blocks(&plans)
                    key=|block| block.key
                    children=move |block| view! { <PlanCard block=block /> }
                />
            </div>

            <div class="callout">
                <p>"Want to support our mission to democratize education?"</p>
                <button type="button" on:click=move |_| scroll_to(Section::Contact)>
                    "Learn about donations and partnerships"
                </button>
            </div>
        </section>
    }
}

#[component]
fn PlanCard(block: KeyedBlock<PricingPlan>) -> impl IntoView {
    let KeyedBlock { key, entry: plan, .. } = block;
    let popular = plan.popular;
    let suffix = plan.price_suffix();
    let (card_class, cta_class) = if popular {
        ("plan popular", "var-inverted")
    } else {
        ("plan", "")
    };

    view! {
        <div class=card_class data-key=key.to_string()>
            {popular.then(|| view! { <span class="badge">"Most Popular"</span> })}

            <div class="plan-header">
                <h3>{plan.name}</h3>
                <div class="price">
                    <span class="amount">{plan.price}</span>
                    <span class="period">{suffix}</span>
                </div>
            </div>

            <ul class="plan-features">
                {plan
                    .features
                    .into_iter()
                    .map(|feature| {
                        view! {
                            <li>
                                <IconGlyph icon=Icon::Check />
                                <span>{feature}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <button type="button" class=cta_class on:click=move |_| scroll_to(Section::Contact)>
                "Get Started"
            </button>
        </div>
    }
}
