//! Features Section

use leptos::prelude::*;
use schoolpal_core::{Feature, KeyedBlock, Section, keyed_blocks};

use crate::components::{IconGlyph, SectionHeading};

#[component]
pub fn Features(features: Vec<Feature>) -> impl IntoView {
    view! {
        <section id=Section::Features.anchor_id()>
            <SectionHeading
                title="Why Choose Schoolpal AI?"
                lead="Designed specifically for K-12 education with features that matter to students, parents, and teachers."
            />

            <div class="grid feature-grid">
                <For
                    each=move || keyed_blocks(&features)
                    key=|block| block.key
                    children=move |KeyedBlock { index, key, entry: feature }| {
                        view! {
                            <div
                                class="feature-card"
                                data-key=key.to_string()
                                style=format!("animation-delay: {}ms", index * 100)
                            >
                                <div class="feature-icon">
                                    <IconGlyph icon=feature.icon />
                                </div>
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                            </div>
                        }
                    }
                />
            </div>
        </section>
    }
}
