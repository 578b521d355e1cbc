//! How It Works Section

use leptos::prelude::*;
use schoolpal_core::{KeyedBlock, Section, Step, keyed_blocks};

use crate::components::{IconGlyph, SectionHeading};
use crate::nav::scroll_to;

#[component]
pub fn HowItWorks(steps: Vec<Step>) -> impl IntoView {
    let last = steps.len().saturating_sub(1);

    view! {
        <section id=Section::HowItWorks.anchor_id()>
            <SectionHeading
                title="How It Works"
                lead="Getting started with Schoolpal AI is simple. Four easy steps to transform your learning experience."
            />

            <div class="grid step-grid">
                <For
                    each=move || keyed_blocks(&steps)
                    key=|block| block.key
                    children=move |KeyedBlock { index, key, entry: step }| {
                        view! {
                            <div class="step" data-key=key.to_string()>
                                <div class="step-marker">
                                    <div class="step-icon">
                                        <IconGlyph icon=step.icon />
                                    </div>
                                    <div class="step-ordinal">{step.id}</div>
                                    {(index < last).then(|| view! { <div class="step-connector"></div> })}
                                </div>
                                <h3>{step.title}</h3>
                                <p>{step.description}</p>
                            </div>
                        }
                    }
                />
            </div>

            <div class="callout">
                <h3>"Ready to See It in Action?"</h3>
                <p>
                    "Experience how Schoolpal AI transforms traditional studying into "
                    "engaging, interactive learning sessions."
                </p>
                <button type="button" class="var-inverted" on:click=move |_| scroll_to(Section::Contact)>
                    "Request a Demo"
                </button>
            </div>
        </section>
    }
}
