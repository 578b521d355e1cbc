//! Testimonials Section

use leptos::prelude::*;
use schoolpal_core::{Icon, KeyedBlock, Section, Testimonial, keyed_blocks};

use crate::components::{IconGlyph, SectionHeading};

const STATS: [&str; 3] = ["🎓 10,000+ Students", "🏫 500+ Schools", "💝 100% Free"];

#[component]
pub fn Testimonials(testimonials: Vec<Testimonial>) -> impl IntoView {
    view! {
        <section id=Section::Testimonials.anchor_id()>
            <SectionHeading
                title="What Students & Teachers Say"
                lead="Real feedback from students, teachers, and parents who are already using Schoolpal AI."
            />

            <div class="grid testimonial-grid">
                <For
                    each=move || keyed_blocks(&testimonials)
                    key=|block| block.key
                    children=move |KeyedBlock { index, key, entry: testimonial }| {
                        let stars = testimonial.star_count();
                        view! {
                            <div
                                class="testimonial"
                                data-key=key.to_string()
                                style=format!("animation-delay: {}ms", index * 100)
                            >
                                <IconGlyph icon=Icon::Quote class="quote" />
                                <p class="content">{format!("\"{}\"", testimonial.content)}</p>
                                <div class="rating" aria-label=format!("{stars} out of 5 stars")>
                                    {(0..stars)
                                        .map(|_| view! { <IconGlyph icon=Icon::Star class="star" /> })
                                        .collect_view()}
                                </div>
                                <div class="author">
                                    <p>{testimonial.name}</p>
                                    <p class="role">{testimonial.role}</p>
                                    <p class="location">{testimonial.location}</p>
                                </div>
                            </div>
                        }
                    }
                />
            </div>

            <div class="callout">
                <h3>"Join Our Mission for Educational Equity"</h3>
                <p>
                    "Be part of the free AI-powered education revolution that's helping students "
                    "achieve their full potential, regardless of their economic background."
                </p>
                <div class="stats">
                    {STATS.into_iter().map(|stat| view! { <span>{stat}</span> }).collect_view()}
                </div>
            </div>
        </section>
    }
}
