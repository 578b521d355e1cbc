//! Hero Section

use leptos::prelude::*;
use schoolpal_core::{Icon, Section};

use crate::components::IconGlyph;
use crate::nav::scroll_to;

const BENEFITS: [(Icon, &str); 3] = [
    (Icon::Wifi, "Works Offline"),
    (Icon::BookOpen, "Curriculum Focused"),
    (Icon::Shield, "Safe & Controlled"),
];

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id=Section::Hero.anchor_id() aria-labelledby="site-name">
            <hgroup>
                <h1 id="site-name" class="title">
                    "AI-Powered"
                    <span class="title-soft">"Offline Tutor"</span>
                </h1>
                <p>
                    "Free AI-powered conversation-based learning for K-12 students. Works "
                    "offline, stays focused on your curriculum, and helps build strong "
                    "study skills for everyone."
                </p>
            </hgroup>

            <div class="benefits">
                {BENEFITS
                    .into_iter()
                    .map(|(icon, label)| {
                        view! {
                            <div>
                                <IconGlyph icon=icon />
                                <span>{label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="cta-buttons">
                <button
                    type="button"
                    class="var-inverted scale-background-on-hover"
                    on:click=move |_| scroll_to(Section::Contact)
                >
                    "Get Started"
                    <IconGlyph icon=Icon::ArrowRight class="icon-trailing" />
                </button>
                <button type="button" on:click=move |_| scroll_to(Section::HowItWorks)>
                    "See How It Works"
                </button>
            </div>

            <div class="free-access">
                <p>"100% Free for All Students"</p>
                <div>
                    <span class="free-access-headline">"No Cost"</span>
                    <span>" • Ever"</span>
                </div>
                <p>"Non-profit initiative to democratize education"</p>
            </div>
        </section>
    }
}
