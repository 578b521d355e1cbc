//! Contact Section

use leptos::ev::SubmitEvent;
use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;
use schoolpal_core::contact::ACKNOWLEDGEMENT;
use schoolpal_core::{ContactForm, Field, Icon, Section, SubmissionSink, SubmissionStatus};

use crate::api::HttpSink;
use crate::components::IconGlyph;

const AUDIENCES: [&str; 5] = [
    "Teachers looking to enhance classroom learning",
    "Parents wanting better study support at home",
    "Schools seeking free AI education tools",
    "NGOs working with underprivileged students",
    "Organizations supporting educational equity",
];

const INVOLVEMENT: [&str; 4] = [
    "Download and try Schoolpal AI in your classroom",
    "Share feedback to help us improve",
    "Spread the word about free AI education",
    "Partner with us for wider implementation",
];

#[component]
pub fn Contact() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let mut started = None;
        form.update(|f| started = Some(f.begin_submit()));
        let Some(Ok(submission)) = started else {
            return;
        };
        log!("Form submitted: {submission:?}");

        spawn_local(async move {
            let outcome = HttpSink::new().submit(&submission).await;
            form.update(|f| {
                if let Err(err) = f.complete(outcome) {
                    warn!("Contact submission failed: {err}");
                }
            });
        });
    };

    view! {
        <section id=Section::Contact.anchor_id() class="contact">
            <hgroup class="section-heading">
                <h2>"Join Our Community"</h2>
                <p>
                    "Be part of the movement to make quality AI education accessible to "
                    "every student, everywhere."
                </p>
            </hgroup>

            <div class="grid contact-grid">
                <div class="contact-info">
                    <h3>"Join Our Mission"</h3>
                    <p>
                        "Schoolpal AI is a community-driven initiative focused on democratizing "
                        "education through free AI tutoring. We believe every student deserves "
                        "access to quality learning tools, regardless of their economic background."
                    </p>

                    <h4>"Perfect for:"</h4>
                    <ul>{AUDIENCES.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}</ul>

                    <h4>"How to Get Involved:"</h4>
                    <ul>{INVOLVEMENT.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}</ul>
                </div>

                <div class="contact-form">
                    <h3>"Get Updates & Resources"</h3>

                    <form on:submit=on_submit>
                        <div class="grid field-pair">
                            <TextInput form=form field=Field::Name />
                            <TextInput form=form field=Field::Email kind="email" />
                        </div>
                        <TextInput form=form field=Field::Organization />
                        <MessageInput form=form />

                        <button
                            type="submit"
                            class="var-inverted"
                            disabled=move || form.with(ContactForm::is_submitting)
                        >
                            <IconGlyph icon=Icon::Send class="icon-leading" />
                            "Join Our Community"
                        </button>
                    </form>

                    <FormStatus form=form />
                </div>
            </div>
        </section>
    }
}

fn input_id(field: Field) -> String {
    format!("contact-{}", field.name())
}

#[component]
fn FieldLabel(field: Field) -> impl IntoView {
    view! {
        <label for=input_id(field)>
            {field.label()}
            {field.is_required().then_some(" *")}
        </label>
    }
}

#[component]
fn TextInput(
    form: RwSignal<ContactForm>,
    field: Field,
    #[prop(default = "text")] kind: &'static str,
) -> impl IntoView {
    view! {
        <div class="field">
            <FieldLabel field=field />
            <input
                type=kind
                id=input_id(field)
                name=field.name()
                placeholder=field.placeholder()
                required=field.is_required()
                maxlength=field.max_len().to_string()
                prop:value=move || form.with(|f| f.value(field).to_string())
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
fn MessageInput(form: RwSignal<ContactForm>) -> impl IntoView {
    let field = Field::Message;

    view! {
        <div class="field">
            <FieldLabel field=field />
            <textarea
                id=input_id(field)
                name=field.name()
                placeholder=field.placeholder()
                required=field.is_required()
                maxlength=field.max_len().to_string()
                rows="5"
                prop:value=move || form.with(|f| f.value(field).to_string())
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            />
        </div>
    }
}

/// Acknowledgement or error under the form
#[component]
fn FormStatus(form: RwSignal<ContactForm>) -> impl IntoView {
    move || match form.with(|f| f.status().clone()) {
        SubmissionStatus::Editing => ().into_any(),
        SubmissionStatus::Submitting => {
            view! { <p class="form-status pending">"Sending..."</p> }.into_any()
        }
        SubmissionStatus::Succeeded(receipt) => {
            let received = receipt
                .received_at
                .with_timezone(&chrono::Local)
                .format("%b %e, %H:%M");
            view! {
                <p class="form-status success" role="status">
                    {ACKNOWLEDGEMENT}
                    <span class="receipt">{format!(" Reference {} ({received})", receipt.id)}</span>
                </p>
            }
            .into_any()
        }
        SubmissionStatus::Failed(message) => {
            view! { <p class="form-status error" role="alert">{message}</p> }.into_any()
        }
    }
}
