use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::magnetic::Magnetic;
use crate::components::notification::use_toasts;
use crate::components::reveal::Reveal;
use crate::contact::{self, ContactField, ContactForm, BUDGETS};

#[function_component(Contact)]
pub fn contact_page() -> Html {
    let form = use_state(ContactForm::default);
    let submitting = use_state(|| false);
    let toasts = use_toasts();

    let on_field = |field: ContactField| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
        })
    };
    let on_input = |field: ContactField| {
        let on_field = on_field(field);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_field.emit(input.value());
        })
    };
    let on_message = {
        let on_field = on_field(ContactField::Message);
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_field.emit(input.value());
        })
    };
    let on_budget = {
        let on_field = on_field(ContactField::Budget);
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_field.emit(select.value());
        })
    };

    let onsubmit = {
        let form = form.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let current = (*form).clone();
            if let Err(err) = current.validate() {
                if let Some(toasts) = &toasts {
                    toasts.error(err.to_string());
                }
                return;
            }

            submitting.set(true);
            if let Some(toasts) = &toasts {
                toasts.info("Sending your message…");
            }
            let form = form.clone();
            let submitting = submitting.clone();
            let toasts = toasts.clone();
            spawn_local(async move {
                let result = contact::submit(&current).await;
                submitting.set(false);
                match result {
                    Ok(confirmation) => {
                        info!("enquiry sent");
                        form.set(ContactForm::default());
                        if let Some(toasts) = &toasts {
                            toasts.success(confirmation);
                        }
                    }
                    Err(err) => {
                        if let Some(toasts) = &toasts {
                            toasts.error(format!("{err}. Please try sending it again."));
                        }
                    }
                }
            });
        })
    };

    let required = |field: ContactField| ContactField::REQUIRED.contains(&field);
    let text_field = |field: ContactField, kind: &'static str, placeholder: &'static str| {
        html! {
            <label class="form-field">
                <span>{field.label()}{ if required(field) { " *" } else { "" } }</span>
                <input
                    type={kind}
                    placeholder={placeholder}
                    value={form.get(field).to_string()}
                    oninput={on_input(field)}
                />
            </label>
        }
    };

    html! {
        <div class="contact-page">
            <style>
                {r#"
                    .contact-page {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 10rem 2rem 6rem;
                        display: grid;
                        grid-template-columns: 1fr 1.2fr;
                        gap: 4rem;
                    }
                    .contact-intro h1 {
                        font-size: clamp(2.8rem, 7vw, 5.5rem);
                        margin: 0 0 1.5rem;
                    }
                    .contact-form {
                        display: grid;
                        gap: 1.5rem;
                    }
                    .form-field {
                        display: grid;
                        gap: 0.5rem;
                        font-size: 0.9rem;
                        color: #bbb;
                    }
                    .form-field input, .form-field textarea, .form-field select {
                        background: transparent;
                        border: none;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.25);
                        color: #fff;
                        font-size: 1.1rem;
                        padding: 0.6rem 0;
                    }
                    .form-field textarea {
                        min-height: 140px;
                        resize: vertical;
                    }
                    .submit-button {
                        padding: 1rem 2.5rem;
                        border-radius: 999px;
                        border: none;
                        background: #fff;
                        color: #0b0b0d;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .submit-button:disabled {
                        opacity: 0.5;
                        cursor: wait;
                    }
                    @media (max-width: 800px) {
                        .contact-page {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <Reveal class="contact-intro">
                <h1>{"Let's build something"}</h1>
                <p>{"Tell us about the project, the timeline and what success looks like. We reply within two working days."}</p>
                <p><a href="mailto:hello@studio.example">{"hello@studio.example"}</a></p>
            </Reveal>
            <form class="contact-form" {onsubmit} novalidate={true}>
                { text_field(ContactField::Name, "text", "Your name") }
                { text_field(ContactField::Email, "email", "you@company.com") }
                { text_field(ContactField::Company, "text", "Company (optional)") }
                <label class="form-field">
                    <span>{ContactField::Budget.label()}</span>
                    <select onchange={on_budget}>
                        <option value="" selected={form.budget.is_none()}>{"Select a range"}</option>
                        { for BUDGETS.iter().map(|budget| html! {
                            <option value={*budget} selected={form.budget.as_deref() == Some(*budget)}>{*budget}</option>
                        }) }
                    </select>
                </label>
                <label class="form-field">
                    <span>{ContactField::Message.label()}{" *"}</span>
                    <textarea
                        placeholder="What are you working on?"
                        value={form.message.clone()}
                        oninput={on_message}
                    />
                </label>
                <Magnetic strength={0.25}>
                    <button class="submit-button" type="submit" disabled={*submitting}>
                        { if *submitting { "Sending…" } else { "Send message" } }
                    </button>
                </Magnetic>
            </form>
        </div>
    }
}
