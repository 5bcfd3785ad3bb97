//! Contact form component
//!
//! Validates the three fields, shows a sending state on the submit button,
//! and reports the outcome through a toast. The message is not wired to a
//! real inbox yet; submission goes through a simulated endpoint with the
//! same latency the production form will have.
//! TODO: point submission at the contact inbox endpoint once it exists.

use leptos::prelude::*;

use crate::ui::notifications::use_notifications;

/// Simulated endpoint latency
#[cfg(not(feature = "ssr"))]
const SEND_LATENCY_MS: u32 = 1_500;

/// Contact form component
#[component]
pub fn ContactForm() -> impl IntoView {
    let notifications = use_notifications();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let sending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if sending.get_untracked() {
            return;
        }

        let complete = [name, email, message]
            .iter()
            .all(|field| !field.get_untracked().trim().is_empty());
        if !complete {
            notifications.error("Please fill in all required fields.");
            return;
        }

        sending.set(true);

        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(SEND_LATENCY_MS).await;

                notifications
                    .success("Message sent successfully! We'll get back to you soon.");
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
                sending.set(false);
            });
        }
    };

    view! {
        <form id="contactForm" class="contact-form" on:submit=on_submit>
            <div class="form-group">
                <label for="contactName">"Name"</label>
                <input
                    id="contactName"
                    type="text"
                    required
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="contactEmail">"Email"</label>
                <input
                    id="contactEmail"
                    type="email"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="contactMessage">"Message"</label>
                <textarea
                    id="contactMessage"
                    required
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
            </div>

            <button type="submit" class="btn btn-primary" disabled=move || sending.get()>
                {move || if sending.get() { "Sending..." } else { "Send Message" }}
            </button>
        </form>
    }
}
