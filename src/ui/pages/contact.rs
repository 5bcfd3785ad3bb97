//! Contact page component

use leptos::prelude::*;
use leptos_meta::Title;

use crate::ui::contact_form::ContactForm;
use crate::ui::tracker::use_tracking_context;

#[cfg(not(feature = "ssr"))]
const WHATSAPP_URL: &str = "https://wa.me/15551234567";
#[cfg(not(feature = "ssr"))]
const PHONE_URL: &str = "tel:+15551234567";

/// Contact page component
#[component]
pub fn ContactPage() -> impl IntoView {
    let tracking = use_tracking_context();

    let on_whatsapp = move |_| {
        tracking.track_cta("WhatsApp Us", "btn whatsapp-btn");
        #[cfg(not(feature = "ssr"))]
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(WHATSAPP_URL, "_blank");
        }
    };

    let on_call = move |_| {
        tracking.track_cta("Call Us", "btn call-btn");
        #[cfg(not(feature = "ssr"))]
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(PHONE_URL);
        }
    };

    view! {
        <Title text="Contact - NexGen AI Tech"/>

        <section class="contact">
            <div class="container">
                <h1>"Get in Touch"</h1>
                <p>"Tell us about your project and we'll reply within one business day."</p>

                <ContactForm />

                <div class="quick-contact">
                    <button class="btn whatsapp-btn" on:click=on_whatsapp>
                        "WhatsApp Us"
                    </button>
                    <button class="btn call-btn" on:click=on_call>
                        "Call Us"
                    </button>
                </div>
            </div>
        </section>
    }
}
