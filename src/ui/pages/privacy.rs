//! Privacy page component
//!
//! Explains what the analytics beacon collects and lets the visitor flip
//! the tracking opt-out flag. The flag is read once per page load, so a
//! change takes effect from the next load onward.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::ui::notifications::use_notifications;

/// Privacy page component with the tracking opt-out control
#[component]
pub fn PrivacyPage() -> impl IntoView {
    let notifications = use_notifications();
    let opted_out = RwSignal::new(false);

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::tracking::{BrowserLocalStorage, KeyValueStore, TRACKING_DISABLED_KEY};

        Effect::new(move |_| {
            let disabled =
                BrowserLocalStorage.get(TRACKING_DISABLED_KEY).as_deref() == Some("true");
            opted_out.set(disabled);
        });
    }

    let toggle = move |_| {
        let next = !opted_out.get_untracked();

        #[cfg(not(feature = "ssr"))]
        {
            use crate::core::tracking::{BrowserLocalStorage, KeyValueStore, TRACKING_DISABLED_KEY};

            if !BrowserLocalStorage.set(TRACKING_DISABLED_KEY, if next { "true" } else { "false" })
            {
                notifications.error("Could not save your preference.");
                return;
            }
        }

        opted_out.set(next);
        if next {
            notifications.info("Analytics disabled. This takes effect on your next page load.");
        } else {
            notifications.info("Analytics enabled. Thanks for helping us improve.");
        }
    };

    view! {
        <Title text="Privacy - NexGen AI Tech"/>

        <section class="privacy">
            <div class="container">
                <h1>"Privacy Policy"</h1>
                <p>
                    "We collect anonymous usage signals to understand how visitors use this
                    site: pages visited, device class, time on page, and scroll depth. The
                    data is tied to a temporary session identifier that disappears when you
                    close the tab. We never collect names, emails, or anything you type,
                    unless you submit the contact form."
                </p>

                <div class="privacy-optout">
                    <h2>"Analytics Preference"</h2>
                    <p>
                        {move || if opted_out.get() {
                            "Analytics is currently disabled for this browser."
                        } else {
                            "Analytics is currently enabled for this browser."
                        }}
                    </p>
                    <button class="btn" on:click=toggle>
                        {move || if opted_out.get() { "Enable Analytics" } else { "Disable Analytics" }}
                    </button>
                </div>
            </div>
        </section>
    }
}
