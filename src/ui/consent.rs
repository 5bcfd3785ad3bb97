//! Cookie consent banner
//!
//! Shown a few seconds after load when the visitor has not decided yet.
//! Accept/Reject persists both the consent decision and the tracking
//! opt-out flag; the tracker reads the flag on the next page load.

use leptos::prelude::*;

/// Delay before the banner appears, so it never interrupts first paint
#[cfg(not(feature = "ssr"))]
const CONSENT_PROMPT_DELAY_MS: u32 = 3_000;

/// Cookie consent banner component
#[component]
pub fn ConsentBanner() -> impl IntoView {
    let visible = RwSignal::new(false);

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::tracking::{BrowserLocalStorage, COOKIE_CONSENT_KEY, KeyValueStore};
        use gloo_timers::callback::Timeout;

        Effect::new(move |_| {
            if BrowserLocalStorage.get(COOKIE_CONSENT_KEY).is_none() {
                Timeout::new(CONSENT_PROMPT_DELAY_MS, move || visible.set(true)).forget();
            }
        });
    }

    let decide = move |accepted: bool| {
        #[cfg(not(feature = "ssr"))]
        {
            use crate::core::tracking::{
                BrowserLocalStorage, COOKIE_CONSENT_KEY, KeyValueStore, TRACKING_DISABLED_KEY,
            };

            let decision = if accepted { "accepted" } else { "rejected" };
            let disabled = if accepted { "false" } else { "true" };
            // Failed writes just mean the banner shows again next load
            let _ = BrowserLocalStorage.set(COOKIE_CONSENT_KEY, decision);
            let _ = BrowserLocalStorage.set(TRACKING_DISABLED_KEY, disabled);
        }
        #[cfg(feature = "ssr")]
        {
            let _ = accepted;
        }
        visible.set(false);
    };

    view! {
        <Show when=move || visible.get()>
            <div id="cookie-consent" class="cookie-consent" role="dialog" aria-label="Cookie consent">
                <div class="cookie-content">
                    <p>
                        "We use cookies to improve your experience and for business analysis. "
                        "Your data helps us serve you better. "
                        <a href="/privacy">"Privacy Policy"</a>
                    </p>
                    <div class="cookie-buttons">
                        <button class="btn accept-cookies" on:click=move |_| decide(true)>
                            "Accept"
                        </button>
                        <button class="btn reject-cookies" on:click=move |_| decide(false)>
                            "Reject"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
