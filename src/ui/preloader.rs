//! Page preloader overlay
//!
//! Covers the page while it settles, fades out ~1.5 s after mount and is
//! removed from the tree half a second later once the fade completes.

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
const FADE_DELAY_MS: u32 = 1_500;
#[cfg(not(feature = "ssr"))]
const FADE_DURATION_MS: u32 = 500;

/// Preloader overlay component
#[component]
pub fn Preloader() -> impl IntoView {
    let visible = RwSignal::new(true);
    let fading = RwSignal::new(false);

    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::callback::Timeout;

        Effect::new(move |_| {
            Timeout::new(FADE_DELAY_MS, move || fading.set(true)).forget();
            Timeout::new(FADE_DELAY_MS + FADE_DURATION_MS, move || visible.set(false)).forget();
        });
    }

    view! {
        <Show when=move || visible.get()>
            <div
                id="preloader"
                class=move || if fading.get() { "preloader fade-out" } else { "preloader" }
                aria-hidden="true"
            >
                <div class="spinner"></div>
            </div>
        </Show>
    }
}
