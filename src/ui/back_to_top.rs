//! Back-to-top button
//!
//! Appears once the visitor has scrolled past 500 px and smooth-scrolls the
//! window back to the top on click.

use leptos::prelude::*;

/// Scroll offset past which the button becomes visible
#[cfg(not(feature = "ssr"))]
const VISIBILITY_THRESHOLD_PX: f64 = 500.0;

/// Back-to-top button component
#[component]
pub fn BackToTop() -> impl IntoView {
    let visible = RwSignal::new(false);

    #[cfg(not(feature = "ssr"))]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        Effect::new(move |_| {
            let Some(window) = web_sys::window() else {
                return;
            };

            let on_scroll = Closure::wrap(Box::new(move |_: web_sys::Event| {
                let scroll_y = web_sys::window()
                    .and_then(|w| w.scroll_y().ok())
                    .unwrap_or(0.0);
                visible.set(scroll_y > VISIBILITY_THRESHOLD_PX);
            }) as Box<dyn FnMut(web_sys::Event)>);

            let _ = window
                .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
            on_scroll.forget();
        });
    }

    let scroll_to_top = move |_| {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(window) = web_sys::window() {
                let options = web_sys::ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        }
    };

    view! {
        <button
            id="backToTop"
            class=move || if visible.get() { "back-to-top visible" } else { "back-to-top" }
            aria-label="Back to top"
            on:click=scroll_to_top
        >
            "↑"
        </button>
    }
}
