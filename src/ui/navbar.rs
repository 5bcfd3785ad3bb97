//! Site navigation bar
//!
//! Desktop nav with a mobile hamburger menu: the menu toggle locks body
//! scrolling while open, the bar picks up a "scrolled" style past 100 px,
//! and the link matching the current route is marked active.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

/// Scroll offset past which the header gets its scrolled style
#[cfg(not(feature = "ssr"))]
const SCROLLED_THRESHOLD_PX: f64 = 100.0;

/// Lock or release body scrolling while the mobile menu is open
#[cfg(not(feature = "ssr"))]
fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let value = if locked { "hidden" } else { "" };
        let _ = body.style().set_property("overflow", value);
    }
}

/// Navigation bar component
#[component]
pub fn Navbar() -> impl IntoView {
    let scrolled = RwSignal::new(false);
    let menu_open = RwSignal::new(false);

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
                scrolled.set(scroll_y > SCROLLED_THRESHOLD_PX);
            }) as Box<dyn FnMut(web_sys::Event)>);

            let _ = window
                .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
            on_scroll.forget();
        });
    }

    let toggle_menu = move |_| {
        let open = !menu_open.get_untracked();
        menu_open.set(open);
        #[cfg(not(feature = "ssr"))]
        set_body_scroll_locked(open);
    };

    // Navigating through a link always closes the mobile menu
    let close_menu = move || {
        menu_open.set(false);
        #[cfg(not(feature = "ssr"))]
        set_body_scroll_locked(false);
    };

    view! {
        <header class=move || if scrolled.get() { "header scrolled" } else { "header" }>
            <nav class="nav container">
                <A href="/" attr:class="logo">
                    "NexGen" <span class="logo-accent">"AI Tech"</span>
                </A>

                <button
                    id="mobileToggle"
                    class=move || if menu_open.get() { "mobile-toggle active" } else { "mobile-toggle" }
                    aria-label="Toggle navigation menu"
                    on:click=toggle_menu
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <ul
                    id="navMenu"
                    class=move || if menu_open.get() { "nav-menu active" } else { "nav-menu" }
                >
                    <NavLink href="/" label="Home" on_navigate=close_menu />
                    <NavLink href="/contact" label="Contact" on_navigate=close_menu />
                    <NavLink href="/privacy" label="Privacy" on_navigate=close_menu />
                </ul>
            </nav>
        </header>
    }
}

/// Single navigation item, marked active when it matches the current route
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
    on_navigate: impl Fn() + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let location = use_location();
    let is_active = Memo::new(move |_| location.pathname.get() == href);

    view! {
        <li
            class=move || if is_active.get() { "nav-item active" } else { "nav-item" }
            on:click=move |_| on_navigate()
        >
            <A href=href attr:class="nav-link">
                {label}
            </A>
        </li>
    }
}
