//! Session tracker wiring for the browser
//!
//! Bridges the pure tracking core to the DOM: constructs one `PageTracker`
//! per page load, schedules the deferred visit beacon, feeds scroll/click/
//! focus events into the engagement accumulator, and flushes it exactly once
//! on `beforeunload`. When the visitor opted out (or storage is unavailable)
//! the context is an empty shell and nothing is ever registered or sent.

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use std::cell::RefCell;
#[cfg(not(feature = "ssr"))]
use std::rc::Rc;

#[cfg(not(feature = "ssr"))]
use crate::core::tracking::{
    BrowserEnvironment, BrowserLocalStorage, BrowserSessionStorage, COLLECTOR_URL, CollectorSink,
    ENGAGEMENT_TICK_MS, EVENT_SOURCE, EventKind, EventSink, PageTracker, VISIT_SEND_DELAY_MS,
};

#[cfg(not(feature = "ssr"))]
struct TrackingHandle {
    tracker: RefCell<PageTracker>,
    sink: CollectorSink,
    env: BrowserEnvironment,
}

/// App-wide handle for emitting tracking events from components.
///
/// A disabled context (opt-out, storage failure, ssr) turns every method
/// into a no-op. The browser-only handle sits behind a local `StoredValue`
/// so the context itself stays `Copy + Send` for the view tree.
#[derive(Clone, Copy)]
pub struct TrackingContext {
    #[cfg(not(feature = "ssr"))]
    inner: StoredValue<Option<Rc<TrackingHandle>>, LocalStorage>,
}

impl TrackingContext {
    /// Emit a CTA click event immediately and record it in the engagement
    /// accumulator
    pub fn track_cta(&self, text: &str, class: &str) {
        #[cfg(not(feature = "ssr"))]
        self.inner.with_value(|inner| {
            if let Some(handle) = inner {
                let event = handle.tracker.borrow_mut().cta_event(&handle.env, text, class);
                handle.sink.deliver(EventKind::Cta, event.form_fields());
            }
        });
        #[cfg(feature = "ssr")]
        {
            let _ = (text, class);
        }
    }

    #[cfg(not(feature = "ssr"))]
    fn handle(&self) -> Option<Rc<TrackingHandle>> {
        self.inner.with_value(Clone::clone)
    }
}

/// Provide the tracking context at the application root.
///
/// On the client this checks the opt-out flag and ensures the session; both
/// failure paths leave the context disabled for the rest of the page load.
pub fn provide_tracking_context() -> TrackingContext {
    #[cfg(not(feature = "ssr"))]
    let ctx = {
        let env = BrowserEnvironment;
        let inner = PageTracker::begin(&env, &BrowserLocalStorage, &BrowserSessionStorage).map(
            |tracker| {
                Rc::new(TrackingHandle {
                    tracker: RefCell::new(tracker),
                    sink: CollectorSink::new(COLLECTOR_URL, EVENT_SOURCE),
                    env,
                })
            },
        );
        TrackingContext {
            inner: StoredValue::new_local(inner),
        }
    };

    #[cfg(feature = "ssr")]
    let ctx = TrackingContext {};

    provide_context(ctx);
    ctx
}

/// Use the tracking context from anywhere in the component tree
pub fn use_tracking_context() -> TrackingContext {
    use_context::<TrackingContext>().expect("TrackingContext should be provided")
}

/// Session tracker component
///
/// Place once at the application root. Registers the engagement listeners
/// and timers for the page load; renders nothing visible.
#[component]
pub fn SessionTracker() -> impl IntoView {
    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::callback::{Interval, Timeout};
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let ctx = use_tracking_context();

        Effect::new(move |_| {
            // Disabled context: opt-out or storage unavailable, register nothing
            let Some(handle) = ctx.handle() else {
                return;
            };

            let Some(window) = web_sys::window() else {
                return;
            };
            let Some(document) = window.document() else {
                return;
            };

            // Visit beacon, deferred so it never competes with first render
            let handle_visit = handle.clone();
            Timeout::new(VISIT_SEND_DELAY_MS, move || {
                let event = handle_visit.tracker.borrow().visit_event(&handle_visit.env);
                handle_visit
                    .sink
                    .deliver(EventKind::Visit, event.form_fields());
            })
            .forget();

            // Time-on-page heartbeat; the unload handler cancels it
            let handle_tick = handle.clone();
            let tick_interval = Rc::new(RefCell::new(Some(Interval::new(
                ENGAGEMENT_TICK_MS,
                move || {
                    handle_tick.tracker.borrow_mut().engagement_mut().tick();
                },
            ))));

            // Scroll depth
            let handle_scroll = handle.clone();
            let scroll = Closure::wrap(Box::new(move |_: web_sys::Event| {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let scroll_y = window.scroll_y().unwrap_or(0.0);
                let (scroll_height, viewport_height) = window
                    .document()
                    .and_then(|d| d.document_element())
                    .map(|el| (f64::from(el.scroll_height()), f64::from(el.client_height())))
                    .unwrap_or((0.0, 0.0));

                handle_scroll.tracker.borrow_mut().engagement_mut().record_scroll(
                    scroll_y,
                    scroll_height,
                    viewport_height,
                    js_sys::Date::now(),
                );
            }) as Box<dyn FnMut(web_sys::Event)>);

            // Clicks refresh the last-activity timestamp
            let handle_click = handle.clone();
            let click = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
                handle_click
                    .tracker
                    .borrow_mut()
                    .engagement_mut()
                    .record_activity(js_sys::Date::now());
            }) as Box<dyn FnMut(web_sys::MouseEvent)>);

            // Form focus interactions, attributed to the enclosing form
            let handle_focus = handle.clone();
            let focusin = Closure::wrap(Box::new(move |event: web_sys::FocusEvent| {
                let form_id = event
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                    .and_then(|el| el.closest("form").ok().flatten())
                    .map(|form| {
                        let id = form.id();
                        if id.is_empty() { "unnamed".to_string() } else { id }
                    });

                if let Some(form_id) = form_id {
                    handle_focus
                        .tracker
                        .borrow_mut()
                        .engagement_mut()
                        .record_form_focus(form_id);
                }
            }) as Box<dyn FnMut(web_sys::FocusEvent)>);

            // Flush once at unload and stop the heartbeat. This must run
            // synchronously: nothing async is guaranteed after unload begins.
            let handle_unload = handle.clone();
            let unload_tick = tick_interval.clone();
            let beforeunload = Closure::wrap(Box::new(move |_: web_sys::Event| {
                let now_iso = String::from(js_sys::Date::new_0().to_iso_string());
                if let Some(event) = handle_unload.tracker.borrow_mut().flush(&now_iso) {
                    handle_unload
                        .sink
                        .deliver(EventKind::Engagement, event.form_fields());
                }
                // Dropping the interval clears the underlying timer
                unload_tick.borrow_mut().take();
            }) as Box<dyn FnMut(web_sys::Event)>);

            let _ = window
                .add_event_listener_with_callback("scroll", scroll.as_ref().unchecked_ref());
            let _ =
                document.add_event_listener_with_callback("click", click.as_ref().unchecked_ref());
            let _ = document
                .add_event_listener_with_callback("focusin", focusin.as_ref().unchecked_ref());
            let _ = window.add_event_listener_with_callback(
                "beforeunload",
                beforeunload.as_ref().unchecked_ref(),
            );

            // Listeners live for the whole page; leak the closures
            scroll.forget();
            click.forget();
            focusin.forget();
            beforeunload.forget();
        });
    }

    view! {
        // This component doesn't render anything visible
        <div class="hidden"></div>
    }
}
