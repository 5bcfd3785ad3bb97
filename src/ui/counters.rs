//! Animated statistics counters
//!
//! Counts a stat number up from zero to its target over ~2 seconds at
//! roughly 60 fps, then pins it at the exact target value.

use leptos::prelude::*;

/// Total animation duration in milliseconds
#[cfg(not(feature = "ssr"))]
const ANIMATION_MS: f64 = 2_000.0;
/// Frame interval, roughly 60 fps
#[cfg(not(feature = "ssr"))]
const FRAME_MS: u32 = 16;

/// Animated stat counter component
#[component]
pub fn StatCounter(
    /// Final value the counter settles on
    target: u32,
    /// Label rendered under the number
    label: &'static str,
    /// Suffix appended to the number, e.g. "+" or "%"
    #[prop(optional)]
    suffix: &'static str,
) -> impl IntoView {
    let shown = RwSignal::new(0u32);

    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::callback::Interval;
        use std::cell::{Cell, RefCell};
        use std::rc::Rc;

        Effect::new(move |_| {
            let step = f64::from(target) / (ANIMATION_MS / f64::from(FRAME_MS));
            let current = Rc::new(Cell::new(0.0));

            let interval: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
            let interval_done = interval.clone();

            *interval.borrow_mut() = Some(Interval::new(FRAME_MS, move || {
                let next = current.get() + step;
                if next >= f64::from(target) {
                    shown.set(target);
                    // dropping the handle clears the underlying timer
                    interval_done.borrow_mut().take();
                } else {
                    current.set(next);
                    shown.set(next.ceil() as u32);
                }
            }));
        });
    }

    #[cfg(feature = "ssr")]
    {
        // No animation on the server; render the target directly
        shown.set(target);
    }

    view! {
        <div class="stat">
            <span class="stat-number">{move || shown.get()}{suffix}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}
