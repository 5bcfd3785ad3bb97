//! Engagement accumulation for one page load
//!
//! This module tracks what a visitor did between load and unload: seconds on
//! page, how deep they scrolled, and which buttons and forms they touched.
//! The accumulator is a two-state machine (Active while the page lives,
//! Flushed after the unload handler drains it) and the transition happens
//! exactly once no matter how many times unload fires.

use super::events::{ButtonClick, EngagementEvent, FormInteraction, interactions_json};

/// Accumulator lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TrackerState {
    /// Page loaded, listeners are feeding the accumulator
    Active,
    /// Unload fired and the summary was emitted; mutations are ignored
    Flushed,
}

/// Page-load-scoped engagement accumulator
#[derive(Debug)]
pub struct EngagementTracker {
    state: TrackerState,
    session_id: String,
    seconds_on_page: u64,
    max_scroll_depth: f64,
    last_activity_ms: f64,
    buttons_clicked: Vec<ButtonClick>,
    forms_interacted: Vec<FormInteraction>,
}

impl EngagementTracker {
    pub fn new(session_id: impl Into<String>, now_ms: f64) -> Self {
        Self {
            state: TrackerState::Active,
            session_id: session_id.into(),
            seconds_on_page: 0,
            max_scroll_depth: 0.0,
            last_activity_ms: now_ms,
            buttons_clicked: Vec::new(),
            forms_interacted: Vec::new(),
        }
    }

    /// One-second heartbeat while the page is open
    pub fn tick(&mut self) {
        if self.state == TrackerState::Active {
            self.seconds_on_page += 1;
        }
    }

    /// Fold a scroll event into the running maximum depth.
    ///
    /// Depth is `scroll_y / (scroll_height - viewport_height) * 100`, clamped
    /// to [0, 100]; a page shorter than the viewport reports 0. The maximum
    /// never decreases within a page load.
    pub fn record_scroll(
        &mut self,
        scroll_y: f64,
        scroll_height: f64,
        viewport_height: f64,
        now_ms: f64,
    ) {
        if self.state != TrackerState::Active {
            return;
        }

        let scrollable = scroll_height - viewport_height;
        let depth = if scrollable > 0.0 && scroll_y.is_finite() {
            (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };

        self.max_scroll_depth = self.max_scroll_depth.max(depth);
        self.last_activity_ms = now_ms;
    }

    /// Any click or interaction refreshes the last-activity timestamp.
    /// Kept for future idle detection; nothing consumes it yet.
    pub fn record_activity(&mut self, now_ms: f64) {
        if self.state == TrackerState::Active {
            self.last_activity_ms = now_ms;
        }
    }

    pub fn record_button_click(&mut self, click: ButtonClick) {
        if self.state == TrackerState::Active {
            self.buttons_clicked.push(click);
        }
    }

    pub fn record_form_focus(&mut self, form_id: impl Into<String>) {
        if self.state == TrackerState::Active {
            self.forms_interacted.push(FormInteraction::focused(form_id));
        }
    }

    pub fn seconds_on_page(&self) -> u64 {
        self.seconds_on_page
    }

    pub fn max_scroll_depth(&self) -> f64 {
        self.max_scroll_depth
    }

    pub fn last_activity_ms(&self) -> f64 {
        self.last_activity_ms
    }

    pub fn is_flushed(&self) -> bool {
        self.state == TrackerState::Flushed
    }

    /// Drain the accumulator into an engagement event.
    ///
    /// The first call transitions Active → Flushed and returns the summary;
    /// every later call returns `None`, so a repeated unload signal cannot
    /// double-send. Runs synchronously because nothing async is guaranteed
    /// to execute once unload has begun.
    pub fn flush(&mut self, page_url: &str, timestamp: &str) -> Option<EngagementEvent> {
        if self.state == TrackerState::Flushed {
            return None;
        }
        self.state = TrackerState::Flushed;

        Some(EngagementEvent {
            timestamp: timestamp.to_string(),
            session_id: self.session_id.clone(),
            time_on_page: self.seconds_on_page,
            scroll_depth: self.max_scroll_depth.round() as u32,
            page_url: page_url.to_string(),
            buttons_clicked: interactions_json(&self.buttons_clicked),
            forms_interacted: interactions_json(&self.forms_interacted),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> EngagementTracker {
        EngagementTracker::new("session_1_abc", 0.0)
    }

    #[test]
    fn test_ticks_accumulate_seconds() {
        let mut t = tracker();
        for _ in 0..42 {
            t.tick();
        }
        assert_eq!(t.seconds_on_page(), 42);
    }

    #[test]
    fn test_scroll_depth_is_monotone() {
        let mut t = tracker();
        // viewport 800 over a 2800px document: 2000px scrollable
        t.record_scroll(800.0, 2800.0, 800.0, 1.0);
        assert_eq!(t.max_scroll_depth(), 40.0);

        // scrolling back up must not lower the maximum
        t.record_scroll(500.0, 2800.0, 800.0, 2.0);
        assert_eq!(t.max_scroll_depth(), 40.0);

        t.record_scroll(1500.0, 2800.0, 800.0, 3.0);
        assert_eq!(t.max_scroll_depth(), 75.0);
    }

    #[test]
    fn test_scroll_depth_clamped_to_100() {
        let mut t = tracker();
        // overscroll bounce can report more than the scrollable height
        t.record_scroll(2500.0, 2800.0, 800.0, 1.0);
        assert_eq!(t.max_scroll_depth(), 100.0);
    }

    #[test]
    fn test_short_page_reports_zero_depth() {
        let mut t = tracker();
        // document shorter than the viewport: nothing to scroll
        t.record_scroll(0.0, 600.0, 800.0, 1.0);
        assert_eq!(t.max_scroll_depth(), 0.0);
    }

    #[test]
    fn test_negative_scroll_clamped_to_zero() {
        let mut t = tracker();
        t.record_scroll(-50.0, 2800.0, 800.0, 1.0);
        assert_eq!(t.max_scroll_depth(), 0.0);
    }

    #[test]
    fn test_scroll_and_activity_refresh_last_activity() {
        let mut t = tracker();
        t.record_scroll(100.0, 2800.0, 800.0, 123.0);
        assert_eq!(t.last_activity_ms(), 123.0);

        t.record_activity(456.0);
        assert_eq!(t.last_activity_ms(), 456.0);
    }

    #[test]
    fn test_flush_happens_exactly_once() {
        let mut t = tracker();
        t.tick();
        t.record_scroll(800.0, 2800.0, 800.0, 1.0);

        let event = t.flush("https://nexgenaitech.online/", "2025-06-01T12:00:00.000Z");
        let event = event.expect("first flush emits the summary");
        assert_eq!(event.time_on_page, 1);
        assert_eq!(event.scroll_depth, 40);
        assert_eq!(event.session_id, "session_1_abc");

        // a second unload signal must not emit again
        assert!(t.flush("https://nexgenaitech.online/", "later").is_none());
        assert!(t.is_flushed());
    }

    #[test]
    fn test_flush_rounds_scroll_depth() {
        let mut t = tracker();
        t.record_scroll(333.0, 1800.0, 800.0, 1.0); // 33.3%
        let event = t.flush("/", "ts").unwrap();
        assert_eq!(event.scroll_depth, 33);
    }

    #[test]
    fn test_no_mutation_after_flush() {
        let mut t = tracker();
        let _ = t.flush("/", "ts");

        t.tick();
        t.record_scroll(800.0, 2800.0, 800.0, 1.0);
        t.record_button_click(ButtonClick {
            text: "x".into(),
            class: "btn".into(),
            href: "none".into(),
        });
        t.record_form_focus("contactForm");

        assert_eq!(t.seconds_on_page(), 0);
        assert_eq!(t.max_scroll_depth(), 0.0);
    }

    #[test]
    fn test_interactions_serialized_in_flush() {
        let mut t = tracker();
        t.record_button_click(ButtonClick {
            text: "Get Started".into(),
            class: "btn btn-primary".into(),
            href: "https://nexgenaitech.online/contact".into(),
        });
        t.record_form_focus("contactForm");

        let event = t.flush("/", "ts").unwrap();
        assert!(event.buttons_clicked.contains("Get Started"));
        assert!(event.forms_interacted.contains("contactForm"));
    }

    #[test]
    fn test_empty_interactions_flush_as_none() {
        let mut t = tracker();
        let event = t.flush("/", "ts").unwrap();
        assert_eq!(event.buttons_clicked, "none");
        assert_eq!(event.forms_interacted, "none");
    }
}
