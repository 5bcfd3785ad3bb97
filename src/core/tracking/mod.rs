//! Session & engagement tracker core
//!
//! Pure logic for the visitor analytics beacon: session identity in
//! tab-scoped storage, a per-page-load engagement accumulator, and
//! best-effort delivery of visit/engagement/CTA events to the collection
//! endpoint. Everything here runs against the capability traits
//! ([`PageEnvironment`], [`KeyValueStore`], [`EventSink`]) so it is fully
//! unit-testable without a browser; the DOM wiring lives in
//! `crate::ui::tracker`.

pub mod device;
pub mod engagement;
pub mod environment;
pub mod events;
pub mod session;
pub mod sink;

pub use device::{DeviceClass, classify_user_agent};
pub use engagement::EngagementTracker;
pub use environment::PageEnvironment;
pub use events::{ButtonClick, CtaEvent, EngagementEvent, EventKind, VisitEvent};
pub use session::{KeyValueStore, Session, ensure_session, format_session_id};
pub use sink::{EventSink, iso_date, payload_with_meta};

#[cfg(not(feature = "ssr"))]
pub use environment::{BrowserEnvironment, BrowserLocalStorage, BrowserSessionStorage};
#[cfg(not(feature = "ssr"))]
pub use sink::CollectorSink;

/// Google Apps Script endpoint feeding the analytics spreadsheet
pub const COLLECTOR_URL: &str =
    "https://script.google.com/macros/s/AKfycbwN9m6GmGDmBHqFMgIGuNsU2v_NskC1exYxQoqKj9Y2NjxVR5EqQmlhG5qVKq0AGgQ6/exec";

/// Fixed `source` tag stamped on every payload
pub const EVENT_SOURCE: &str = "NexGenAiTech Website";

/// Site domain reported in visit events
pub const SITE_DOMAIN: &str = "nexgenaitech.online";

/// Durable (localStorage) opt-out flag, "true" disables all tracking
pub const TRACKING_DISABLED_KEY: &str = "trackingDisabled";

/// Durable cookie consent decision: "accepted" or "rejected"
pub const COOKIE_CONSENT_KEY: &str = "cookieConsent";

/// Delay before the visit beacon goes out, so it never competes with render
pub const VISIT_SEND_DELAY_MS: u32 = 2_000;

/// Engagement heartbeat granularity
pub const ENGAGEMENT_TICK_MS: u32 = 1_000;

/// Whether the visitor opted out of tracking
pub fn is_tracking_disabled(durable: &dyn KeyValueStore) -> bool {
    durable.get(TRACKING_DISABLED_KEY).as_deref() == Some("true")
}

/// One tracker instance per page load.
///
/// Owns the session identity and the engagement accumulator; constructed
/// explicitly at page load and handed to the listener registrations, so
/// there is no hidden module-level state.
pub struct PageTracker {
    session: Session,
    engagement: EngagementTracker,
    page_url: String,
}

impl PageTracker {
    /// Start tracking for this page load.
    ///
    /// Returns `None` when the visitor opted out or when session storage is
    /// unavailable; either way the caller registers nothing and the page
    /// carries no tracking for its whole lifetime.
    pub fn begin(
        env: &dyn PageEnvironment,
        durable: &dyn KeyValueStore,
        session_store: &dyn KeyValueStore,
    ) -> Option<Self> {
        if is_tracking_disabled(durable) {
            return None;
        }

        let session = ensure_session(session_store, || {
            format_session_id(env.now_millis().max(0.0) as u64, env.random())
        })?;

        let engagement = EngagementTracker::new(session.id.clone(), env.now_millis());

        Some(Self {
            session,
            engagement,
            page_url: env.page_url(),
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Build the one-shot visit event for this page load
    pub fn visit_event(&self, env: &dyn PageEnvironment) -> VisitEvent {
        let user_agent = env.user_agent();
        let device = classify_user_agent(&user_agent);

        VisitEvent::new(
            env.now_iso(),
            env.page_url(),
            env.referrer(),
            user_agent,
            env.language(),
            env.screen_size(),
            device,
            env.timezone(),
            SITE_DOMAIN,
            &self.session,
        )
    }

    /// Record a CTA click: an immediate event plus an engagement entry
    pub fn cta_event(&mut self, env: &dyn PageEnvironment, text: &str, class: &str) -> CtaEvent {
        self.engagement.record_button_click(ButtonClick {
            text: text.to_string(),
            class: class.to_string(),
            href: "none".to_string(),
        });

        CtaEvent {
            timestamp: env.now_iso(),
            button_class: class.to_string(),
            button_text: text.to_string(),
            page_url: env.page_url(),
            session_id: self.session.id.clone(),
        }
    }

    pub fn engagement_mut(&mut self) -> &mut EngagementTracker {
        &mut self.engagement
    }

    /// Drain the engagement accumulator; `None` after the first call
    pub fn flush(&mut self, now_iso: &str) -> Option<EngagementEvent> {
        let page_url = self.page_url.clone();
        self.engagement.flush(&page_url, now_iso)
    }
}
