//! Event records delivered to the collection endpoint
//!
//! Three categories go out: a visit event once per page load, an engagement
//! event at unload, and a CTA event per call-to-action click. Each event
//! flattens itself into form-encoded key/value pairs; the sink appends the
//! shared `type`/`source`/`date` meta fields on top.

use serde::{Deserialize, Serialize};

use super::device::DeviceClass;
use super::session::Session;

/// Event category tag carried in the `type` field of every payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Visit,
    Engagement,
    Cta,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Visit => "user_tracking",
            EventKind::Engagement => "engagement_tracking",
            EventKind::Cta => "cta_tracking",
        }
    }
}

/// One click on a tracked call-to-action element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonClick {
    pub text: String,
    pub class: String,
    pub href: String,
}

/// One focus interaction with a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInteraction {
    #[serde(rename = "formId")]
    pub form_id: String,
    pub action: String,
}

impl FormInteraction {
    pub fn focused(form_id: impl Into<String>) -> Self {
        Self {
            form_id: form_id.into(),
            action: "focused".to_string(),
        }
    }
}

/// Point-in-time record of a page load's environment context.
///
/// Immutable once built; constructed once per page load and sent once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitEvent {
    pub timestamp: String,
    pub page_url: String,
    pub referrer: String,
    pub user_agent: String,
    pub language: String,
    pub screen_resolution: String,
    pub device_type: String,
    pub timezone: String,
    pub session_start: String,
    pub domain: String,
    pub session_id: String,
    pub page_visit_count: String,
}

impl VisitEvent {
    /// Assemble a visit event from environment facts and the current session.
    ///
    /// An empty referrer means the visitor typed the URL or used a bookmark,
    /// reported as "Direct".
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        timestamp: String,
        page_url: String,
        referrer: String,
        user_agent: String,
        language: String,
        screen_size: (u32, u32),
        device: DeviceClass,
        timezone: String,
        domain: &str,
        session: &Session,
    ) -> Self {
        let referrer = if referrer.is_empty() {
            "Direct".to_string()
        } else {
            referrer
        };

        Self {
            session_start: timestamp.clone(),
            timestamp,
            page_url,
            referrer,
            user_agent,
            language,
            screen_resolution: format!("{}x{}", screen_size.0, screen_size.1),
            device_type: device.as_str().to_string(),
            timezone,
            domain: domain.to_string(),
            session_id: session.id.clone(),
            page_visit_count: session.visit_count.to_string(),
        }
    }

    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("timestamp", self.timestamp.clone()),
            ("pageUrl", self.page_url.clone()),
            ("referrer", self.referrer.clone()),
            ("userAgent", self.user_agent.clone()),
            ("language", self.language.clone()),
            ("screenResolution", self.screen_resolution.clone()),
            ("deviceType", self.device_type.clone()),
            ("timezone", self.timezone.clone()),
            ("sessionStart", self.session_start.clone()),
            ("domain", self.domain.clone()),
            ("sessionId", self.session_id.clone()),
            ("pageVisitCount", self.page_visit_count.clone()),
        ]
    }
}

/// End-of-visit summary flushed once at unload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementEvent {
    pub timestamp: String,
    pub session_id: String,
    pub time_on_page: u64,
    pub scroll_depth: u32,
    pub page_url: String,
    /// JSON array of [`ButtonClick`]s, or "none" when nothing was clicked
    pub buttons_clicked: String,
    /// JSON array of [`FormInteraction`]s, or "none"
    pub forms_interacted: String,
}

impl EngagementEvent {
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("timestamp", self.timestamp.clone()),
            ("sessionId", self.session_id.clone()),
            ("timeOnPage", self.time_on_page.to_string()),
            ("scrollDepth", self.scroll_depth.to_string()),
            ("pageUrl", self.page_url.clone()),
            ("buttonsClicked", self.buttons_clicked.clone()),
            ("formsInteracted", self.forms_interacted.clone()),
        ]
    }
}

/// Immediate record of a call-to-action click
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaEvent {
    pub timestamp: String,
    pub button_class: String,
    pub button_text: String,
    pub page_url: String,
    pub session_id: String,
}

impl CtaEvent {
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("timestamp", self.timestamp.clone()),
            ("buttonClass", self.button_class.clone()),
            ("buttonText", self.button_text.clone()),
            ("pageUrl", self.page_url.clone()),
            ("sessionId", self.session_id.clone()),
        ]
    }
}

/// Serialize interaction records the way the collection sheet expects:
/// a JSON array when there is anything to report, the literal "none" when not.
pub fn interactions_json<T: Serialize>(items: &[T]) -> String {
    if items.is_empty() {
        return "none".to_string();
    }
    serde_json::to_string(items).unwrap_or_else(|_| "none".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            id: "session_1_abc".to_string(),
            visit_count: 3,
        }
    }

    fn visit_event(referrer: &str) -> VisitEvent {
        VisitEvent::new(
            "2025-06-01T12:00:00.000Z".to_string(),
            "https://nexgenaitech.online/".to_string(),
            referrer.to_string(),
            "Mozilla/5.0".to_string(),
            "en-US".to_string(),
            (1920, 1080),
            DeviceClass::Desktop,
            "Europe/Berlin".to_string(),
            "nexgenaitech.online",
            &session(),
        )
    }

    #[test]
    fn test_event_kind_tags() {
        assert_eq!(EventKind::Visit.as_str(), "user_tracking");
        assert_eq!(EventKind::Engagement.as_str(), "engagement_tracking");
        assert_eq!(EventKind::Cta.as_str(), "cta_tracking");
    }

    #[test]
    fn test_empty_referrer_reported_as_direct() {
        assert_eq!(visit_event("").referrer, "Direct");
        assert_eq!(visit_event("https://duckduckgo.com/").referrer, "https://duckduckgo.com/");
    }

    #[test]
    fn test_visit_event_fields_complete() {
        let event = visit_event("");
        let fields = event.form_fields();

        assert_eq!(fields.len(), 12);
        let get = |k: &str| {
            fields
                .iter()
                .find(|(name, _)| *name == k)
                .map(|(_, v)| v.clone())
                .unwrap()
        };

        assert_eq!(get("screenResolution"), "1920x1080");
        assert_eq!(get("deviceType"), "Desktop");
        assert_eq!(get("sessionId"), "session_1_abc");
        assert_eq!(get("pageVisitCount"), "3");
        assert_eq!(get("sessionStart"), get("timestamp"));
    }

    #[test]
    fn test_interactions_json_none_when_empty() {
        let empty: Vec<ButtonClick> = Vec::new();
        assert_eq!(interactions_json(&empty), "none");
    }

    #[test]
    fn test_interactions_json_serializes_clicks() {
        let clicks = vec![ButtonClick {
            text: "Get Started".to_string(),
            class: "btn btn-primary".to_string(),
            href: "none".to_string(),
        }];

        let json = interactions_json(&clicks);
        assert!(json.contains("\"text\":\"Get Started\""));
        assert!(json.contains("\"class\":\"btn btn-primary\""));
    }

    #[test]
    fn test_form_interaction_field_names() {
        let json = interactions_json(&[FormInteraction::focused("contactForm")]);
        assert!(json.contains("\"formId\":\"contactForm\""));
        assert!(json.contains("\"action\":\"focused\""));
    }
}
