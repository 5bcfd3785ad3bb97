//! Best-effort event delivery
//!
//! Analytics delivery must never affect the page: [`EventSink::deliver`]
//! takes the event and returns nothing, and every transport failure is
//! logged and dropped. The browser implementation posts form-encoded
//! payloads to the collection endpoint with `mode: no-cors`, so the
//! response is opaque by construction and is never inspected.

use super::events::EventKind;

/// Best-effort sink: one method, no return value, no error channel.
pub trait EventSink {
    fn deliver(&self, kind: EventKind, fields: Vec<(&'static str, String)>);
}

/// Attach the shared meta fields every payload carries: the event category
/// tag, the fixed site source, and the ISO date of the send.
pub fn payload_with_meta(
    kind: EventKind,
    fields: Vec<(&'static str, String)>,
    source: &str,
    date: &str,
) -> Vec<(&'static str, String)> {
    let mut payload = fields;
    payload.push(("type", kind.as_str().to_string()));
    payload.push(("source", source.to_string()));
    payload.push(("date", date.to_string()));
    payload
}

/// Date part of an ISO 8601 timestamp (everything before the `T`)
pub fn iso_date(iso_timestamp: &str) -> &str {
    iso_timestamp.split('T').next().unwrap_or(iso_timestamp)
}

/// Sink posting to the Google Apps Script collector.
///
/// Fire-and-forget: the request is spawned onto the browser event loop and
/// abandoned. No retry, no timeout; if the page unloads mid-send the browser
/// drops the request and that is acceptable.
#[cfg(not(feature = "ssr"))]
#[derive(Debug, Clone)]
pub struct CollectorSink {
    endpoint: String,
    source: String,
}

#[cfg(not(feature = "ssr"))]
impl CollectorSink {
    pub fn new(endpoint: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            source: source.into(),
        }
    }
}

#[cfg(not(feature = "ssr"))]
impl EventSink for CollectorSink {
    fn deliver(&self, kind: EventKind, fields: Vec<(&'static str, String)>) {
        use leptos::logging::warn;

        let now_iso = String::from(js_sys::Date::new_0().to_iso_string());
        let payload = payload_with_meta(kind, fields, &self.source, iso_date(&now_iso));

        let Ok(params) = web_sys::UrlSearchParams::new() else {
            warn!("tracking: could not build payload, dropping event");
            return;
        };
        for (key, value) in &payload {
            params.append(key, value);
        }

        let endpoint = self.endpoint.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let request = gloo_net::http::Request::post(&endpoint)
                .header("Content-Type", "application/x-www-form-urlencoded")
                .mode(web_sys::RequestMode::NoCors)
                .body(params);

            match request {
                Ok(request) => {
                    // The no-cors response is opaque; success just means the
                    // browser accepted the send.
                    if let Err(err) = request.send().await {
                        warn!("tracking: delivery failed: {err}");
                    }
                }
                Err(err) => warn!("tracking: could not build request: {err}"),
            }
        });
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;

    /// Sink that records deliveries for assertions
    #[derive(Default)]
    pub(crate) struct RecordingSink {
        pub(crate) deliveries: RefCell<Vec<(EventKind, Vec<(&'static str, String)>)>>,
    }

    impl EventSink for RecordingSink {
        fn deliver(&self, kind: EventKind, fields: Vec<(&'static str, String)>) {
            self.deliveries.borrow_mut().push((kind, fields));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_fields_appended() {
        let fields = vec![("sessionId", "session_1_abc".to_string())];
        let payload = payload_with_meta(
            EventKind::Visit,
            fields,
            "NexGenAiTech Website",
            "2025-06-01",
        );

        assert_eq!(payload.len(), 4);
        assert!(payload.contains(&("type", "user_tracking".to_string())));
        assert!(payload.contains(&("source", "NexGenAiTech Website".to_string())));
        assert!(payload.contains(&("date", "2025-06-01".to_string())));
    }

    #[test]
    fn test_iso_date_strips_time() {
        assert_eq!(iso_date("2025-06-01T12:34:56.789Z"), "2025-06-01");
        // a value without a time part passes through unchanged
        assert_eq!(iso_date("2025-06-01"), "2025-06-01");
        assert_eq!(iso_date(""), "");
    }
}
