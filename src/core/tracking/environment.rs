//! Environment reader capability for the tracker
//!
//! The tracker never touches `window`/`document` directly: it reads
//! environment facts through [`PageEnvironment`] so the core logic runs in
//! native unit tests with a fake. The browser implementation lives here too,
//! gated the same way the rest of the client-only code is.

use super::session::KeyValueStore;

/// Read-only view of the browsing environment.
///
/// Every method is infallible by contract: implementations substitute
/// best-effort defaults for anything the browser refuses to report.
pub trait PageEnvironment {
    fn user_agent(&self) -> String;
    fn language(&self) -> String;
    fn referrer(&self) -> String;
    fn page_url(&self) -> String;
    /// Screen width and height in CSS pixels; (0, 0) when unknown
    fn screen_size(&self) -> (u32, u32);
    /// IANA timezone name, e.g. "Europe/Berlin"
    fn timezone(&self) -> String;
    /// Current time as an ISO 8601 string
    fn now_iso(&self) -> String;
    /// Current time as epoch milliseconds
    fn now_millis(&self) -> f64;
    /// Uniform random value in [0, 1), for session id entropy
    fn random(&self) -> f64;
}

/// `PageEnvironment` backed by the real browser globals
#[cfg(not(feature = "ssr"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserEnvironment;

#[cfg(not(feature = "ssr"))]
impl PageEnvironment for BrowserEnvironment {
    fn user_agent(&self) -> String {
        web_sys::window()
            .and_then(|w| w.navigator().user_agent().ok())
            .unwrap_or_default()
    }

    fn language(&self) -> String {
        web_sys::window()
            .and_then(|w| w.navigator().language())
            .unwrap_or_else(|| "unknown".to_string())
    }

    fn referrer(&self) -> String {
        web_sys::window()
            .and_then(|w| w.document())
            .map(|d| d.referrer())
            .unwrap_or_default()
    }

    fn page_url(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default()
    }

    fn screen_size(&self) -> (u32, u32) {
        let Some(screen) = web_sys::window().and_then(|w| w.screen().ok()) else {
            return (0, 0);
        };
        let width = screen.width().unwrap_or(0).max(0) as u32;
        let height = screen.height().unwrap_or(0).max(0) as u32;
        (width, height)
    }

    fn timezone(&self) -> String {
        let options =
            js_sys::Intl::DateTimeFormat::new(&js_sys::Array::new(), &js_sys::Object::new())
                .resolved_options();
        js_sys::Reflect::get(&options, &"timeZone".into())
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_else(|| "unknown".to_string())
    }

    fn now_iso(&self) -> String {
        String::from(js_sys::Date::new_0().to_iso_string())
    }

    fn now_millis(&self) -> f64 {
        js_sys::Date::now()
    }

    fn random(&self) -> f64 {
        js_sys::Math::random()
    }
}

/// Tab-scoped sessionStorage as a [`KeyValueStore`]
#[cfg(not(feature = "ssr"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStorage;

#[cfg(not(feature = "ssr"))]
impl KeyValueStore for BrowserSessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()?.session_storage().ok()??;
        storage.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        match window.session_storage() {
            Ok(Some(storage)) => storage.set_item(key, value).is_ok(),
            _ => false,
        }
    }
}

/// Cross-session localStorage as a [`KeyValueStore`]
#[cfg(not(feature = "ssr"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLocalStorage;

#[cfg(not(feature = "ssr"))]
impl KeyValueStore for BrowserLocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        match window.local_storage() {
            Ok(Some(storage)) => storage.set_item(key, value).is_ok(),
            _ => false,
        }
    }
}

/// Fixed-value environment for tests
#[cfg(test)]
pub(crate) struct FakeEnvironment {
    pub user_agent: String,
    pub language: String,
    pub referrer: String,
    pub page_url: String,
    pub screen_size: (u32, u32),
    pub timezone: String,
    pub now_iso: String,
    pub now_millis: f64,
    pub random: f64,
}

#[cfg(test)]
impl Default for FakeEnvironment {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) Chrome/114.0".to_string(),
            language: "en-US".to_string(),
            referrer: String::new(),
            page_url: "https://nexgenaitech.online/".to_string(),
            screen_size: (1920, 1080),
            timezone: "Europe/Berlin".to_string(),
            now_iso: "2025-06-01T12:00:00.000Z".to_string(),
            now_millis: 1_748_779_200_000.0,
            random: 0.42,
        }
    }
}

#[cfg(test)]
impl PageEnvironment for FakeEnvironment {
    fn user_agent(&self) -> String {
        self.user_agent.clone()
    }

    fn language(&self) -> String {
        self.language.clone()
    }

    fn referrer(&self) -> String {
        self.referrer.clone()
    }

    fn page_url(&self) -> String {
        self.page_url.clone()
    }

    fn screen_size(&self) -> (u32, u32) {
        self.screen_size
    }

    fn timezone(&self) -> String {
        self.timezone.clone()
    }

    fn now_iso(&self) -> String {
        self.now_iso.clone()
    }

    fn now_millis(&self) -> f64 {
        self.now_millis
    }

    fn random(&self) -> f64 {
        self.random
    }
}
