//! Session identity for the visitor tracker
//!
//! A session spans every page load in one browser tab: the id lives in
//! tab-scoped storage and the visit counter goes up by one on each load.
//! Storage is abstracted behind [`KeyValueStore`] so the logic runs in tests
//! without a browser; when storage is unavailable the caller gets `None` and
//! tracking degrades to a no-op instead of crashing the page.

/// Tab-scoped storage key for the session identifier
pub const SESSION_ID_KEY: &str = "sessionId";

/// Tab-scoped storage key for the per-session page visit counter
pub const PAGE_VISITS_KEY: &str = "pageVisits";

/// Minimal key/value storage capability.
///
/// Backed by sessionStorage and localStorage in the browser and by an
/// in-memory map in tests. Failures are not surfaced as errors: a failed
/// read is `None` and a failed write is `false`, and callers treat either
/// as "tracking unavailable".
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> bool;
}

/// Session identity for the current tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Opaque id, stable across page loads within the tab
    pub id: String,
    /// 1-based page load counter within this session
    pub visit_count: u32,
}

/// Build a fresh session id: fixed prefix, epoch millis, 9 base36 chars of
/// entropy. Uniqueness is all that matters here, nothing cryptographic.
pub fn format_session_id(epoch_ms: u64, entropy: f64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    let mut frac = if entropy.is_finite() {
        entropy.abs().fract()
    } else {
        0.0
    };

    let mut suffix = String::with_capacity(9);
    for _ in 0..9 {
        frac *= 36.0;
        let digit = (frac as usize).min(DIGITS.len() - 1);
        suffix.push(DIGITS[digit] as char);
        frac = frac.fract();
    }

    format!("session_{epoch_ms}_{suffix}")
}

/// Load or create the session for this page load.
///
/// Reuses the stored id and bumps the visit counter when a session already
/// exists in this tab; otherwise mints an id via `fresh_id` and starts the
/// counter at 1. Both values are written back. Returns `None` when the store
/// rejects a write, which the tracker treats as tracking being unavailable.
pub fn ensure_session<F>(store: &dyn KeyValueStore, fresh_id: F) -> Option<Session>
where
    F: FnOnce() -> String,
{
    match store.get(SESSION_ID_KEY) {
        Some(id) => {
            // A missing or garbled counter restarts at 1 rather than failing
            let visit_count = store
                .get(PAGE_VISITS_KEY)
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(0)
                .saturating_add(1);

            if !store.set(PAGE_VISITS_KEY, &visit_count.to_string()) {
                return None;
            }

            Some(Session { id, visit_count })
        }
        None => {
            let id = fresh_id();
            if !store.set(SESSION_ID_KEY, &id) || !store.set(PAGE_VISITS_KEY, "1") {
                return None;
            }

            Some(Session { id, visit_count: 1 })
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory store used across the tracking test modules
    #[derive(Default)]
    pub(crate) struct MemoryStore {
        values: RefCell<HashMap<String, String>>,
        pub(crate) fail_writes: bool,
    }

    impl MemoryStore {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        /// Store whose writes fail, simulating unavailable browser storage
        pub(crate) fn failing() -> Self {
            Self {
                fail_writes: true,
                ..Self::default()
            }
        }

        pub(crate) fn seeded(pairs: &[(&str, &str)]) -> Self {
            let store = Self::default();
            for (k, v) in pairs {
                store.values.borrow_mut().insert(k.to_string(), v.to_string());
            }
            store
        }
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> bool {
            if self.fail_writes {
                return false;
            }
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            true
        }
    }

    #[test]
    fn test_first_load_creates_session() {
        let store = MemoryStore::new();
        let session = ensure_session(&store, || "session_1_abc".to_string()).unwrap();

        assert_eq!(session.id, "session_1_abc");
        assert_eq!(session.visit_count, 1);
        assert_eq!(store.get(SESSION_ID_KEY).as_deref(), Some("session_1_abc"));
        assert_eq!(store.get(PAGE_VISITS_KEY).as_deref(), Some("1"));
    }

    #[test]
    fn test_second_load_reuses_id_and_increments() {
        let store = MemoryStore::new();
        let first = ensure_session(&store, || "session_1_abc".to_string()).unwrap();
        let second = ensure_session(&store, || "session_2_xyz".to_string()).unwrap();

        assert_eq!(second.id, first.id);
        assert_eq!(second.visit_count, 2);
        assert_eq!(store.get(PAGE_VISITS_KEY).as_deref(), Some("2"));
    }

    #[test]
    fn test_visit_count_strictly_increases() {
        let store = MemoryStore::new();
        let mut last = 0;
        for _ in 0..5 {
            let session = ensure_session(&store, || "session_1_abc".to_string()).unwrap();
            assert_eq!(session.visit_count, last + 1);
            last = session.visit_count;
        }
    }

    #[test]
    fn test_garbled_counter_restarts_at_one() {
        let store =
            MemoryStore::seeded(&[(SESSION_ID_KEY, "session_1_abc"), (PAGE_VISITS_KEY, "what")]);
        let session = ensure_session(&store, || unreachable!()).unwrap();

        assert_eq!(session.visit_count, 1);
    }

    #[test]
    fn test_unavailable_store_yields_none() {
        let store = MemoryStore::failing();

        assert!(ensure_session(&store, || "session_1_abc".to_string()).is_none());
    }

    #[test]
    fn test_session_id_format() {
        let id = format_session_id(1700000000000, 0.5);
        assert!(id.starts_with("session_1700000000000_"));

        let suffix = id.rsplit('_').next().unwrap();
        assert_eq!(suffix.len(), 9);
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_session_id_tolerates_bad_entropy() {
        // NaN and out-of-range entropy still produce a well-formed id
        let id = format_session_id(42, f64::NAN);
        assert!(id.starts_with("session_42_"));
        assert_eq!(id.rsplit('_').next().unwrap().len(), 9);

        let id = format_session_id(42, -3.75);
        assert_eq!(id.rsplit('_').next().unwrap().len(), 9);
    }

    #[test]
    fn test_session_ids_differ_by_entropy() {
        assert_ne!(format_session_id(1, 0.1), format_session_id(1, 0.9));
    }
}
