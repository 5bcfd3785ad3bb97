//! Coarse device classification from the user agent string
//!
//! Visit events carry a Desktop/Tablet/Mobile bucket so the analytics sheet
//! can segment traffic. Classification is an ordered set of substring checks
//! over the lowercased user agent: tablet patterns are evaluated before the
//! generic mobile patterns because most tablets also match those.

/// Coarse device bucket reported in visit events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceClass {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl DeviceClass {
    /// String form used in the delivery payload
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceClass::Desktop => "Desktop",
            DeviceClass::Tablet => "Tablet",
            DeviceClass::Mobile => "Mobile",
        }
    }
}

/// Tablet markers; an Android UA without "mobi" is also treated as a tablet
const TABLET_PATTERNS: &[&str] = &["tablet", "ipad", "playbook", "silk"];

const MOBILE_PATTERNS: &[&str] = &[
    "mobile",
    "android",
    "iphone",
    "ipod",
    "iemobile",
    "blackberry",
    "kindle",
    "silk-accelerated",
    "hpwos",
    "webos",
    "opera mobi",
    "opera mini",
];

/// Classify a user agent string into a coarse device bucket.
///
/// Tablet checks must run first: an Android tablet UA matches the generic
/// "android" mobile pattern too, and tablet wins that tie. Unknown or empty
/// user agents fall back to Desktop.
pub fn classify_user_agent(user_agent: &str) -> DeviceClass {
    let ua = user_agent.to_lowercase();

    if TABLET_PATTERNS.iter().any(|p| ua.contains(p))
        || (ua.contains("android") && !ua.contains("mobi"))
    {
        return DeviceClass::Tablet;
    }

    if MOBILE_PATTERNS.iter().any(|p| ua.contains(p)) {
        return DeviceClass::Mobile;
    }

    DeviceClass::Desktop
}

#[cfg(test)]
mod tests {
    use super::*;

    const IPAD_UA: &str = "Mozilla/5.0 (iPad; CPU OS 16_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.0 Mobile/15E148 Safari/604.1";
    const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 16_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.0 Mobile/15E148 Safari/604.1";
    const ANDROID_PHONE_UA: &str = "Mozilla/5.0 (Linux; Android 13; Pixel 7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Mobile Safari/537.36";
    const ANDROID_TABLET_UA: &str = "Mozilla/5.0 (Linux; Android 13; SM-X700) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36";
    const DESKTOP_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36";

    #[test]
    fn test_desktop_default() {
        assert_eq!(classify_user_agent(DESKTOP_UA), DeviceClass::Desktop);
        assert_eq!(classify_user_agent(""), DeviceClass::Desktop);
        assert_eq!(classify_user_agent("curl/8.0.1"), DeviceClass::Desktop);
    }

    #[test]
    fn test_ipad_is_tablet_even_though_it_matches_mobile() {
        // The iPad UA contains "Mobile/15E148"; tablet patterns must win
        assert_eq!(classify_user_agent(IPAD_UA), DeviceClass::Tablet);
    }

    #[test]
    fn test_android_without_mobi_is_tablet() {
        assert_eq!(classify_user_agent(ANDROID_TABLET_UA), DeviceClass::Tablet);
    }

    #[test]
    fn test_android_phone_is_mobile() {
        assert_eq!(classify_user_agent(ANDROID_PHONE_UA), DeviceClass::Mobile);
    }

    #[test]
    fn test_iphone_is_mobile() {
        assert_eq!(classify_user_agent(IPHONE_UA), DeviceClass::Mobile);
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        assert_eq!(
            classify_user_agent(&IPAD_UA.to_uppercase()),
            DeviceClass::Tablet
        );
        assert_eq!(
            classify_user_agent(&IPHONE_UA.to_uppercase()),
            DeviceClass::Mobile
        );
    }

    #[test]
    fn test_kindle_silk_is_tablet() {
        let ua = "Mozilla/5.0 (Linux; U; en-us; KFAPWI Build/JDQ39) AppleWebKit/535.19 Silk/3.13";
        assert_eq!(classify_user_agent(ua), DeviceClass::Tablet);
    }

    #[test]
    fn test_device_class_as_str() {
        assert_eq!(DeviceClass::Desktop.as_str(), "Desktop");
        assert_eq!(DeviceClass::Tablet.as_str(), "Tablet");
        assert_eq!(DeviceClass::Mobile.as_str(), "Mobile");
    }
}
