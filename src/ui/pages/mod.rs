//! Application pages module
//!
//! Page components for the site:
//! - Home (hero, stats, services)
//! - Contact (form and quick-contact buttons)
//! - Privacy (policy and tracking opt-out)
//! - NotFound

mod contact;
mod home;
mod not_found;
mod privacy;

pub use contact::ContactPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use privacy::PrivacyPage;
