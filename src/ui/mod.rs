pub mod back_to_top;
pub mod consent;
pub mod contact_form;
pub mod counters;
pub mod navbar;
pub mod notifications;
pub mod pages;
pub mod preloader;
pub mod tracker;

pub use back_to_top::BackToTop;
pub use consent::ConsentBanner;
pub use navbar::Navbar;
pub use notifications::NotificationsContainer;
pub use preloader::Preloader;
pub use tracker::SessionTracker;
