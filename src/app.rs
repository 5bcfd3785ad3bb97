use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::ui::notifications::provide_notifications;
use crate::ui::pages::{ContactPage, HomePage, NotFoundPage, PrivacyPage};
use crate::ui::tracker::provide_tracking_context;
use crate::ui::{
    BackToTop, ConsentBanner, Navbar, NotificationsContainer, Preloader, SessionTracker,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let notifications = provide_notifications();

    // One tracker per page load; a disabled context (opt-out, storage
    // failure, ssr) makes every tracking call a no-op.
    let _tracking = provide_tracking_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/nexgensite.css"/>

        // sets the document title
        <Title text="NexGen AI Tech - AI Solutions for Business"/>

        <Router>
            <Preloader/>
            <SessionTracker/>
            <Navbar/>
            <main>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/contact") view=ContactPage/>
                    <Route path=path!("/privacy") view=PrivacyPage/>
                </Routes>
            </main>
            <BackToTop/>
            <ConsentBanner/>
            <NotificationsContainer notifications=notifications.notifications()/>
        </Router>
    }
}
