//! 404 page component

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

/// Not found page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page Not Found - NexGen AI Tech"/>

        <section class="not-found">
            <div class="container">
                <h1>"404"</h1>
                <p>"The page you're looking for doesn't exist."</p>
                <A href="/" attr:class="btn btn-primary">"Back to Home"</A>
            </div>
        </section>
    }
}
