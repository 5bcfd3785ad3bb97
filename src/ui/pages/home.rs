//! Home page component
//!
//! Hero section with the primary call-to-action, company stats with
//! animated counters, and the services overview. CTA clicks are reported
//! through the tracking context.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::ui::counters::StatCounter;
use crate::ui::tracker::use_tracking_context;

/// Home page component
#[component]
pub fn HomePage() -> impl IntoView {
    let tracking = use_tracking_context();
    let navigate = use_navigate();

    let on_get_started = move |_| {
        tracking.track_cta("Get Started", "btn btn-primary");
        navigate("/contact", Default::default());
    };

    view! {
        <Title text="NexGen AI Tech - AI Solutions for Business"/>

        <section class="hero">
            <div class="container">
                <h1 class="hero-title">"AI Solutions That Grow Your Business"</h1>
                <p class="hero-subtitle">
                    "We build intelligent automation, analytics, and customer engagement
                    tools for companies of every size."
                </p>
                <button class="btn btn-primary" on:click=on_get_started>
                    "Get Started"
                </button>
            </div>

            <div class="hero-background" aria-hidden="true">
                <div class="circle"></div>
                <div class="circle"></div>
                <div class="circle"></div>
            </div>
        </section>

        <section class="stats">
            <div class="container stats-grid">
                <StatCounter target=120 label="Projects Delivered" suffix="+" />
                <StatCounter target=45 label="Enterprise Clients" suffix="+" />
                <StatCounter target=98 label="Client Satisfaction" suffix="%" />
                <StatCounter target=6 label="Years in Business" />
            </div>
        </section>

        <section class="services">
            <div class="container">
                <h2>"What We Do"</h2>
                <div class="services-grid">
                    <ServiceCard
                        title="Process Automation"
                        description="Replace repetitive manual work with reliable AI-driven workflows."
                    />
                    <ServiceCard
                        title="Predictive Analytics"
                        description="Turn your historical data into forecasts you can plan around."
                    />
                    <ServiceCard
                        title="Customer Engagement"
                        description="Chat assistants and recommendation engines that feel personal."
                    />
                </div>
            </div>
        </section>
    }
}

/// Single service card with its own CTA tracking
#[component]
fn ServiceCard(title: &'static str, description: &'static str) -> impl IntoView {
    let tracking = use_tracking_context();

    view! {
        <div
            class="service-card"
            on:click=move |_| tracking.track_cta(title, "service-card")
        >
            <h3>{title}</h3>
            <p>{description}</p>
        </div>
    }
}
