//! Home Page

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use site_core::content::Industry;

use crate::components::{CallToAction, Faq, FeatureGrid, Hero, Testimonials};

/// Landing page; `?industry=bars` switches the copy
#[component]
pub fn HomePage() -> impl IntoView {
    let query = use_query_map();
    let industry = move || {
        query.with(|q| q.get("industry").and_then(|s| s.parse::<Industry>().ok()))
            .unwrap_or_default()
    };

    view! {
        <div class="home">
            {move || {
                let content = industry().content();
                view! {
                    <Hero content=content.clone() variant="split" />
                    <FeatureGrid content=content.clone() variant="grid" />
                    <Testimonials content=content.clone() variant="carousel" />
                    <Faq content=content.clone() variant="accordion" />
                    <CallToAction content=content variant="banner" dark=true />
                }
            }}
        </div>
    }
}
