//! Pricing Page

use leptos::prelude::*;
use site_core::plans::plans;

use crate::calculator::RoiCalculator;
use crate::components::PricingTable;

#[component]
pub fn PricingPage() -> impl IntoView {
    view! {
        <div class="pricing-page">
            <h1>"Pricing"</h1>
            <p class="subtitle">"Pay per location. Every plan includes unlimited checklists."</p>

            <PricingTable plans=plans() variant="tiers" />
            <RoiCalculator />
        </div>
    }
}
