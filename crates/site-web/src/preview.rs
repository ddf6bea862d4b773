//! Template Previews
//!
//! Maps a catalog entry's render target and sample props onto the section
//! component that draws it.

use leptos::prelude::*;
use site_core::catalog::{SampleProps, TemplateKind};
use site_core::plans::plans;

use crate::calculator::RoiCalculator;
use crate::components::{
    About, Bento, CallToAction, Comparison, ContactForm, Faq, FeatureGrid, Hero, PricingTable,
    Testimonials,
};

pub fn render_template(kind: TemplateKind, props: &SampleProps) -> AnyView {
    let content = props.industry.content();
    let variant = props.variant.clone();
    let dark = props.dark;

    match kind {
        TemplateKind::Hero => view! { <Hero content=content variant=variant dark=dark /> }.into_any(),
        TemplateKind::FeatureGrid => {
            view! { <FeatureGrid content=content variant=variant dark=dark /> }.into_any()
        }
        TemplateKind::PricingTable => {
            view! { <PricingTable plans=plans() variant=variant dark=dark /> }.into_any()
        }
        TemplateKind::RoiCalculator => view! { <RoiCalculator dark=dark preview=true /> }.into_any(),
        TemplateKind::ContactForm => {
            view! { <ContactForm content=content variant=variant dark=dark /> }.into_any()
        }
        TemplateKind::Testimonials => {
            view! { <Testimonials content=content variant=variant dark=dark /> }.into_any()
        }
        TemplateKind::CallToAction => {
            view! { <CallToAction content=content variant=variant dark=dark /> }.into_any()
        }
        TemplateKind::Faq => view! { <Faq content=content variant=variant dark=dark /> }.into_any(),
        TemplateKind::About => view! { <About content=content variant=variant dark=dark /> }.into_any(),
        TemplateKind::Bento => view! { <Bento content=content variant=variant dark=dark /> }.into_any(),
        TemplateKind::Comparison => {
            view! { <Comparison content=content variant=variant dark=dark /> }.into_any()
        }
    }
}
