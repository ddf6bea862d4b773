//! Template Showcase Registry
//!
//! The components shown on the template catalog page, in display order.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::entry::CatalogEntry;
use super::Catalog;
use crate::content::Industry;

/// Section component a showcase entry renders with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKind {
    Hero,
    FeatureGrid,
    PricingTable,
    RoiCalculator,
    ContactForm,
    Testimonials,
    CallToAction,
    Faq,
    About,
    Bento,
    Comparison,
}

/// Sample props passed to the section when previewing it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleProps {
    pub industry: Industry,

    /// Layout modifier understood by the section, e.g. "split" or "video"
    pub variant: String,

    pub dark: bool,
}

impl SampleProps {
    fn new(industry: Industry, variant: &str) -> Self {
        Self {
            industry,
            variant: variant.into(),
            dark: false,
        }
    }

    fn dark(mut self) -> Self {
        self.dark = true;
        self
    }
}

pub type TemplateEntry = CatalogEntry<TemplateKind, SampleProps>;

/// Showcase catalog with sample props for design review
pub fn template_catalog() -> Catalog<TemplateKind, SampleProps> {
    use Category as C;
    use Industry::{Bars, Coffee, Hotels, Restaurants};
    use TemplateKind as K;

    let rows: Vec<(&str, Category, TemplateKind, SampleProps, &str)> = vec![
        // heroes
        ("Centered Hero", C::Hero, K::Hero, SampleProps::new(Restaurants, "centered"),
            "Headline, subheadline, and two buttons centered over a soft gradient"),
        ("Split Hero", C::Hero, K::Hero, SampleProps::new(Coffee, "split"),
            "Copy on the left with a product screenshot on the right"),
        ("Video Background Hero", C::Hero, K::Hero, SampleProps::new(Bars, "video").dark(),
            "Full-bleed looping video behind the headline"),
        ("Parallax Hero", C::Hero, K::Hero, SampleProps::new(Hotels, "parallax"),
            "Layered imagery that shifts as the visitor scrolls"),
        ("Industry Switcher Hero", C::Hero, K::Hero, SampleProps::new(Restaurants, "switcher"),
            "Tabs swap the headline between restaurants, bars, coffee, and hotels"),
        ("Stats Hero", C::Hero, K::Hero, SampleProps::new(Hotels, "stats"),
            "Headline paired with three headline metrics"),
        // features
        ("Feature Grid", C::Feature, K::FeatureGrid, SampleProps::new(Restaurants, "grid"),
            "Icon cards in a responsive grid"),
        ("Alternating Features", C::Feature, K::FeatureGrid, SampleProps::new(Coffee, "alternating"),
            "Image and copy rows that alternate sides"),
        ("Icon Feature List", C::Feature, K::FeatureGrid, SampleProps::new(Bars, "list"),
            "Compact list of capabilities with leading icons"),
        ("Feature Tabs", C::Feature, K::FeatureGrid, SampleProps::new(Hotels, "tabs"),
            "Tabbed walkthrough of the product by department"),
        ("Compliance Spotlight", C::Feature, K::FeatureGrid, SampleProps::new(Restaurants, "spotlight").dark(),
            "Highlights HACCP temperature logging and inspection-ready reports"),
        ("Integration Logos", C::Feature, K::FeatureGrid, SampleProps::new(Coffee, "logos"),
            "Point-of-sale and payroll partners in a logo strip"),
        // pricing
        ("Tiered Pricing", C::Pricing, K::PricingTable, SampleProps::new(Restaurants, "tiers"),
            "Three plans side by side with the middle tier highlighted"),
        ("Pricing with Billing Toggle", C::Pricing, K::PricingTable, SampleProps::new(Bars, "toggle"),
            "Monthly and annual prices behind a switch"),
        ("ROI Calculator", C::Pricing, K::RoiCalculator, SampleProps::new(Restaurants, "calculator"),
            "Interactive labor savings and payback estimate"),
        ("Single Plan Pricing", C::Pricing, K::PricingTable, SampleProps::new(Coffee, "single"),
            "One plan with everything included"),
        ("Pricing with FAQ", C::Pricing, K::PricingTable, SampleProps::new(Hotels, "faq"),
            "Plan cards followed by billing questions"),
        // contact
        ("Contact Form", C::Contact, K::ContactForm, SampleProps::new(Restaurants, "simple"),
            "Name, email, and message with inline validation"),
        ("Demo Request Form", C::Contact, K::ContactForm, SampleProps::new(Hotels, "demo"),
            "Qualifying questions for scheduling a product demo"),
        ("Split Contact", C::Contact, K::ContactForm, SampleProps::new(Bars, "split"),
            "Contact details beside a short form"),
        ("Location Finder", C::Contact, K::ContactForm, SampleProps::new(Coffee, "locations"),
            "Office addresses with a map placeholder"),
        // testimonials
        ("Testimonial Carousel", C::Testimonial, K::Testimonials, SampleProps::new(Restaurants, "carousel"),
            "Rotating customer quotes with avatars"),
        ("Testimonial Wall", C::Testimonial, K::Testimonials, SampleProps::new(Coffee, "wall"),
            "Masonry grid of short customer quotes"),
        ("Featured Quote", C::Testimonial, K::Testimonials, SampleProps::new(Hotels, "featured").dark(),
            "One large quote with the customer's role"),
        ("Video Testimonials", C::Testimonial, K::Testimonials, SampleProps::new(Bars, "video"),
            "Thumbnails that open customer story videos"),
        ("Logo Cloud with Quotes", C::Testimonial, K::Testimonials, SampleProps::new(Restaurants, "logos"),
            "Customer logos above a pair of quotes"),
        // calls to action
        ("CTA Banner", C::Cta, K::CallToAction, SampleProps::new(Restaurants, "banner"),
            "Full-width band with a single primary action"),
        ("Newsletter Signup", C::Cta, K::CallToAction, SampleProps::new(Coffee, "newsletter"),
            "Email capture for operations tips"),
        ("Free Trial CTA", C::Cta, K::CallToAction, SampleProps::new(Bars, "trial").dark(),
            "Trial pitch with no-credit-card reassurance"),
        ("Sticky CTA Bar", C::Cta, K::CallToAction, SampleProps::new(Hotels, "sticky"),
            "Slim bar pinned to the bottom of the viewport"),
        // faq
        ("FAQ Accordion", C::Faq, K::Faq, SampleProps::new(Restaurants, "accordion"),
            "Expandable questions with one open at a time"),
        ("Two-Column FAQ", C::Faq, K::Faq, SampleProps::new(Hotels, "columns"),
            "Questions split across two columns"),
        ("Searchable FAQ", C::Faq, K::Faq, SampleProps::new(Coffee, "search"),
            "Filter questions as the visitor types"),
        ("Categorized FAQ", C::Faq, K::Faq, SampleProps::new(Bars, "grouped"),
            "Questions grouped under billing, setup, and security"),
        // about
        ("Team Grid", C::About, K::About, SampleProps::new(Restaurants, "team"),
            "Founders and leads with photos and roles"),
        ("Company Timeline", C::About, K::About, SampleProps::new(Hotels, "timeline"),
            "Milestones from first kitchen to today"),
        ("Mission and Stats", C::About, K::About, SampleProps::new(Coffee, "mission"),
            "Mission statement with supporting numbers"),
        ("Company Values", C::About, K::About, SampleProps::new(Bars, "values"),
            "Three values with short explanations"),
        // bento
        ("Bento Feature Grid", C::Bento, K::Bento, SampleProps::new(Restaurants, "features"),
            "Mixed-size tiles summarizing the platform"),
        ("Bento Showcase", C::Bento, K::Bento, SampleProps::new(Hotels, "showcase").dark(),
            "Screenshot tiles arranged around a hero tile"),
        ("Bento Metrics", C::Bento, K::Bento, SampleProps::new(Coffee, "metrics"),
            "Outcome numbers in an asymmetric grid"),
        // comparisons
        ("Comparison Table", C::Compare, K::Comparison, SampleProps::new(Restaurants, "plans"),
            "Plan features compared row by row"),
        ("Competitor Comparison", C::Compare, K::Comparison, SampleProps::new(Bars, "competitors"),
            "How the product stacks up against spreadsheets and legacy tools"),
        ("Before and After", C::Compare, K::Comparison, SampleProps::new(Hotels, "before-after"),
            "Paper process next to the digital workflow"),
    ];

    let entries = rows
        .into_iter()
        .zip(1u32..)
        .map(|((title, category, kind, props, description), id)| {
            CatalogEntry::new(id, title, category, kind, props, description)
        })
        .collect();

    Catalog::new(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogQuery, CategoryFilter, SortKey};
    use std::collections::HashSet;

    #[test]
    fn test_registry_size_and_ids() {
        let catalog = template_catalog();
        assert_eq!(catalog.len(), 44);

        let ids: HashSet<u32> = catalog.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), 44);
        assert_eq!(catalog.entries()[0].id, 1);
    }

    #[test]
    fn test_haccp_search_finds_one() {
        let catalog = template_catalog();
        let results = catalog.query(&CatalogQuery::new("haccp", CategoryFilter::All), SortKey::TitleAsc);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Compliance Spotlight");
    }

    #[test]
    fn test_every_category_is_populated() {
        let counts = template_catalog().counts();
        assert_eq!(counts.total, 44);
        assert_eq!(counts.non_empty().count(), Category::ALL.len());
        assert_eq!(counts.count(Category::Hero), 6);
        assert_eq!(counts.count(Category::Pricing), 5);
    }

    #[test]
    fn test_calculator_entry_uses_calculator_kind() {
        let catalog = template_catalog();
        let calculator = catalog
            .entries()
            .iter()
            .find(|e| e.title == "ROI Calculator")
            .unwrap();
        assert_eq!(calculator.render, TemplateKind::RoiCalculator);
        assert_eq!(calculator.category, Category::Pricing);
    }
}
