//! Industry Content
//!
//! Copy for each vertical the site markets to. Components receive an
//! [`IndustryContent`] value instead of reaching for per-industry constants,
//! so any section can be rendered for any vertical.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};

/// Vertical the copy is written for
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    #[default]
    Restaurants,
    Bars,
    Coffee,
    Hotels,
}

impl Industry {
    pub const ALL: [Self; 4] = [Self::Restaurants, Self::Bars, Self::Coffee, Self::Hotels];

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Restaurants => "restaurants",
            Self::Bars => "bars",
            Self::Coffee => "coffee",
            Self::Hotels => "hotels",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Restaurants => "Restaurants",
            Self::Bars => "Bars & Nightlife",
            Self::Coffee => "Coffee Shops",
            Self::Hotels => "Hotels",
        }
    }

    /// Copy for this vertical
    pub fn content(self) -> IndustryContent {
        match self {
            Self::Restaurants => restaurants(),
            Self::Bars => bars(),
            Self::Coffee => coffee(),
            Self::Hotels => hotels(),
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Industry {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|i| i.slug() == needle)
            .ok_or_else(|| SiteError::UnknownIndustry(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    pub title: String,
    pub body: String,
    pub button: String,
}

/// Everything a section needs to render for one vertical
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryContent {
    pub industry: Industry,
    pub headline: String,
    pub subheadline: String,
    pub features: Vec<Feature>,
    pub testimonials: Vec<Testimonial>,
    pub faqs: Vec<FaqItem>,
    pub stats: Vec<Stat>,
    pub cta: CallToAction,
}

fn feature(icon: &str, title: &str, description: &str) -> Feature {
    Feature {
        icon: icon.into(),
        title: title.into(),
        description: description.into(),
    }
}

fn testimonial(quote: &str, author: &str, role: &str) -> Testimonial {
    Testimonial {
        quote: quote.into(),
        author: author.into(),
        role: role.into(),
    }
}

fn faq(question: &str, answer: &str) -> FaqItem {
    FaqItem {
        question: question.into(),
        answer: answer.into(),
    }
}

fn stat(value: &str, label: &str) -> Stat {
    Stat {
        value: value.into(),
        label: label.into(),
    }
}

fn cta(title: &str, body: &str, button: &str) -> CallToAction {
    CallToAction {
        title: title.into(),
        body: body.into(),
        button: button.into(),
    }
}

/// Questions every vertical gets after its own
fn common_faqs() -> [FaqItem; 2] {
    [
        faq(
            "How long does setup take?",
            "Most locations are live within a day. We import your existing checklists and train your leads on a single call.",
        ),
        faq(
            "Can I cancel anytime?",
            "Yes. Monthly plans cancel at the end of the billing period and annual plans are refunded pro rata.",
        ),
    ]
}

fn restaurants() -> IndustryContent {
    let mut faqs = vec![faq(
        "Does it replace paper temperature logs?",
        "Yes. Wireless probes and guided checks record temperatures automatically and flag anything out of range.",
    )];
    faqs.extend(common_faqs());

    IndustryContent {
        industry: Industry::Restaurants,
        headline: "Run every shift like your best one".into(),
        subheadline: "Checklists, food safety logs, and labor insights for kitchens that can't afford a bad night.".into(),
        features: vec![
            feature("✅", "Digital checklists", "Opening, closing, and line checks that staff complete on any device."),
            feature("🌡️", "Food safety logs", "Temperature and cooling records stored automatically for inspections."),
            feature("📊", "Labor insights", "See where prep hours go and trim the tasks nobody needs."),
            feature("🔔", "Smart alerts", "Managers hear about missed checks before the dinner rush does."),
        ],
        testimonials: vec![
            testimonial("We cut two hours of paperwork from every close.", "Maria Alvarez", "GM, Casa Verde"),
            testimonial("Our last health inspection took fifteen minutes.", "Dev Patel", "Owner, Tandoor House"),
        ],
        faqs,
        stats: vec![
            stat("40%", "less time on checklists"),
            stat("3,200+", "kitchens onboarded"),
            stat("99.9%", "log completion rate"),
        ],
        cta: cta(
            "Ready for a calmer kitchen?",
            "Start a free trial and have your first location running tonight.",
            "Start free trial",
        ),
    }
}

fn bars() -> IndustryContent {
    let mut faqs = vec![faq(
        "Can it track pour costs?",
        "Yes. Inventory counts and variance reports show where product is going between counts.",
    )];
    faqs.extend(common_faqs());

    IndustryContent {
        industry: Industry::Bars,
        headline: "Keep the bar full and the back office quiet".into(),
        subheadline: "Inventory counts, opening checklists, and incident logs built for late nights.".into(),
        features: vec![
            feature("🍸", "Fast inventory counts", "Count a full back bar in minutes with barcode scanning."),
            feature("📋", "Shift handoffs", "Notes and open tasks follow the team from one shift to the next."),
            feature("🛡️", "Incident logs", "Record ID checks and incidents with timestamps and photos."),
        ],
        testimonials: vec![
            testimonial("Variance dropped by half in our first quarter.", "Sam O'Connor", "Bar Manager, The Lantern"),
            testimonial("Closing takes twenty minutes now, not an hour.", "Jess Kim", "Owner, Night Owl"),
        ],
        faqs,
        stats: vec![
            stat("50%", "lower pour variance"),
            stat("1,100+", "bars and pubs"),
            stat("20 min", "average close"),
        ],
        cta: cta(
            "Last call for paper checklists",
            "Move your bar to digital counts and handoffs this week.",
            "Book a demo",
        ),
    }
}

fn coffee() -> IndustryContent {
    let mut faqs = vec![faq(
        "Does it work with one espresso machine and two baristas?",
        "Absolutely. Plans start at a single location and the checklists scale down to a two-person crew.",
    )];
    faqs.extend(common_faqs());

    IndustryContent {
        industry: Industry::Coffee,
        headline: "Consistent coffee, every cup, every cafe".into(),
        subheadline: "Recipe standards, cleaning schedules, and prep lists for busy counters.".into(),
        features: vec![
            feature("☕", "Recipe standards", "Dial-in guides and drink specs live where baristas can see them."),
            feature("🧽", "Cleaning schedules", "Grinder, steam wand, and brewer cleaning on a repeating schedule."),
            feature("🥐", "Pastry prep lists", "Par levels that adjust to the day of the week."),
        ],
        testimonials: vec![
            testimonial("Every store pulls the same shot now.", "Leah Brooks", "Director of Coffee, Morning Co."),
            testimonial("New hires are ready in half the time.", "Tomás Reyes", "Owner, Café Reyes"),
        ],
        faqs,
        stats: vec![
            stat("2x", "faster barista onboarding"),
            stat("850+", "cafes"),
            stat("30%", "less pastry waste"),
        ],
        cta: cta(
            "Brew better operations",
            "Try it free across every counter you run.",
            "Start free trial",
        ),
    }
}

fn hotels() -> IndustryContent {
    let mut faqs = vec![faq(
        "Can housekeeping and F&B share one account?",
        "Yes. Each department gets its own checklists and reporting under a single property.",
    )];
    faqs.extend(common_faqs());

    IndustryContent {
        industry: Industry::Hotels,
        headline: "Every department, one standard of service".into(),
        subheadline: "Room inspections, F&B compliance, and maintenance requests across your property.".into(),
        features: vec![
            feature("🛏️", "Room inspections", "Photo-backed inspections that housekeeping completes room by room."),
            feature("🍽️", "F&B compliance", "Kitchen and banquet logs that stand up to any audit."),
            feature("🔧", "Maintenance requests", "Issues go straight to engineering with location and priority."),
        ],
        testimonials: vec![
            testimonial("Guest complaints about room readiness fell 35%.", "Anna Schultz", "Rooms Division Manager, Harbor Hotel"),
            testimonial("One dashboard for every outlet on property.", "Marcus Lee", "F&B Director, The Grandview"),
        ],
        faqs,
        stats: vec![
            stat("35%", "fewer room complaints"),
            stat("400+", "properties"),
            stat("12", "departments supported"),
        ],
        cta: cta(
            "Raise the standard across your property",
            "See how hotels run inspections and compliance in one place.",
            "Talk to sales",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_industry_has_content() {
        for industry in Industry::ALL {
            let content = industry.content();
            assert_eq!(content.industry, industry);
            assert!(!content.headline.is_empty());
            assert!(content.features.len() >= 3);
            assert!(content.faqs.len() >= 3);
            assert_eq!(content.stats.len(), 3);
        }
    }

    #[test]
    fn test_industry_parse() {
        assert_eq!("Coffee".parse::<Industry>().unwrap(), Industry::Coffee);
        assert!(matches!(
            "bakeries".parse::<Industry>(),
            Err(SiteError::UnknownIndustry(_))
        ));
    }
}
