//! Subscription Plans
//!
//! Tiers shown in the pricing table. The annual per-location price of the
//! featured tier is the subscription cost the ROI projection assumes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::roi::ANNUAL_PRICE_PER_LOCATION;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Identifier sent with "plan clicked" events
    pub id: String,
    pub name: String,
    pub blurb: String,

    /// Per location, billed monthly
    pub monthly_price: Option<Decimal>,

    /// Per location, billed annually; `None` means "contact sales"
    pub annual_price: Option<Decimal>,

    pub features: Vec<String>,

    /// Drawn with the "Most popular" badge
    pub highlighted: bool,
}

impl Plan {
    /// Effective monthly cost when billed annually
    pub fn annual_monthly_equivalent(&self) -> Option<Decimal> {
        self.annual_price
            .map(|p| (p / Decimal::from(12)).round_dp(2))
    }

    /// Annual savings versus paying monthly
    pub fn annual_discount(&self) -> Option<Decimal> {
        match (self.monthly_price, self.annual_price) {
            (Some(monthly), Some(annual)) => Some(monthly * Decimal::from(12) - annual),
            _ => None,
        }
    }
}

fn features(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// The three published tiers, cheapest first
pub fn plans() -> Vec<Plan> {
    vec![
        Plan {
            id: "starter".into(),
            name: "Starter".into(),
            blurb: "For a single location getting off paper".into(),
            monthly_price: Some(Decimal::from(129)),
            annual_price: Some(Decimal::from(1290)),
            features: features(&[
                "Unlimited checklists",
                "Temperature logs",
                "Up to 15 staff accounts",
                "Email support",
            ]),
            highlighted: false,
        },
        Plan {
            id: "pro".into(),
            name: "Pro".into(),
            blurb: "For growing groups that need labor insights".into(),
            monthly_price: Some(Decimal::from(249)),
            annual_price: Some(featured_annual_price()),
            features: features(&[
                "Everything in Starter",
                "Labor and task analytics",
                "Audit scheduling",
                "Unlimited staff accounts",
                "Priority support",
            ]),
            highlighted: true,
        },
        Plan {
            id: "enterprise".into(),
            name: "Enterprise".into(),
            blurb: "For multi-brand operators and franchises".into(),
            monthly_price: None,
            annual_price: None,
            features: features(&[
                "Everything in Pro",
                "SSO and role-based access",
                "Custom integrations",
                "Dedicated success manager",
            ]),
            highlighted: false,
        },
    ]
}

fn featured_annual_price() -> Decimal {
    Decimal::from_f64_retain(ANNUAL_PRICE_PER_LOCATION).unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_featured_plan_matches_roi_price() {
        let featured: Vec<_> = plans().into_iter().filter(|p| p.highlighted).collect();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].annual_price, Some(dec!(2490)));
    }

    #[test]
    fn test_annual_discount() {
        let pro = plans().into_iter().find(|p| p.id == "pro").unwrap();
        assert_eq!(pro.annual_discount(), Some(dec!(498)));
        assert_eq!(pro.annual_monthly_equivalent(), Some(dec!(207.50)));
    }

    #[test]
    fn test_enterprise_is_contact_sales() {
        let enterprise = plans().into_iter().find(|p| p.id == "enterprise").unwrap();
        assert_eq!(enterprise.annual_discount(), None);
        assert_eq!(enterprise.annual_monthly_equivalent(), None);
    }
}
