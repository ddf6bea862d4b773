//! Display Formatting
//!
//! The engine works in `f64` for reproducible arithmetic; everything shown to
//! a visitor goes through `Decimal` so rounding is explicit.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::engine::RoiOutputs;

/// Projection in `Decimal`
///
/// Money keeps full precision and is rounded once, by [`format_currency`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiSummary {
    pub current_weekly_cost: Decimal,
    pub improved_weekly_cost: Decimal,
    pub weekly_savings: Decimal,
    pub annual_savings: Decimal,
    pub annual_cost: Decimal,

    /// One decimal place
    pub roi_percentage: Decimal,

    /// One decimal place; `None` renders as "N/A"
    pub payback_months: Option<Decimal>,
}

impl RoiOutputs {
    /// Convert the projection for display; only the ratios are rounded here
    pub fn summary(&self) -> RoiSummary {
        RoiSummary {
            current_weekly_cost: money(self.current_weekly_cost),
            improved_weekly_cost: money(self.improved_weekly_cost),
            weekly_savings: money(self.weekly_savings),
            annual_savings: money(self.annual_savings),
            annual_cost: money(self.annual_cost),
            roi_percentage: round(self.roi_percentage, 1),
            payback_months: self.has_payback().then(|| round(self.payback_months, 1)),
        }
    }
}

impl RoiSummary {
    /// One-line description used by the calculator and the CLI
    pub fn headline(&self) -> String {
        match self.payback_months {
            Some(_) => format!(
                "Save {} per year with a {} return, paid back in {}",
                format_currency(self.annual_savings),
                format_percent(self.roi_percentage),
                format_months(self.payback_months),
            ),
            None => "No projected savings for these inputs".to_string(),
        }
    }
}

fn money(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
}

fn round(value: f64, dp: u32) -> Decimal {
    Decimal::from_f64_retain(value)
        .unwrap_or(Decimal::ZERO)
        .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Whole dollars with thousands separators, e.g. `$12,125`
pub fn format_currency(amount: Decimal) -> String {
    let whole = amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .trunc();
    let digits = whole.abs().to_string();
    let sign = if whole.is_sign_negative() && !whole.is_zero() { "-" } else { "" };
    format!("{sign}${}", group_thousands(&digits))
}

/// One decimal place with a percent sign, e.g. `143.5%`
pub fn format_percent(percent: Decimal) -> String {
    format!(
        "{:.1}%",
        percent.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Payback period, or `N/A` when there is none
pub fn format_months(months: Option<Decimal>) -> String {
    match months {
        Some(m) => format!(
            "{:.1} months",
            m.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        ),
        None => "N/A".to_string(),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roi::{calculate, RawRoiInputs, RoiInputs};
    use rust_decimal_macros::dec;

    #[test]
    fn test_reference_summary() {
        let inputs = RoiInputs::try_from(RawRoiInputs::default()).unwrap();
        let summary = calculate(&inputs).summary();

        assert_eq!(summary.current_weekly_cost.round_dp(2), dec!(582.92));
        assert_eq!(summary.weekly_savings.round_dp(2), dec!(233.17));
        assert_eq!(summary.annual_savings.round_dp(2), dec!(12124.80));
        assert_eq!(summary.annual_cost, dec!(4980));
        assert_eq!(summary.roi_percentage, dec!(143.5));
        assert_eq!(summary.payback_months, Some(dec!(4.9)));
    }

    #[test]
    fn test_headline() {
        let inputs = RoiInputs::try_from(RawRoiInputs::default()).unwrap();
        let summary = calculate(&inputs).summary();
        assert_eq!(
            summary.headline(),
            "Save $12,125 per year with a 143.5% return, paid back in 4.9 months"
        );
    }

    #[test]
    fn test_no_payback_is_na() {
        let inputs = RoiInputs {
            locations: 0.0,
            ..RoiInputs::try_from(RawRoiInputs::default()).unwrap()
        };
        let summary = calculate(&inputs).summary();

        assert_eq!(summary.payback_months, None);
        assert_eq!(format_months(summary.payback_months), "N/A");
        assert_eq!(summary.headline(), "No projected savings for these inputs");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(dec!(0)), "$0");
        assert_eq!(format_currency(dec!(999.49)), "$999");
        assert_eq!(format_currency(dec!(999.5)), "$1,000");
        assert_eq!(format_currency(dec!(1234567.2)), "$1,234,567");
        assert_eq!(format_currency(dec!(-4980)), "-$4,980");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(dec!(143.46)), "143.5%");
        assert_eq!(format_percent(dec!(-100)), "-100.0%");
    }

    #[test]
    fn test_summary_serializes_money_as_strings() {
        let inputs = RoiInputs::try_from(RawRoiInputs::default()).unwrap();
        let json = serde_json::to_value(calculate(&inputs).summary()).unwrap();

        assert!(json["annual_cost"].is_string());
        let parsed: Decimal = json["annual_savings"].as_str().unwrap().parse().unwrap();
        assert_eq!(parsed.round_dp(2), dec!(12124.8));
    }

    #[test]
    fn test_currency_rounds_once() {
        let inputs = RoiInputs::try_from(RawRoiInputs::default()).unwrap();
        let outputs = RoiOutputs {
            weekly_savings: 499.496,
            ..calculate(&inputs)
        };

        assert_eq!(format_currency(outputs.summary().weekly_savings), "$499");
        assert_eq!(format_currency(dec!(499.496)), "$499");
    }
}
