//! ROI Projection Engine
//!
//! Projects weekly and annual labor-cost savings from the calculator inputs.
//! The arithmetic below runs in a fixed order so results are reproducible to
//! the bit.

use serde::{Deserialize, Serialize};

use super::inputs::{RoiField, RoiInputs};

/// Assumed reduction in labor hours after adopting the product
pub const EFFICIENCY_GAIN: f64 = 0.40;

/// Annual subscription price per location (USD)
pub const ANNUAL_PRICE_PER_LOCATION: f64 = 2490.0;

/// Weeks per month used for the payback period
pub const WEEKS_PER_MONTH: f64 = 4.33;

const WEEKS_PER_YEAR: f64 = 52.0;
const MONTHS_PER_YEAR: f64 = 12.0;
const MINUTES_PER_HOUR: f64 = 60.0;

/// Derived cost/savings projection
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoiOutputs {
    /// Labor cost of the tracked tasks today (USD/week)
    pub current_weekly_cost: f64,

    /// Labor cost after the efficiency gain (USD/week)
    pub improved_weekly_cost: f64,

    /// Never negative
    pub weekly_savings: f64,

    pub annual_savings: f64,

    /// Subscription cost across all locations (USD/year)
    pub annual_cost: f64,

    /// Net annual benefit over annual cost, as a percentage
    pub roi_percentage: f64,

    /// Zero when there are no savings
    pub payback_months: f64,
}

impl RoiOutputs {
    /// Whether a payback period can be stated
    pub fn has_payback(&self) -> bool {
        self.payback_months > 0.0
    }
}

/// Clamp a value into `[0, max]`, mapping non-finite input to zero
fn sanitize(field: RoiField, value: f64) -> f64 {
    if !value.is_finite() || value < 0.0 {
        return 0.0;
    }
    value.min(field.range().1)
}

/// Compute the projection for a set of inputs
///
/// Total over `f64`: out-of-domain values are clamped so the result is always
/// finite and non-negative where the invariants require it.
pub fn calculate(inputs: &RoiInputs) -> RoiOutputs {
    let hourly_rate = sanitize(RoiField::HourlyRate, inputs.hourly_rate);
    let locations = sanitize(RoiField::Locations, inputs.locations);
    let tasks_per_week = sanitize(RoiField::TasksPerWeek, inputs.tasks_per_week);
    let minutes_per_task = sanitize(RoiField::MinutesPerTask, inputs.minutes_per_task);
    let audit_frequency = sanitize(RoiField::AuditFrequency, inputs.audit_frequency);
    let hours_per_audit = sanitize(RoiField::HoursPerAudit, inputs.hours_per_audit);

    let task_hours_per_week = tasks_per_week * minutes_per_task / MINUTES_PER_HOUR;
    let audit_hours_per_week =
        (audit_frequency * hours_per_audit * MONTHS_PER_YEAR) / WEEKS_PER_YEAR;

    let current_weekly_cost =
        (task_hours_per_week + audit_hours_per_week) * hourly_rate * locations;
    let improved_weekly_cost = current_weekly_cost * (1.0 - EFFICIENCY_GAIN);

    let weekly_savings = (current_weekly_cost - improved_weekly_cost).max(0.0);
    let annual_savings = weekly_savings * WEEKS_PER_YEAR;
    let annual_cost = ANNUAL_PRICE_PER_LOCATION * locations;

    let roi_percentage = if annual_cost > 0.0 {
        ((annual_savings - annual_cost) / annual_cost) * 100.0
    } else {
        0.0
    };

    let payback_months = if weekly_savings > 0.0 {
        (annual_cost / (weekly_savings * WEEKS_PER_MONTH)).max(0.0)
    } else {
        0.0
    };

    RoiOutputs {
        current_weekly_cost,
        improved_weekly_cost,
        weekly_savings,
        annual_savings,
        annual_cost,
        roi_percentage,
        payback_months,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roi::RawRoiInputs;
    use proptest::prelude::*;

    fn sample() -> RoiInputs {
        RoiInputs::try_from(RawRoiInputs::default()).unwrap()
    }

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-6
    }

    #[test]
    fn test_reference_projection() {
        // employees=25 locations=2 rate=18 tasks=50 minutes=15 audits=2 hours=8
        let out = calculate(&sample());

        let task_hours = 50.0 * 15.0 / 60.0;
        let audit_hours = (2.0 * 8.0 * 12.0) / 52.0;
        assert_eq!(task_hours, 12.5);
        assert!(close(audit_hours, 3.692_307_692));

        assert!(close(out.current_weekly_cost, 582.923_076_923));
        assert!(close(out.improved_weekly_cost, 349.753_846_154));
        assert!(close(out.weekly_savings, 233.169_230_769));
        assert!(close(out.annual_savings, 12_124.8));
        assert_eq!(out.annual_cost, 4980.0);
        assert!(close(out.roi_percentage, 143.469_879_518));
        assert!(close(out.payback_months, 4.932_535_351));
    }

    #[test]
    fn test_zero_locations() {
        let inputs = RoiInputs { locations: 0.0, ..sample() };
        let out = calculate(&inputs);

        assert_eq!(out.annual_cost, 0.0);
        assert_eq!(out.roi_percentage, 0.0);
        assert_eq!(out.weekly_savings, 0.0);
        assert_eq!(out.payback_months, 0.0);
        assert!(!out.has_payback());
    }

    #[test]
    fn test_zero_savings_has_no_payback() {
        let inputs = RoiInputs { audit_frequency: 0.0, tasks_per_week: 0.0, ..sample() };
        let out = calculate(&inputs);

        assert_eq!(out.weekly_savings, 0.0);
        assert_eq!(out.payback_months, 0.0);
        assert_eq!(out.roi_percentage, -100.0);
    }

    #[test]
    fn test_garbage_inputs_degrade() {
        let inputs = RoiInputs {
            employees: f64::NAN,
            locations: f64::INFINITY,
            hourly_rate: -18.0,
            tasks_per_week: f64::MAX,
            minutes_per_task: f64::NEG_INFINITY,
            audit_frequency: 1e300,
            hours_per_audit: f64::NAN,
        };
        let out = calculate(&inputs);

        for value in [
            out.current_weekly_cost,
            out.improved_weekly_cost,
            out.weekly_savings,
            out.annual_savings,
            out.annual_cost,
            out.roi_percentage,
            out.payback_months,
        ] {
            assert!(value.is_finite());
        }
    }

    fn valid_inputs() -> impl Strategy<Value = RoiInputs> {
        (
            1.0..=10_000.0f64,
            1.0..=1_000.0f64,
            5.0..=200.0f64,
            1.0..=500.0f64,
            1.0..=480.0f64,
            0.0..=30.0f64,
            0.5..=40.0f64,
        )
            .prop_map(|(e, l, r, t, m, a, h)| RoiInputs {
                employees: e,
                locations: l,
                hourly_rate: r,
                tasks_per_week: t,
                minutes_per_task: m,
                audit_frequency: a,
                hours_per_audit: h,
            })
    }

    proptest! {
        #[test]
        fn test_calculate_is_deterministic(inputs in valid_inputs()) {
            let a = calculate(&inputs);
            let b = calculate(&inputs);
            prop_assert_eq!(a.current_weekly_cost.to_bits(), b.current_weekly_cost.to_bits());
            prop_assert_eq!(a.roi_percentage.to_bits(), b.roi_percentage.to_bits());
            prop_assert_eq!(a.payback_months.to_bits(), b.payback_months.to_bits());
            prop_assert_eq!(a, b);
        }

        #[test]
        fn test_outputs_non_negative(inputs in valid_inputs()) {
            let out = calculate(&inputs);
            prop_assert!(out.weekly_savings >= 0.0);
            prop_assert!(out.annual_savings >= 0.0);
            prop_assert!(out.payback_months >= 0.0);
            prop_assert!(out.improved_weekly_cost <= out.current_weekly_cost);
            prop_assert!(out.roi_percentage.is_finite());
        }
    }
}
