//! ROI Calculator
//!
//! Validation, projection, and display rounding for the labor-savings
//! calculator on the pricing page.
//!
//! ```text
//! form text ──coerce──▶ RawRoiInputs ──validate──▶ RoiInputs ──calculate──▶ RoiOutputs ──summary──▶ RoiSummary
//!                              │
//!                              └──▶ ValidationResult (one FieldError per bad field)
//! ```

mod engine;
mod format;
mod inputs;
mod validation;

pub use engine::{calculate, RoiOutputs, ANNUAL_PRICE_PER_LOCATION, EFFICIENCY_GAIN, WEEKS_PER_MONTH};
pub use format::{format_currency, format_months, format_percent, RoiSummary};
pub use inputs::{coerce, RawRoiInputs, RoiField, RoiInputs};
pub use validation::{check_field, validate, FieldError, ValidationResult, Violation};
