//! Input Validation
//!
//! Range checks for the calculator form. Every field is checked so the form
//! can show all problems at once.

use serde::{Deserialize, Serialize};

use super::inputs::{RawRoiInputs, RoiField};

/// Why a field was rejected
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Violation {
    NotANumber,
    BelowMin,
    AboveMax,
}

/// A single invalid field with a message ready for display
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: RoiField,
    pub violation: Violation,
    pub message: String,
}

impl FieldError {
    fn new(field: RoiField, violation: Violation) -> Self {
        let (min, max) = field.range();
        let message = match violation {
            Violation::NotANumber => format!("{} must be a number", field.label()),
            Violation::BelowMin => format!("{} must be at least {}", field.label(), min),
            Violation::AboveMax => format!("{} cannot exceed {}", field.label(), max),
        };
        Self { field, violation, message }
    }
}

/// Outcome of validating a full set of inputs
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    errors: Vec<FieldError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors in form field order
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    /// The error for one field, if any
    pub fn error_for(&self, field: RoiField) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }
}

/// Check one value against its field's range
pub fn check_field(field: RoiField, value: f64) -> Option<FieldError> {
    let (min, max) = field.range();
    let violation = if !value.is_finite() {
        Violation::NotANumber
    } else if value < min {
        Violation::BelowMin
    } else if value > max {
        Violation::AboveMax
    } else {
        return None;
    };
    Some(FieldError::new(field, violation))
}

/// Validate all seven fields
pub fn validate(inputs: &RawRoiInputs) -> ValidationResult {
    let errors = RoiField::ALL
        .into_iter()
        .filter_map(|field| check_field(field, inputs.get(field)))
        .collect();
    ValidationResult { errors }
}
