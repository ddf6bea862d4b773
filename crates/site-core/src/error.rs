//! Error Types for the Site Core

use thiserror::Error;

use crate::roi::FieldError;

pub type Result<T> = std::result::Result<T, SiteError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SiteError {
    #[error("Invalid ROI inputs: {}", format_field_errors(.0))]
    InvalidInputs(Vec<FieldError>),

    #[error("Unknown ROI field: {0}")]
    UnknownField(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown sort key: {0} (expected title-asc, title-desc or category-asc)")]
    UnknownSortKey(String),

    #[error("Unknown industry: {0}")]
    UnknownIndustry(String),
}

impl SiteError {
    /// Field errors carried by an `InvalidInputs` error
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::InvalidInputs(errors) => errors.as_slice(),
            _ => &[],
        }
    }
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
