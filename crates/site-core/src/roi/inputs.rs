//! ROI Input Models
//!
//! The seven calculator fields, their fixed ranges, and the raw/validated
//! input records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};

/// One of the seven calculator inputs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoiField {
    Employees,
    Locations,
    HourlyRate,
    TasksPerWeek,
    MinutesPerTask,
    AuditFrequency,
    HoursPerAudit,
}

impl RoiField {
    /// All fields in form order
    pub const ALL: [Self; 7] = [
        Self::Employees,
        Self::Locations,
        Self::HourlyRate,
        Self::TasksPerWeek,
        Self::MinutesPerTask,
        Self::AuditFrequency,
        Self::HoursPerAudit,
    ];

    /// Stable identifier used in form names and error payloads
    pub const fn id(self) -> &'static str {
        match self {
            Self::Employees => "employees",
            Self::Locations => "locations",
            Self::HourlyRate => "hourly_rate",
            Self::TasksPerWeek => "tasks_per_week",
            Self::MinutesPerTask => "minutes_per_task",
            Self::AuditFrequency => "audit_frequency",
            Self::HoursPerAudit => "hours_per_audit",
        }
    }

    /// Human-readable label shown next to the input
    pub const fn label(self) -> &'static str {
        match self {
            Self::Employees => "Number of employees",
            Self::Locations => "Number of locations",
            Self::HourlyRate => "Average hourly wage",
            Self::TasksPerWeek => "Tasks per week",
            Self::MinutesPerTask => "Minutes per task",
            Self::AuditFrequency => "Audits per month",
            Self::HoursPerAudit => "Hours per audit",
        }
    }

    /// Inclusive valid range `(min, max)`
    pub const fn range(self) -> (f64, f64) {
        match self {
            Self::Employees => (1.0, 10_000.0),
            Self::Locations => (1.0, 1_000.0),
            Self::HourlyRate => (5.0, 200.0),
            Self::TasksPerWeek => (1.0, 500.0),
            Self::MinutesPerTask => (1.0, 480.0),
            Self::AuditFrequency => (0.0, 30.0),
            Self::HoursPerAudit => (0.5, 40.0),
        }
    }

    /// Increment used by number inputs
    pub const fn step(self) -> f64 {
        match self {
            Self::HourlyRate | Self::HoursPerAudit => 0.5,
            _ => 1.0,
        }
    }
}

impl fmt::Display for RoiField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for RoiField {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.id() == s)
            .ok_or_else(|| SiteError::UnknownField(s.to_string()))
    }
}

/// Calculator inputs exactly as supplied by a form
///
/// Values may be NaN (unparseable text), negative, or out of range; use
/// [`crate::roi::validate`] to report problems.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawRoiInputs {
    pub employees: f64,
    pub locations: f64,
    pub hourly_rate: f64,
    pub tasks_per_week: f64,
    pub minutes_per_task: f64,
    pub audit_frequency: f64,
    pub hours_per_audit: f64,
}

impl Default for RawRoiInputs {
    /// Starting values shown when the calculator opens
    fn default() -> Self {
        Self {
            employees: 25.0,
            locations: 2.0,
            hourly_rate: 18.0,
            tasks_per_week: 50.0,
            minutes_per_task: 15.0,
            audit_frequency: 2.0,
            hours_per_audit: 8.0,
        }
    }
}

impl RawRoiInputs {
    pub const fn get(&self, field: RoiField) -> f64 {
        match field {
            RoiField::Employees => self.employees,
            RoiField::Locations => self.locations,
            RoiField::HourlyRate => self.hourly_rate,
            RoiField::TasksPerWeek => self.tasks_per_week,
            RoiField::MinutesPerTask => self.minutes_per_task,
            RoiField::AuditFrequency => self.audit_frequency,
            RoiField::HoursPerAudit => self.hours_per_audit,
        }
    }

    pub const fn set(&mut self, field: RoiField, value: f64) {
        match field {
            RoiField::Employees => self.employees = value,
            RoiField::Locations => self.locations = value,
            RoiField::HourlyRate => self.hourly_rate = value,
            RoiField::TasksPerWeek => self.tasks_per_week = value,
            RoiField::MinutesPerTask => self.minutes_per_task = value,
            RoiField::AuditFrequency => self.audit_frequency = value,
            RoiField::HoursPerAudit => self.hours_per_audit = value,
        }
    }

    /// Set a field from form text; empty or unparseable text becomes NaN
    pub fn set_text(&mut self, field: RoiField, text: &str) {
        self.set(field, coerce(text));
    }

    /// Builder-style variant of [`Self::set`]
    #[must_use]
    pub const fn with(mut self, field: RoiField, value: f64) -> Self {
        self.set(field, value);
        self
    }
}

/// Parse form text into a number, NaN when it isn't one
pub fn coerce(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Validated calculator inputs
///
/// Obtain through `RoiInputs::try_from(raw)`. Fields stay public so callers
/// can feed marginal values straight into [`crate::roi::calculate`], which
/// sanitizes rather than failing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoiInputs {
    pub employees: f64,
    pub locations: f64,
    pub hourly_rate: f64,
    pub tasks_per_week: f64,
    pub minutes_per_task: f64,
    pub audit_frequency: f64,
    pub hours_per_audit: f64,
}

impl RoiInputs {
    pub const fn get(&self, field: RoiField) -> f64 {
        match field {
            RoiField::Employees => self.employees,
            RoiField::Locations => self.locations,
            RoiField::HourlyRate => self.hourly_rate,
            RoiField::TasksPerWeek => self.tasks_per_week,
            RoiField::MinutesPerTask => self.minutes_per_task,
            RoiField::AuditFrequency => self.audit_frequency,
            RoiField::HoursPerAudit => self.hours_per_audit,
        }
    }
}

impl TryFrom<RawRoiInputs> for RoiInputs {
    type Error = SiteError;

    fn try_from(raw: RawRoiInputs) -> Result<Self> {
        let result = crate::roi::validate(&raw);
        if !result.is_valid() {
            return Err(SiteError::InvalidInputs(result.into_errors()));
        }

        Ok(Self {
            employees: raw.employees,
            locations: raw.locations,
            hourly_rate: raw.hourly_rate,
            tasks_per_week: raw.tasks_per_week,
            minutes_per_task: raw.minutes_per_task,
            audit_frequency: raw.audit_frequency,
            hours_per_audit: raw.hours_per_audit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_ids_roundtrip() {
        for field in RoiField::ALL {
            assert_eq!(field.id().parse::<RoiField>().unwrap(), field);
        }
        assert!(matches!(
            "staff".parse::<RoiField>(),
            Err(SiteError::UnknownField(_))
        ));
    }

    #[test]
    fn test_coerce_form_text() {
        assert_eq!(coerce(" 42 "), 42.0);
        assert_eq!(coerce("7.5"), 7.5);
        assert!(coerce("").is_nan());
        assert!(coerce("twelve").is_nan());
    }

    #[test]
    fn test_set_text() {
        let mut raw = RawRoiInputs::default();
        raw.set_text(RoiField::Locations, "12");
        assert_eq!(raw.locations, 12.0);
        raw.set_text(RoiField::Locations, "");
        assert!(raw.locations.is_nan());
    }

    #[test]
    fn test_try_from_collects_errors() {
        let raw = RawRoiInputs::default()
            .with(RoiField::Employees, 0.0)
            .with(RoiField::HourlyRate, 500.0);

        let err = RoiInputs::try_from(raw).unwrap_err();
        assert_eq!(err.field_errors().len(), 2);
        assert!(err.to_string().contains("Number of employees must be at least 1"));
    }

    #[test]
    fn test_try_from_defaults_are_valid() {
        let inputs = RoiInputs::try_from(RawRoiInputs::default()).unwrap();
        assert_eq!(inputs.locations, 2.0);
    }
}
