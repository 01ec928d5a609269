//! Household configuration errors.

use thiserror::Error;

/// A single household constraint that does not hold.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConstraintViolation {
    #[error("a meal must produce at least one dish")]
    NoDishesPerMeal,

    #[error("dishwasher capacity must be at least one dish")]
    ZeroCapacity,

    #[error("utilization must be in (0, 1] (got {value})")]
    UtilizationOutOfRange { value: f64 },

    #[error("hours per cycle must be positive and finite (got {hours})")]
    InvalidCycleDuration { hours: f64 },
}

/// Errors that can occur when constructing a household
#[derive(Debug, Error)]
pub enum HouseholdError {
    /// Every constraint the household breaks, in check order
    #[error("invalid household constants: {}", join_violations(.0))]
    Invalid(Vec<ConstraintViolation>),

    /// Household JSON could not be parsed
    #[error("failed to parse household: {0}")]
    Parse(#[from] serde_json::Error),
}

fn join_violations(violations: &[ConstraintViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
