//! Household validation using Validation.
//!
//! Every constraint is checked and all violations are reported together,
//! so a caller fixing a configuration sees the whole list at once.

use crate::household::error::ConstraintViolation;
use crate::household::HouseholdConstants;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of validating a household.
pub type HouseholdValidation = Validation<(), NonEmptyVec<ConstraintViolation>>;

fn check(holds: bool, violation: impl FnOnce() -> ConstraintViolation) -> HouseholdValidation {
    if holds {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

/// Check every household constraint, accumulating ALL violations.
///
/// Returns `Validation::Success(())` when the household is usable, or
/// `Validation::Failure` carrying each broken constraint.
pub fn validate(household: &HouseholdConstants) -> HouseholdValidation {
    let utilization = household.utilization;
    let hours = household.hours_per_cycle;

    let checks = vec![
        check(household.dishes_per_meal > 0, || {
            ConstraintViolation::NoDishesPerMeal
        }),
        check(household.capacity > 0, || ConstraintViolation::ZeroCapacity),
        // Written so NaN fails both comparisons.
        check(utilization > 0.0 && utilization <= 1.0, || {
            ConstraintViolation::UtilizationOutOfRange { value: utilization }
        }),
        check(hours.is_finite() && hours > 0.0, || {
            ConstraintViolation::InvalidCycleDuration { hours }
        }),
    ];

    Validation::all_vec(checks).map(|_| ())
}
