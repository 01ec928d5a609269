//! Household configuration.
//!
//! A [`HouseholdConstants`] value describes how one household eats and
//! washes. It is fixed for an entire simulation run and read by every
//! transition.
//!
//! The transition engine accepts any household as-is. Construction paths
//! that validate ([`HouseholdBuilder`], [`HouseholdConstants::from_json`])
//! live here for callers that want the constraints enforced up front.
//!
//! # Example
//!
//! ```rust
//! use dishflow::household::{HouseholdBuilder, WaterUsage};
//!
//! let household = HouseholdBuilder::new()
//!     .dishes_per_meal(4)
//!     .capacity(12)
//!     .utilization(0.75)
//!     .water_usage(WaterUsage::EnergyStar)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(household.run_threshold(), 9);
//! ```

pub mod builder;
pub mod error;
pub mod validation;

pub use builder::HouseholdBuilder;
pub use error::{ConstraintViolation, HouseholdError};
pub use validation::HouseholdValidation;

use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;

/// Water consumption class of a dishwasher.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum WaterUsage {
    EnergyStar,
    Standard,
}

impl WaterUsage {
    /// Gallons consumed by one wash cycle.
    pub const fn gallons_per_cycle(self) -> f64 {
        match self {
            WaterUsage::EnergyStar => 4.0,
            WaterUsage::Standard => 6.0,
        }
    }
}

/// Immutable parameters describing one household.
///
/// Missing fields fall back to the default household when deserializing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HouseholdConstants {
    /// Dirty dishes produced by every meal
    pub dishes_per_meal: u32,
    /// Fraction of capacity that must be loaded before a cycle starts
    pub utilization: f64,
    /// Dishes the washer holds
    pub capacity: u32,
    /// Length of one wash cycle in hours
    pub hours_per_cycle: f64,
    pub water_usage: WaterUsage,
}

impl Default for HouseholdConstants {
    fn default() -> Self {
        Self {
            dishes_per_meal: 1,
            utilization: 0.8,
            capacity: 2,
            hours_per_cycle: 3.0,
            water_usage: WaterUsage::Standard,
        }
    }
}

impl HouseholdConstants {
    /// Minimum number of loaded dishes that starts a cycle:
    /// `floor(capacity × utilization)`.
    pub fn run_threshold(&self) -> u32 {
        (f64::from(self.capacity) * self.utilization).floor() as u32
    }

    /// Check every constraint, accumulating all violations.
    pub fn validate(&self) -> HouseholdValidation {
        validation::validate(self)
    }

    /// Consume the household, returning it only if every constraint holds.
    pub fn validated(self) -> Result<Self, HouseholdError> {
        match self.validate() {
            Validation::Success(_) => Ok(self),
            Validation::Failure(errors) => {
                Err(HouseholdError::Invalid(errors.iter().cloned().collect()))
            }
        }
    }

    /// Parse a household from JSON and validate it.
    ///
    /// ```rust
    /// use dishflow::household::{HouseholdConstants, WaterUsage};
    ///
    /// let household = HouseholdConstants::from_json(
    ///     r#"{ "dishes_per_meal": 3, "capacity": 10, "water_usage": "EnergyStar" }"#,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(household.capacity, 10);
    /// assert_eq!(household.water_usage, WaterUsage::EnergyStar);
    /// assert_eq!(household.hours_per_cycle, 3.0);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, HouseholdError> {
        let household: Self = serde_json::from_str(json)?;
        household.validated()
    }
}
