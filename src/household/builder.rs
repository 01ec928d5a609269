//! Builder for constructing validated households.

use crate::household::error::HouseholdError;
use crate::household::{HouseholdConstants, WaterUsage};

/// Builder for households with a fluent API.
///
/// Starts from [`HouseholdConstants::default`]; unset fields keep their
/// default values.
#[derive(Clone, Debug, Default)]
pub struct HouseholdBuilder {
    household: HouseholdConstants,
}

impl HouseholdBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dishes produced by every meal.
    pub fn dishes_per_meal(mut self, dishes: u32) -> Self {
        self.household.dishes_per_meal = dishes;
        self
    }

    /// Set the washer capacity in dishes.
    pub fn capacity(mut self, dishes: u32) -> Self {
        self.household.capacity = dishes;
        self
    }

    /// Set the fraction of capacity that triggers a cycle.
    pub fn utilization(mut self, fraction: f64) -> Self {
        self.household.utilization = fraction;
        self
    }

    /// Set the length of one wash cycle in hours.
    pub fn hours_per_cycle(mut self, hours: f64) -> Self {
        self.household.hours_per_cycle = hours;
        self
    }

    /// Set the water class of the dishwasher.
    pub fn water_usage(mut self, usage: WaterUsage) -> Self {
        self.household.water_usage = usage;
        self
    }

    /// Build the household.
    /// Returns every violated constraint if validation fails.
    pub fn build(self) -> Result<HouseholdConstants, HouseholdError> {
        self.household.validated()
    }
}
