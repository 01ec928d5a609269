//! Aggregated results of a simulation run.

use crate::dishwasher::{DishwasherState, Statistics};
use crate::household::HouseholdConstants;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Summary of a run, ready for printing or serialization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Requested horizon
    pub days: u32,
    /// Hours actually covered; the last step may overshoot the horizon
    pub hours_simulated: u64,
    pub cycles: u64,
    pub dishes_cleaned: u64,
    /// `cycles × gallons per cycle`
    pub water_used_gallons: f64,
    /// Dishes cleaned per simulated day
    pub throughput: f64,
    /// Dishes still waiting outside a running washer when the run ended
    pub dishes_queued: u32,
}

impl SimulationReport {
    /// Summarise a run's totals and final state for a household.
    pub fn new(
        household: &HouseholdConstants,
        days: u32,
        totals: &Statistics,
        final_state: &DishwasherState,
    ) -> Self {
        let throughput = if days == 0 {
            0.0
        } else {
            totals.dishes_cleaned as f64 / f64::from(days)
        };

        Self {
            days,
            hours_simulated: totals.hours_passed,
            cycles: totals.cycles,
            dishes_cleaned: totals.dishes_cleaned,
            water_used_gallons: totals.cycles as f64 * household.water_usage.gallons_per_cycle(),
            throughput,
            dishes_queued: final_state.dishes_queued(),
        }
    }

    /// Render the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Simulated {} days ({} hours)",
            self.days, self.hours_simulated
        )?;
        writeln!(f, "  cycles run:      {}", self.cycles)?;
        writeln!(f, "  dishes cleaned:  {}", self.dishes_cleaned)?;
        writeln!(f, "  water used:      {:.1} gal", self.water_used_gallons)?;
        writeln!(f, "  throughput:      {:.2} dishes/day", self.throughput)?;
        write!(f, "  dishes waiting:  {}", self.dishes_queued)
    }
}
