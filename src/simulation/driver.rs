//! The simulation driver.
//!
//! [`Simulation`] is an endless iterator of steps produced by repeatedly
//! applying the transition engine. A run takes the prefix of that stream
//! that fits inside an hour budget and folds it into totals and a history.

use crate::core::{State, StateHistory, StateTransition, HOURS_PER_DAY};
use crate::dishwasher::{step, DishwasherState, Statistics, Step};
use crate::household::HouseholdConstants;
use crate::simulation::report::SimulationReport;
use tracing::{debug, trace};

/// Lazily evaluated, infinite sequence of `(Statistics, DishwasherState)`
/// pairs for one household.
///
/// Each call to `next` applies one transition. The stream never ends; bound
/// it with [`Simulation::within_hours`] or an iterator adaptor.
///
/// # Example
///
/// ```rust
/// use dishflow::dishwasher::Statistics;
/// use dishflow::household::HouseholdConstants;
/// use dishflow::simulation::Simulation;
///
/// let household = HouseholdConstants::default();
/// let first_day: Statistics = Simulation::new(&household)
///     .within_hours(24)
///     .map(|(statistics, _)| statistics)
///     .sum();
///
/// assert!(first_day.hours_passed >= 24);
/// ```
#[derive(Clone, Debug)]
pub struct Simulation<'a> {
    household: &'a HouseholdConstants,
    state: DishwasherState,
}

impl<'a> Simulation<'a> {
    /// Start from an empty, idle washer at the first meal.
    pub fn new(household: &'a HouseholdConstants) -> Self {
        Self::from_state(household, DishwasherState::initial())
    }

    /// Start from an arbitrary state.
    pub fn from_state(household: &'a HouseholdConstants, state: DishwasherState) -> Self {
        Self { household, state }
    }

    /// The state the next step will start from.
    pub fn state(&self) -> DishwasherState {
        self.state
    }

    /// Steps taken while fewer than `budget` hours have elapsed.
    ///
    /// The step that reaches or crosses the budget is included; nothing
    /// after it is.
    pub fn within_hours(self, budget: u64) -> impl Iterator<Item = Step> + 'a {
        self.scan(0u64, move |elapsed, (statistics, state)| {
            if *elapsed >= budget {
                return None;
            }
            *elapsed += statistics.hours_passed;
            Some((statistics, state))
        })
    }

    /// Steps covering `days` whole days.
    pub fn within_days(self, days: u32) -> impl Iterator<Item = Step> + 'a {
        self.within_hours(u64::from(days) * u64::from(HOURS_PER_DAY))
    }

    /// Simulate `days` days from the current state, keeping every step.
    pub fn run(self, days: u32) -> SimulationRun {
        let household = self.household;
        let start = self.state;

        let steps: Vec<(Statistics, StateTransition<DishwasherState>)> = self
            .within_days(days)
            .enumerate()
            .scan(start, |from, (index, (statistics, to))| {
                let transition = StateTransition {
                    from: std::mem::replace(from, to),
                    to,
                    hours_passed: statistics.hours_passed,
                    step: index,
                };
                trace!(
                    step = index,
                    from = transition.from.name(),
                    to = transition.to.name(),
                    meal = %to.meal(),
                    cycles = statistics.cycles,
                    dishes_cleaned = statistics.dishes_cleaned,
                    dishes_queued = statistics.dishes_queued,
                    "dishwasher step"
                );
                Some((statistics, transition))
            })
            .collect();

        let totals: Statistics = steps.iter().map(|(statistics, _)| *statistics).sum();
        let history: StateHistory<DishwasherState> =
            steps.into_iter().map(|(_, transition)| transition).collect();
        let final_state = history.last_state().copied().unwrap_or(start);
        let report = SimulationReport::new(household, days, &totals, &final_state);

        debug!(
            days,
            steps = history.len(),
            hours = totals.hours_passed,
            cycles = totals.cycles,
            dishes_cleaned = totals.dishes_cleaned,
            final_state = final_state.name(),
            "simulation complete"
        );

        SimulationRun {
            totals,
            final_state,
            history,
            report,
        }
    }
}

impl Iterator for Simulation<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let (statistics, next) = step(self.household, self.state);
        self.state = next;
        Some((statistics, next))
    }
}

/// Everything a finished run produced.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationRun {
    /// Field-wise sum of every step's statistics
    pub totals: Statistics,
    pub final_state: DishwasherState,
    /// Every step in order
    pub history: StateHistory<DishwasherState>,
    pub report: SimulationReport,
}

/// Simulate `days` days for a household starting from the initial state.
///
/// # Example
///
/// ```rust
/// use dishflow::household::{HouseholdConstants, WaterUsage};
/// use dishflow::simulation::simulate;
///
/// let household = HouseholdConstants {
///     utilization: 1.0,
///     ..HouseholdConstants::default()
/// };
///
/// let report = simulate(&household, 7);
/// assert!(report.cycles >= 1);
/// assert_eq!(report.water_used_gallons, report.cycles as f64 * 6.0);
/// ```
pub fn simulate(household: &HouseholdConstants, days: u32) -> SimulationReport {
    Simulation::new(household).run(days).report
}
