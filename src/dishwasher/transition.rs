//! The dishwasher transition engine.
//!
//! [`step`] advances the kitchen by exactly one meal. It is a pure function
//! of the household and the current state: no hidden state, no I/O, and the
//! same inputs always produce the same output.
//!
//! ```text
//! Idle     --[load < threshold]-------------------> Idle
//! Idle     --[load >= threshold, cycle fits]------> Finished
//! Idle     --[load >= threshold, cycle outlasts]--> Running
//! Finished --[load < threshold]-------------------> Idle
//! Finished --[load >= threshold, fits]------------> Finished
//! Finished --[load >= threshold, outlasts]--------> Running
//! Running  --[hours left > gap]-------------------> Running
//! Running  --[hours left <= gap]------------------> Finished
//! ```
//!
//! Here `gap` is the current meal's hours, the time until the next meal
//! dirties more dishes. A cycle "fits" when it takes no longer than that
//! gap. Dishes cleaned by a cycle are counted on the step that starts it.

use crate::core::Meal;
use crate::dishwasher::state::DishwasherState;
use crate::dishwasher::statistics::Statistics;
use crate::household::HouseholdConstants;

/// Output of one transition: what happened, and where the kitchen ended up.
pub type Step = (Statistics, DishwasherState);

/// Dishes waiting to be loaded, split by what fits in the washer.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Load {
    washer: u32,
    overflow: u32,
}

impl Load {
    fn of(household: &HouseholdConstants, queued: u32) -> Self {
        Self {
            washer: queued.min(household.capacity),
            overflow: queued.saturating_sub(household.capacity),
        }
    }

    fn starts_cycle(&self, household: &HouseholdConstants) -> bool {
        self.washer >= household.run_threshold()
    }
}

/// Advance the kitchen by one meal.
///
/// # Example
///
/// ```rust
/// use dishflow::core::Meal;
/// use dishflow::dishwasher::{step, DishwasherState};
/// use dishflow::household::HouseholdConstants;
///
/// let household = HouseholdConstants {
///     utilization: 1.0,
///     ..HouseholdConstants::default()
/// };
///
/// let (statistics, next) = step(&household, DishwasherState::initial());
///
/// assert_eq!(next, DishwasherState::Idle { dishes_in_washer: 1, meal: Meal::Lunch });
/// assert_eq!(statistics.cycles, 0);
/// assert_eq!(statistics.hours_passed, 14);
/// ```
pub fn step(household: &HouseholdConstants, state: DishwasherState) -> Step {
    match state {
        DishwasherState::Idle {
            dishes_in_washer,
            meal,
        } => from_idle(household, dishes_in_washer, meal),
        DishwasherState::Running {
            dishes_on_counter,
            dishes_in_washer,
            hours_left_to_run,
            meal,
        } => from_running(
            household,
            dishes_on_counter,
            dishes_in_washer,
            hours_left_to_run,
            meal,
        ),
        DishwasherState::Finished {
            dishes_on_counter,
            meal,
        } => from_finished(household, dishes_on_counter, meal),
    }
}

/// Load the meal's dishes on top of what already sits in the idle washer.
fn from_idle(household: &HouseholdConstants, dishes_in_washer: u32, meal: Meal) -> Step {
    let next = meal.next();
    let load = Load::of(
        household,
        dishes_in_washer.saturating_add(household.dishes_per_meal),
    );

    if load.starts_cycle(household) {
        start_cycle(household, load, meal)
    } else {
        (
            Statistics::no_cycle(load.overflow, meal.hours()),
            DishwasherState::Idle {
                dishes_in_washer: load.washer,
                meal: next,
            },
        )
    }
}

/// Load the counter and the meal's dishes into the freshly emptied washer.
///
/// Falling back to idle records no elapsed hours.
fn from_finished(household: &HouseholdConstants, dishes_on_counter: u32, meal: Meal) -> Step {
    let next = meal.next();
    let load = Load::of(
        household,
        dishes_on_counter.saturating_add(household.dishes_per_meal),
    );

    if load.starts_cycle(household) {
        start_cycle(household, load, meal)
    } else {
        (
            Statistics::no_cycle(load.overflow, 0),
            DishwasherState::Idle {
                dishes_in_washer: load.washer,
                meal: next,
            },
        )
    }
}

/// The washer is busy, so the meal's dishes go on the counter.
fn from_running(
    household: &HouseholdConstants,
    dishes_on_counter: u32,
    dishes_in_washer: u32,
    hours_left_to_run: f64,
    meal: Meal,
) -> Step {
    let next = meal.next();
    let gap = meal.hours();
    let dishes_on_counter = dishes_on_counter.saturating_add(household.dishes_per_meal);

    let state = if hours_left_to_run > f64::from(gap) {
        DishwasherState::Running {
            dishes_on_counter,
            dishes_in_washer,
            hours_left_to_run: hours_left_to_run - f64::from(gap),
            meal: next,
        }
    } else {
        DishwasherState::Finished {
            dishes_on_counter,
            meal: next,
        }
    };

    (Statistics::no_cycle(dishes_on_counter, gap), state)
}

/// Run the loaded washer. The cycle has `meal`'s hours to finish before the
/// next meal arrives.
fn start_cycle(household: &HouseholdConstants, load: Load, meal: Meal) -> Step {
    let next = meal.next();
    let gap = meal.hours();

    let state = if household.hours_per_cycle <= f64::from(gap) {
        DishwasherState::Finished {
            dishes_on_counter: load.overflow,
            meal: next,
        }
    } else {
        DishwasherState::Running {
            dishes_on_counter: load.overflow,
            dishes_in_washer: load.washer,
            hours_left_to_run: household.hours_per_cycle,
            meal: next,
        }
    };

    (
        Statistics::cycle_started(load.washer, load.overflow, gap),
        state,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::household::WaterUsage;

    fn household(dishes_per_meal: u32, capacity: u32, hours_per_cycle: f64) -> HouseholdConstants {
        HouseholdConstants {
            dishes_per_meal,
            utilization: 1.0,
            capacity,
            hours_per_cycle,
            water_usage: WaterUsage::Standard,
        }
    }

    /// Longer than any gap between meals.
    fn slow_cycle() -> f64 {
        f64::from(Meal::longest_gap() + 1)
    }

    /// Shorter than any gap between meals.
    fn fast_cycle() -> f64 {
        f64::from(Meal::shortest_gap() - 1)
    }

    #[test]
    fn queues_dishes_from_meal_into_idle_washer() {
        let household = household(3, 10, 2.0);

        let (statistics, next) = step(&household, DishwasherState::initial());

        assert_eq!(
            next,
            DishwasherState::Idle {
                dishes_in_washer: 3,
                meal: Meal::Lunch
            }
        );
        assert_eq!(statistics, Statistics::no_cycle(0, Meal::Breakfast.hours()));
    }

    #[test]
    fn first_step_from_breakfast_takes_fourteen_hours() {
        let household = household(1, 2, 3.0);

        let (statistics, next) = step(&household, DishwasherState::initial());

        assert_eq!(
            next,
            DishwasherState::Idle {
                dishes_in_washer: 1,
                meal: Meal::Lunch
            }
        );
        assert_eq!(statistics.hours_passed, 14);
        assert_eq!(statistics.cycles, 0);
    }

    #[test]
    fn idle_washer_accumulates_across_meals() {
        let household = household(2, 10, 2.0);
        let state = DishwasherState::Idle {
            dishes_in_washer: 4,
            meal: Meal::Lunch,
        };

        let (_, next) = step(&household, state);

        assert_eq!(
            next,
            DishwasherState::Idle {
                dishes_in_washer: 6,
                meal: Meal::Dinner
            }
        );
    }

    #[test]
    fn only_queues_dishes_up_to_capacity_when_idle() {
        let household = household(2, 4, slow_cycle());
        let state = DishwasherState::Idle {
            dishes_in_washer: 5,
            meal: Meal::Breakfast,
        };

        let (statistics, next) = step(&household, state);

        assert_eq!(
            next,
            DishwasherState::Running {
                dishes_on_counter: 3,
                dishes_in_washer: 4,
                hours_left_to_run: slow_cycle(),
                meal: Meal::Lunch
            }
        );
        assert_eq!(statistics, Statistics::cycle_started(4, 3, 14));
    }

    #[test]
    fn only_queues_dishes_up_to_capacity_when_finished() {
        let household = household(2, 4, slow_cycle());
        let state = DishwasherState::Finished {
            dishes_on_counter: 4,
            meal: Meal::Breakfast,
        };

        let (statistics, next) = step(&household, state);

        match next {
            DishwasherState::Running {
                dishes_on_counter,
                dishes_in_washer,
                ..
            } => {
                assert_eq!(dishes_in_washer, household.capacity);
                assert_eq!(dishes_on_counter, household.dishes_per_meal);
            }
            other => panic!("Expected Running, got {other:?}"),
        }
        assert_eq!(statistics.cycles, 1);
        assert_eq!(statistics.dishes_cleaned, 4);
    }

    #[test]
    fn dishwasher_starts_when_threshold_is_reached() {
        let household = HouseholdConstants {
            dishes_per_meal: 3,
            utilization: 0.5,
            capacity: 20,
            hours_per_cycle: slow_cycle(),
            water_usage: WaterUsage::EnergyStar,
        };
        let threshold = household.run_threshold();
        let state = DishwasherState::Idle {
            dishes_in_washer: threshold - household.dishes_per_meal,
            meal: Meal::Dinner,
        };

        let (statistics, next) = step(&household, state);

        assert_eq!(statistics.cycles, 1);
        assert_eq!(statistics.dishes_cleaned, u64::from(threshold));
        assert_eq!(statistics.hours_passed, u64::from(Meal::Dinner.hours()));
        assert!(next.is_running());
    }

    #[test]
    fn dishwasher_waits_one_dish_below_threshold() {
        let household = household(1, 6, 2.0);
        let state = DishwasherState::Idle {
            dishes_in_washer: 4,
            meal: Meal::Dinner,
        };

        let (statistics, next) = step(&household, state);

        assert_eq!(statistics.cycles, 0);
        assert_eq!(next.dishes_queued(), 5);
        assert_eq!(next.meal(), Meal::Breakfast);
    }

    #[test]
    fn fast_cycle_finishes_before_next_meal() {
        let household = household(2, 4, fast_cycle());
        let state = DishwasherState::Idle {
            dishes_in_washer: 3,
            meal: Meal::Lunch,
        };

        let (statistics, next) = step(&household, state);

        assert_eq!(
            next,
            DishwasherState::Finished {
                dishes_on_counter: 1,
                meal: Meal::Dinner
            }
        );
        assert_eq!(statistics, Statistics::cycle_started(4, 1, 5));
    }

    #[test]
    fn cycle_exactly_as_long_as_gap_finishes() {
        let household = household(1, 1, f64::from(Meal::Breakfast.hours()));

        let (_, next) = step(&household, DishwasherState::initial());

        assert_eq!(
            next,
            DishwasherState::Finished {
                dishes_on_counter: 0,
                meal: Meal::Lunch
            }
        );
    }

    #[test]
    fn finished_below_threshold_goes_idle_without_elapsed_hours() {
        let household = HouseholdConstants {
            dishes_per_meal: 1,
            capacity: 10,
            ..HouseholdConstants::default()
        };
        let state = DishwasherState::Finished {
            dishes_on_counter: 0,
            meal: Meal::Lunch,
        };

        let (statistics, next) = step(&household, state);

        assert_eq!(
            next,
            DishwasherState::Idle {
                dishes_in_washer: 1,
                meal: Meal::Dinner
            }
        );
        assert_eq!(statistics, Statistics::no_cycle(0, 0));
    }

    #[test]
    fn finished_over_threshold_runs_again() {
        let household = HouseholdConstants {
            dishes_per_meal: 1,
            utilization: 0.5,
            capacity: 50,
            hours_per_cycle: 3.0,
            water_usage: WaterUsage::Standard,
        };
        let state = DishwasherState::Finished {
            dishes_on_counter: 30,
            meal: Meal::Dinner,
        };

        let (statistics, next) = step(&household, state);

        assert_eq!(
            next,
            DishwasherState::Finished {
                dishes_on_counter: 0,
                meal: Meal::Breakfast
            }
        );
        assert_eq!(statistics, Statistics::cycle_started(31, 0, 5));
    }

    #[test]
    fn dishwasher_keeps_running_if_not_enough_time_has_passed() {
        let household = household(2, 10, slow_cycle());
        let gap = Meal::Dinner.hours();
        let state = DishwasherState::Running {
            dishes_on_counter: 0,
            dishes_in_washer: 3,
            hours_left_to_run: f64::from(gap) + 1.0,
            meal: Meal::Dinner,
        };

        let (statistics, next) = step(&household, state);

        assert_eq!(statistics.cycles, 0);
        assert_eq!(statistics.dishes_cleaned, 0);
        assert_eq!(
            next,
            DishwasherState::Running {
                dishes_on_counter: 2,
                dishes_in_washer: 3,
                hours_left_to_run: 1.0,
                meal: Meal::Breakfast
            }
        );
    }

    #[test]
    fn dishes_build_up_on_counter_while_dishwasher_runs() {
        let household = household(4, 10, slow_cycle());
        let state = DishwasherState::Running {
            dishes_on_counter: 5,
            dishes_in_washer: 10,
            hours_left_to_run: 20.0,
            meal: Meal::Breakfast,
        };

        let (statistics, next) = step(&household, state);

        assert_eq!(next.dishes_queued(), 9);
        assert_eq!(statistics.dishes_queued, 9);
        assert!(next.is_running());
    }

    #[test]
    fn dishwasher_finishes_when_enough_time_has_passed() {
        let household = household(2, 10, slow_cycle());
        let state = DishwasherState::Running {
            dishes_on_counter: 3,
            dishes_in_washer: 10,
            hours_left_to_run: f64::from(Meal::Dinner.hours()),
            meal: Meal::Dinner,
        };

        let (statistics, next) = step(&household, state);

        assert_eq!(
            next,
            DishwasherState::Finished {
                dishes_on_counter: 5,
                meal: Meal::Breakfast
            }
        );
        assert_eq!(statistics, Statistics::no_cycle(5, 5));
    }

    #[test]
    fn time_passes_to_the_next_meal() {
        let household = HouseholdConstants::default();

        for meal in Meal::ALL {
            let states = [
                DishwasherState::Idle {
                    dishes_in_washer: 0,
                    meal,
                },
                DishwasherState::Running {
                    dishes_on_counter: 0,
                    dishes_in_washer: 2,
                    hours_left_to_run: 1.0,
                    meal,
                },
                DishwasherState::Finished {
                    dishes_on_counter: 0,
                    meal,
                },
            ];

            for state in states {
                let (_, next) = step(&household, state);
                assert_eq!(next.meal(), meal.next());
            }
        }
    }

    #[test]
    fn zero_capacity_starts_empty_cycles() {
        let household = household(3, 0, 1.0);

        let (statistics, next) = step(&household, DishwasherState::initial());

        assert_eq!(statistics, Statistics::cycle_started(0, 3, 14));
        assert_eq!(
            next,
            DishwasherState::Finished {
                dishes_on_counter: 3,
                meal: Meal::Lunch
            }
        );
    }

    #[test]
    fn transition_is_deterministic() {
        let household = household(3, 7, 6.5);
        let state = DishwasherState::Running {
            dishes_on_counter: 2,
            dishes_in_washer: 7,
            hours_left_to_run: 6.5,
            meal: Meal::Breakfast,
        };

        let first = step(&household, state);
        let second = step(&household, state);

        assert_eq!(first, second);
    }
}
