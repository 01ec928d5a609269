//! Dishwasher state.

use crate::core::{Meal, State};
use serde::{Deserialize, Serialize};

/// Where the household's dirty dishes are, and what the washer is doing.
///
/// Exactly one variant is active at a time. Each transition replaces the
/// state wholesale; nothing mutates a state in place.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum DishwasherState {
    /// Washer off, loaded with dishes that have not reached the run threshold.
    Idle { dishes_in_washer: u32, meal: Meal },

    /// Washer mid-cycle. New dishes pile up on the counter until it finishes.
    Running {
        dishes_on_counter: u32,
        dishes_in_washer: u32,
        hours_left_to_run: f64,
        meal: Meal,
    },

    /// A cycle has completed and the washer is empty. Counter dishes are
    /// loaded on the next step.
    Finished { dishes_on_counter: u32, meal: Meal },
}

impl DishwasherState {
    /// Empty, idle washer at the first meal of the day.
    pub const fn initial() -> Self {
        DishwasherState::Idle {
            dishes_in_washer: 0,
            meal: Meal::first(),
        }
    }

    /// The meal that produced the most recent transition.
    pub fn meal(&self) -> Meal {
        match self {
            Self::Idle { meal, .. } | Self::Running { meal, .. } | Self::Finished { meal, .. } => {
                *meal
            }
        }
    }

    /// Dishes not inside a running washer.
    pub fn dishes_queued(&self) -> u32 {
        match self {
            Self::Idle {
                dishes_in_washer, ..
            } => *dishes_in_washer,
            Self::Running {
                dishes_on_counter, ..
            }
            | Self::Finished {
                dishes_on_counter, ..
            } => *dishes_on_counter,
        }
    }

    /// Whether a cycle is still in progress.
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running { .. })
    }
}

impl Default for DishwasherState {
    fn default() -> Self {
        Self::initial()
    }
}

impl State for DishwasherState {
    fn name(&self) -> &str {
        match self {
            Self::Idle { .. } => "Idle",
            Self::Running { .. } => "Running",
            Self::Finished { .. } => "Finished",
        }
    }
}
