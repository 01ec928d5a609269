//! Per-step statistics and their accumulation.

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// What happened during one step, or the field-wise sum over many steps.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Statistics {
    /// Wash cycles started
    pub cycles: u64,
    /// Dishes loaded into a cycle that started
    pub dishes_cleaned: u64,
    /// Dishes left waiting outside a running washer
    pub dishes_queued: u64,
    /// Logical hours that elapsed
    pub hours_passed: u64,
}

impl Statistics {
    /// Statistics for a step that starts no cycle.
    pub const fn no_cycle(dishes_queued: u32, hours_passed: u32) -> Self {
        Self {
            cycles: 0,
            dishes_cleaned: 0,
            dishes_queued: dishes_queued as u64,
            hours_passed: hours_passed as u64,
        }
    }

    /// Statistics for a step that starts a cycle washing `dishes_cleaned`.
    pub const fn cycle_started(dishes_cleaned: u32, dishes_queued: u32, hours_passed: u32) -> Self {
        Self {
            cycles: 1,
            dishes_cleaned: dishes_cleaned as u64,
            dishes_queued: dishes_queued as u64,
            hours_passed: hours_passed as u64,
        }
    }
}

impl Add for Statistics {
    type Output = Statistics;

    fn add(self, other: Statistics) -> Statistics {
        Statistics {
            cycles: self.cycles + other.cycles,
            dishes_cleaned: self.dishes_cleaned + other.dishes_cleaned,
            dishes_queued: self.dishes_queued + other.dishes_queued,
            hours_passed: self.hours_passed + other.hours_passed,
        }
    }
}

impl AddAssign for Statistics {
    fn add_assign(&mut self, other: Statistics) {
        *self = *self + other;
    }
}

impl Sum for Statistics {
    fn sum<I: Iterator<Item = Statistics>>(iter: I) -> Statistics {
        iter.fold(Statistics::default(), Add::add)
    }
}
