//! The meal clock.
//!
//! Meals are the only source of time in the simulation. They repeat in a
//! fixed order every day, and each one carries the number of hours until
//! the household dirties dishes again.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of hours in one simulated day.
pub const HOURS_PER_DAY: u32 = 24;

/// A point in the day at which the household dirties dishes.
///
/// Declaration order is the order meals happen in. The hours of all meals
/// add up to [`HOURS_PER_DAY`].
///
/// # Example
///
/// ```rust
/// use dishflow::core::Meal;
///
/// assert_eq!(Meal::Breakfast.next(), Meal::Lunch);
/// assert_eq!(Meal::Dinner.next(), Meal::Breakfast);
/// assert_eq!(Meal::Lunch.hours(), 5);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
}

impl Meal {
    /// Every meal, in the order they happen during a day.
    pub const ALL: [Meal; 3] = [Meal::Breakfast, Meal::Lunch, Meal::Dinner];

    /// First meal of the day; simulations start here.
    pub const fn first() -> Self {
        Meal::Breakfast
    }

    /// The meal that follows this one, wrapping from the last meal of the
    /// day back to the first.
    pub const fn next(self) -> Self {
        match self {
            Meal::Breakfast => Meal::Lunch,
            Meal::Lunch => Meal::Dinner,
            Meal::Dinner => Meal::Breakfast,
        }
    }

    /// Hours until dishes get dirty again, i.e. until the next meal.
    pub const fn hours(self) -> u32 {
        match self {
            Meal::Breakfast => 14,
            Meal::Lunch => 5,
            Meal::Dinner => 5,
        }
    }

    /// Human-readable name of the meal.
    pub fn name(self) -> &'static str {
        match self {
            Meal::Breakfast => "Breakfast",
            Meal::Lunch => "Lunch",
            Meal::Dinner => "Dinner",
        }
    }

    /// Shortest gap between two consecutive meals.
    pub fn shortest_gap() -> u32 {
        Self::ALL.iter().map(|m| m.hours()).min().unwrap_or(0)
    }

    /// Longest gap between two consecutive meals.
    pub fn longest_gap() -> u32 {
        Self::ALL.iter().map(|m| m.hours()).max().unwrap_or(0)
    }
}

impl Default for Meal {
    fn default() -> Self {
        Self::first()
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
