//! Core simulation types.
//!
//! This module contains the building blocks shared by every simulation:
//! - State definitions via the `State` trait
//! - The meal clock that drives logical time
//! - Immutable step history tracking
//!
//! All logic in this module is pure (no side effects).

mod history;
mod meal;
mod state;

pub use history::{StateHistory, StateTransition};
pub use meal::{Meal, HOURS_PER_DAY};
pub use state::State;
