//! Dishflow: a pure functional simulation of a household's dishwasher
//!
//! Every meal dirties dishes. Once enough of them are loaded the dishwasher
//! runs a cycle, and while it runs new dishes pile up on the counter. Dishflow
//! models this as a discrete-event simulation over logical meal steps: a
//! pure transition function advances the kitchen one meal at a time, and a
//! driver applies it repeatedly to produce a trace and aggregate statistics.
//!
//! # Core Concepts
//!
//! - **Household**: Immutable parameters read by every transition
//! - **DishwasherState**: `Idle`, `Running` or `Finished`, replaced each step
//! - **Transition**: Pure `(household, state) -> (statistics, state)` function
//! - **Simulation**: Lazy, infinite stream of steps bounded by an hour budget
//!
//! # Example
//!
//! ```rust
//! use dishflow::household::{HouseholdBuilder, WaterUsage};
//! use dishflow::simulation::simulate;
//!
//! let household = HouseholdBuilder::new()
//!     .dishes_per_meal(4)
//!     .capacity(12)
//!     .utilization(0.75)
//!     .hours_per_cycle(2.0)
//!     .water_usage(WaterUsage::EnergyStar)
//!     .build()
//!     .unwrap();
//!
//! let report = simulate(&household, 7);
//! assert_eq!(report.water_used_gallons, report.cycles as f64 * 4.0);
//! println!("{report}");
//! ```

pub mod core;
pub mod dishwasher;
pub mod household;
pub mod simulation;

// Re-export commonly used types
pub use crate::core::{Meal, State, StateHistory, StateTransition};
pub use dishwasher::{step, DishwasherState, Statistics};
pub use household::{HouseholdBuilder, HouseholdConstants, HouseholdError, WaterUsage};
pub use simulation::{simulate, Simulation, SimulationReport, SimulationRun};
