//! Running the dishwasher state machine over time.
//!
//! This module is the loop around the pure transition engine: it feeds each
//! step's state into the next, stops once the requested number of days has
//! elapsed, and folds the step statistics into a [`SimulationReport`].

mod driver;
mod report;

pub use driver::{simulate, Simulation, SimulationRun};
pub use report::SimulationReport;
