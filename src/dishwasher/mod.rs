//! The dishwasher state machine.
//!
//! - [`DishwasherState`]: where the dishes are and what the washer is doing
//! - [`Statistics`]: what a step produced, summable across steps
//! - [`step`]: the pure transition function advancing one meal

mod state;
mod statistics;
mod transition;

pub use state::DishwasherState;
pub use statistics::Statistics;
pub use transition::{step, Step};
