//! Core State trait for simulation states.
//!
//! Every state a simulation can pass through implements this trait, which
//! provides pure methods for inspecting the state without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for simulation states.
///
/// All methods are pure. States are immutable values describing the
/// current position of a machine; a transition replaces a state wholesale.
///
/// # Required Traits
///
/// - `Clone`: States are copied into the step history
/// - `PartialEq`: States must be comparable for assertions and replay checks
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States appear in serialized traces
///
/// # Example
///
/// ```rust
/// use dishflow::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Kettle {
///     Cold,
///     Boiling,
/// }
///
/// impl State for Kettle {
///     fn name(&self) -> &str {
///         match self {
///             Self::Cold => "Cold",
///             Self::Boiling => "Boiling",
///         }
///     }
/// }
///
/// assert_eq!(Kettle::Boiling.name(), "Boiling");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}
