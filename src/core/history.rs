//! Step history tracking.
//!
//! Provides immutable tracking of the states a simulation passes through,
//! measured in logical hours rather than wall-clock time.

use super::state::State;
use serde::{Deserialize, Serialize};

/// Record of a single simulation step.
///
/// Transitions are immutable values representing a move from one state
/// to another and the logical hours that move consumed.
///
/// # Example
///
/// ```rust
/// use dishflow::core::{State, StateTransition};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Sink {
///     Empty,
///     Full,
/// }
///
/// impl State for Sink {
///     fn name(&self) -> &str {
///         match self {
///             Self::Empty => "Empty",
///             Self::Full => "Full",
///         }
///     }
/// }
///
/// let transition = StateTransition {
///     from: Sink::Empty,
///     to: Sink::Full,
///     hours_passed: 5,
///     step: 0,
/// };
/// assert_eq!(transition.hours_passed, 5);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Logical hours that elapsed during the step
    pub hours_passed: u64,
    /// Zero-based index of the step within its run
    pub step: usize,
}

/// Ordered history of simulation steps.
///
/// History is immutable - the `record` method returns a new history
/// with the transition added.
///
/// # Example
///
/// ```rust
/// use dishflow::core::{State, StateHistory, StateTransition};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Phase { One, Two, Three }
///
/// impl State for Phase {
///     fn name(&self) -> &str {
///         match self {
///             Self::One => "One",
///             Self::Two => "Two",
///             Self::Three => "Three",
///         }
///     }
/// }
///
/// let history = StateHistory::new()
///     .record(StateTransition { from: Phase::One, to: Phase::Two, hours_passed: 14, step: 0 })
///     .record(StateTransition { from: Phase::Two, to: Phase::Three, hours_passed: 5, step: 1 });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&Phase::One, &Phase::Two, &Phase::Three]);
/// assert_eq!(history.elapsed_hours(), 19);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the transition added.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: initial state, then
    /// the `to` state of each transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Total logical hours covered by the recorded steps.
    pub fn elapsed_hours(&self) -> u64 {
        self.transitions
            .iter()
            .map(|t| t.hours_passed)
            .sum()
    }

    /// The state reached by the last recorded step, if any.
    pub fn last_state(&self) -> Option<&S> {
        self.transitions.last().map(|t| &t.to)
    }

    /// Get all transitions.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

impl<S: State> FromIterator<StateTransition<S>> for StateHistory<S> {
    fn from_iter<I: IntoIterator<Item = StateTransition<S>>>(iter: I) -> Self {
        Self {
            transitions: iter.into_iter().collect(),
        }
    }
}
