use std::fmt::Debug;
use std::hash::Hash;

use crate::errors::RenderError;
use crate::node::Action;
use crate::Cost;

/// Provides an interface for describing a state space to search.
///
/// The engine only ever compares and hashes states. States must have a
/// total equality relation and a hash consistent with it, since they
/// are the keys of both the frontier index and the visited set.
///
/// Successor and heuristic functions must be free of side effects: the
/// same state must always produce the same successors, in the same
/// order. Step costs must be non-negative; the engine rejects negative
/// or non-finite costs as a [crate::ContractViolation].
pub trait StateSpace {
    type State: Debug + Clone + Eq + Hash;

    /// The state the search starts from.
    fn initial_state(&self) -> Self::State;

    /// Is this state a goal? Checked when a state is expanded.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Best guess at the remaining cost from this state to a goal.
    ///
    /// Defaults to zero, which makes A* behave like uniform-cost search.
    fn heuristic_cost(&self, _state: &Self::State) -> Cost {
        0.0
    }

    /// All actions available from this state.
    fn successors(&self, state: &Self::State) -> Vec<Action<Self::State>>;

    /// Render a state for animation. Optional, and never required to
    /// succeed.
    fn draw(&self, _state: &Self::State) -> Result<String, RenderError> {
        Err(RenderError::Unsupported)
    }
}

impl<'a, D> StateSpace for &'a D
where
    D: StateSpace + ?Sized,
{
    type State = D::State;

    fn initial_state(&self) -> Self::State {
        (**self).initial_state()
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        (**self).is_goal(state)
    }

    fn heuristic_cost(&self, state: &Self::State) -> Cost {
        (**self).heuristic_cost(state)
    }

    fn successors(&self, state: &Self::State) -> Vec<Action<Self::State>> {
        (**self).successors(state)
    }

    fn draw(&self, state: &Self::State) -> Result<String, RenderError> {
        (**self).draw(state)
    }
}
