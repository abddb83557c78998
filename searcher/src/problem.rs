//! A state space assembled from closures.

use std::fmt;
use std::hash::Hash;

use crate::node::Action;
use crate::traits::StateSpace;
use crate::Cost;

type GoalFn<'p, S> = Box<dyn Fn(&S) -> bool + 'p>;
type SuccessorFn<'p, S> = Box<dyn Fn(&S) -> Vec<Action<S>> + 'p>;
type HeuristicFn<'p, S> = Box<dyn Fn(&S) -> Cost + 'p>;

/// A search problem built from an initial state, a goal test,
/// a successor function, and optionally a heuristic.
///
/// Useful for small or one-off state spaces which don't warrant
/// their own type.
pub struct SearchProblem<'p, S> {
    initial: S,
    goal: GoalFn<'p, S>,
    successors: SuccessorFn<'p, S>,
    heuristic: Option<HeuristicFn<'p, S>>,
}

impl<'p, S> SearchProblem<'p, S> {
    pub fn new<G, F>(initial: S, goal: G, successors: F) -> Self
    where
        G: Fn(&S) -> bool + 'p,
        F: Fn(&S) -> Vec<Action<S>> + 'p,
    {
        Self {
            initial,
            goal: Box::new(goal),
            successors: Box::new(successors),
            heuristic: None,
        }
    }

    /// Add a heuristic. Without one, the heuristic cost is zero everywhere.
    pub fn with_heuristic<H>(mut self, heuristic: H) -> Self
    where
        H: Fn(&S) -> Cost + 'p,
    {
        self.heuristic = Some(Box::new(heuristic));
        self
    }
}

impl<'p, S> fmt::Debug for SearchProblem<'p, S>
where
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchProblem")
            .field("initial", &self.initial)
            .field("heuristic", &self.heuristic.is_some())
            .finish()
    }
}

impl<'p, S> StateSpace for SearchProblem<'p, S>
where
    S: fmt::Debug + Clone + Eq + Hash,
{
    type State = S;

    fn initial_state(&self) -> S {
        self.initial.clone()
    }

    fn is_goal(&self, state: &S) -> bool {
        (self.goal)(state)
    }

    fn heuristic_cost(&self, state: &S) -> Cost {
        self.heuristic.as_ref().map(|h| h(state)).unwrap_or(0.0)
    }

    fn successors(&self, state: &S) -> Vec<Action<S>> {
        (self.successors)(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_zero_heuristic() {
        let problem = SearchProblem::new(3u8, |s: &u8| *s == 0, |s: &u8| {
            vec![Action::step(s.saturating_sub(1))]
        });
        assert_eq!(problem.initial_state(), 3);
        assert_eq!(problem.heuristic_cost(&3), 0.0);
        assert!(problem.is_goal(&0));
        assert_eq!(problem.successors(&3), vec![Action::step(2)]);

        let problem = problem.with_heuristic(|s: &u8| *s as Cost);
        assert_eq!(problem.heuristic_cost(&3), 3.0);
    }
}
