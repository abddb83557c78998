//! Heuristic searches: A* and greedy best-first.

use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::{Outcome, SearchEngine};
use crate::errors::Result;
use crate::node::SearchNode;
use crate::traits::StateSpace;
use crate::Cost;

fn estimated_total<S>(node: &SearchNode<S>) -> Cost {
    node.cost() + node.heuristic()
}

fn closest<S>(node: &SearchNode<S>) -> Cost {
    node.heuristic()
}

/// Build an A* engine, ranking nodes by cost so far plus the heuristic
/// estimate of the cost remaining.
pub fn build<'e, S>() -> SearchEngine<'e, S>
where
    S: Debug + Clone + Eq + Hash + 'e,
{
    SearchEngine::new("astar", estimated_total)
}

/// A* search. Optimal when the heuristic is admissible, though the
/// engine has no way to check that it is.
pub fn astar<D>(problem: &D) -> Result<Outcome<D::State>>
where
    D: StateSpace + ?Sized,
{
    build().search(problem)
}

/// Build a greedy best-first engine, which ignores the cost so far.
pub fn greedy_engine<'e, S>() -> SearchEngine<'e, S>
where
    S: Debug + Clone + Eq + Hash + 'e,
{
    SearchEngine::new("greedy", closest)
}

/// Greedy best-first search. Fast, but makes no promise that the path
/// it finds is the cheapest.
pub fn greedy<D>(problem: &D) -> Result<Outcome<D::State>>
where
    D: StateSpace + ?Sized,
{
    greedy_engine().search(problem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dijkstra, Action, SearchProblem};

    // Number line from 0 to 20, with a costly shortcut straight to
    // the goal from 1.
    fn shortcut<'p>() -> SearchProblem<'p, i32> {
        SearchProblem::new(
            0,
            |s: &i32| *s == 20,
            |s: &i32| {
                let mut actions = Vec::new();
                if *s < 20 {
                    actions.push(Action::step(s + 1));
                }
                if *s == 1 {
                    actions.push(Action::new(20, 100.0));
                }
                actions
            },
        )
        .with_heuristic(|s: &i32| (20 - s) as Cost)
    }

    #[test]
    fn astar_is_optimal_and_focused() {
        let problem = shortcut();
        let report = build().search_counted(&problem).unwrap();
        let node = report.outcome.solution().unwrap();
        assert_eq!(node.cost(), 20.0);
        assert_eq!(report.expanded, 21);

        let uniform = dijkstra::run(&problem).unwrap().into_solution().unwrap();
        assert_eq!(uniform.cost(), node.cost());
    }

    #[test]
    fn greedy_takes_the_shortcut() {
        let node = greedy(&shortcut()).unwrap().into_solution().unwrap();
        assert_eq!(node.path(), &[0, 1, 20]);
        assert_eq!(node.cost(), 101.0);
    }
}
