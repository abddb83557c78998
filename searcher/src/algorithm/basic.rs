pub use bfs::{bfs, breadth_first};
pub use dfs::{depth_first, dfs};

mod bfs {
    use std::fmt::Debug;
    use std::hash::Hash;

    use crate::algorithm::{Outcome, SearchEngine};
    use crate::errors::Result;
    use crate::node::SearchNode;
    use crate::traits::StateSpace;
    use crate::Cost;

    fn shallowest<S>(node: &SearchNode<S>) -> Cost {
        node.depth() as Cost
    }

    /// Breadth-first search engine: the shallowest node is always
    /// expanded next, and nodes at equal depth come out in the order
    /// they were discovered.
    pub fn breadth_first<'e, S>() -> SearchEngine<'e, S>
    where
        S: Debug + Clone + Eq + Hash + 'e,
    {
        SearchEngine::new("breadth-first", shallowest)
    }

    /// Breadth-first search, where the order among siblings is determined
    /// by the order of [StateSpace::successors].
    pub fn bfs<D>(problem: &D) -> Result<Outcome<D::State>>
    where
        D: StateSpace + ?Sized,
    {
        breadth_first().search(problem)
    }
}

mod dfs {
    use std::fmt::Debug;
    use std::hash::Hash;

    use crate::algorithm::{Outcome, SearchEngine};
    use crate::errors::Result;
    use crate::node::SearchNode;
    use crate::traits::StateSpace;
    use crate::Cost;

    fn deepest<S>(node: &SearchNode<S>) -> Cost {
        -(node.depth() as Cost)
    }

    /// Depth-first search engine: the deepest node is always expanded
    /// next.
    ///
    /// Nodes at equal depth come out first-in, first-out, like every
    /// other priority tie, so siblings are explored in the order of
    /// [StateSpace::successors].
    pub fn depth_first<'e, S>() -> SearchEngine<'e, S>
    where
        S: Debug + Clone + Eq + Hash + 'e,
    {
        SearchEngine::new("depth-first", deepest)
    }

    /// Depth-first search, where the order among siblings is determined
    /// by the order of [StateSpace::successors].
    pub fn dfs<D>(problem: &D) -> Result<Outcome<D::State>>
    where
        D: StateSpace + ?Sized,
    {
        depth_first().search(problem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, SearchProblem};

    // Binary tree of labels, with leaves at depth 3.
    fn tree<'p>(goal: &'static str) -> SearchProblem<'p, String> {
        SearchProblem::new(
            String::new(),
            move |s: &String| s == goal,
            |s: &String| {
                if s.len() >= 2 {
                    return vec![];
                }
                vec![
                    Action::step(format!("{}l", s)),
                    Action::step(format!("{}r", s)),
                ]
            },
        )
    }

    #[test]
    fn bfs_expands_level_by_level() {
        let engine = breadth_first();
        let report = engine.search_counted(&tree("rl")).unwrap();
        // "", l, r, ll, lr, rl
        assert_eq!(report.expanded, 6);
        assert_eq!(report.outcome.solution().unwrap().depth(), 3);
    }

    #[test]
    fn dfs_dives_first() {
        let engine = depth_first();
        let report = engine.search_counted(&tree("ll")).unwrap();
        // "", l, ll -- but r is discovered alongside l and waits.
        assert_eq!(report.expanded, 3);

        let report = engine.search_counted(&tree("rl")).unwrap();
        // "", l, ll, lr, r, rl
        assert_eq!(report.expanded, 6);
    }

    #[test]
    fn dfs_and_bfs_find_the_same_leaf() {
        let a = dfs(&tree("lr")).unwrap().into_solution().unwrap();
        let b = bfs(&tree("lr")).unwrap().into_solution().unwrap();
        assert_eq!(a.path(), b.path());
    }
}
