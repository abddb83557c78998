//! Search nodes and the actions which connect them.

use std::fmt::Debug;

use crate::Cost;

/// One transition out of a state.
#[derive(Debug, Clone, PartialEq)]
pub struct Action<S> {
    /// Optional human readable name for this action, e.g. "left".
    pub label: Option<String>,

    /// The state reached by taking this action.
    pub state: S,

    /// Cost of taking this action. Must be non-negative.
    pub cost: Cost,
}

impl<S> Action<S> {
    /// Construct an action without a label.
    pub fn new(state: S, cost: Cost) -> Self {
        Self {
            label: None,
            state,
            cost,
        }
    }

    /// Construct a labeled action.
    pub fn labeled<L: Into<String>>(label: L, state: S, cost: Cost) -> Self {
        Self {
            label: Some(label.into()),
            state,
            cost,
        }
    }

    /// Construct an unlabeled action with unit cost.
    pub fn step(state: S) -> Self {
        Self::new(state, 1.0)
    }
}

/// An immutable record of one path through the state space.
///
/// Extending a node produces a brand new node, the original
/// is never edited.
#[derive(Debug, Clone)]
pub struct SearchNode<S> {
    path: Vec<S>,
    actions: Vec<Action<S>>,
    cost: Cost,
    heuristic: Cost,
}

impl<S> SearchNode<S>
where
    S: Clone,
{
    /// The trivial path which sits at the origin.
    pub fn root(origin: S, heuristic: Cost) -> Self {
        Self {
            path: vec![origin],
            actions: Vec::new(),
            cost: 0.0,
            heuristic,
        }
    }

    /// Return a new node which follows this path, then takes `action`.
    pub fn extend(&self, action: Action<S>, heuristic: Cost) -> Self {
        let mut path = self.path.clone();
        path.push(action.state.clone());

        let mut actions = self.actions.clone();
        let cost = self.cost + action.cost;
        actions.push(action);

        Self {
            path,
            actions,
            cost,
            heuristic,
        }
    }
}

impl<S> SearchNode<S> {
    /// The state at the end of this path.
    pub fn state(&self) -> &S {
        // A node always holds at least its root state.
        &self.path[self.path.len() - 1]
    }

    /// Where this path started.
    pub fn origin(&self) -> &S {
        &self.path[0]
    }

    /// Every state along the path, from the origin to [SearchNode::state].
    pub fn path(&self) -> &[S] {
        &self.path
    }

    /// The actions taken along the path. There is one fewer action than
    /// there are states.
    pub fn actions(&self) -> &[Action<S>] {
        &self.actions
    }

    /// Labels of the actions along the path, skipping unlabeled ones.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.actions.iter().filter_map(|a| a.label.as_deref())
    }

    /// Accumulated cost of every action along the path.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Cached heuristic estimate for [SearchNode::state].
    pub fn heuristic(&self) -> Cost {
        self.heuristic
    }

    /// Number of states on the path, counting the origin.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn into_path(self) -> Vec<S> {
        self.path
    }
}
