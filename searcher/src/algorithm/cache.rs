//! The closed list: states which have already been expanded.

use std::collections::HashSet;
use std::hash::Hash;

/// Records every state the search has expanded.
///
/// The set only ever grows. Once a state is in the set it is never
/// expanded again, and is never put back on the frontier.
#[derive(Debug)]
pub(crate) struct Visited<S> {
    states: HashSet<S>,
}

impl<S> Default for Visited<S> {
    fn default() -> Self {
        Visited {
            states: HashSet::default(),
        }
    }
}

impl<S> Visited<S>
where
    S: Eq + Hash,
{
    /// Mark this state as expanded. Returns false if it already was.
    pub(crate) fn insert(&mut self, state: S) -> bool {
        self.states.insert(state)
    }

    pub(crate) fn contains(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    pub(crate) fn len(&self) -> usize {
        self.states.len()
    }
}
