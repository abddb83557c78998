//! Uniform-cost search (Dijkstra's Algorithm)

use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::{Outcome, SearchEngine};
use crate::errors::Result;
use crate::node::SearchNode;
use crate::traits::StateSpace;
use crate::Cost;

fn cheapest<S>(node: &SearchNode<S>) -> Cost {
    node.cost()
}

/// Build a uniform-cost search engine.
pub fn build<'e, S>() -> SearchEngine<'e, S>
where
    S: Debug + Clone + Eq + Hash + 'e,
{
    SearchEngine::new("uniform-cost", cheapest)
}

/// Perform a search using Dijkstra's algorithm.
///
/// Dijkstra's algorithm behaves like a breadth first search, but always
/// expands the cheapest path next, even when paths end up with varying
/// lengths. With non-negative step costs, the first goal expanded is
/// reached by a cheapest path.
pub fn run<D>(problem: &D) -> Result<Outcome<D::State>>
where
    D: StateSpace + ?Sized,
{
    build().search(problem)
}
