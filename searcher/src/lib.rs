//! Generalized best-first search over implicit state spaces.
//!
//! To search a problem, implement [StateSpace] (or assemble a
//! [SearchProblem] from closures), then hand it to one of the
//! preset algorithms: [dfs], [bfs], [dijkstra::run], [greedy] or
//! [astar]. Each is a [SearchEngine] which differs only in the
//! priority it assigns to search nodes.
//!
//! Problems with a cost landscape but no goal use [LocalSearchEngine]
//! instead.

pub mod algorithm;
mod errors;
mod frontier;
pub mod local;
mod node;
mod problem;
mod traits;

/// Path costs, step costs and heuristic estimates.
pub type Cost = f64;

pub use errors::ContractViolation;
pub use errors::RenderError;
pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use frontier::Frontier;
pub use node::{Action, SearchNode};
pub use problem::SearchProblem;
pub use traits::StateSpace;

pub use algorithm::astar::{astar, greedy};
pub use algorithm::basic::{bfs, breadth_first, depth_first, dfs};
pub use algorithm::dijkstra;
pub use algorithm::{Algorithm, Outcome, SearchEngine, SearchOptions, SearchReport};
pub use local::{Landscape, LocalOptimum, LocalOptions, LocalSearchEngine};
