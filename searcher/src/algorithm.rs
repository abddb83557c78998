//! Provides the building blocks for search algorithms

use std::cmp;
use std::default::Default;
use std::fmt;
use std::str::FromStr;

use log::{debug, info, trace, warn};

use self::cache::Visited;
use crate::errors::{ContractViolation, Result, SearchError};
use crate::frontier::Frontier;
use crate::node::{Action, SearchNode};
use crate::traits::StateSpace;
use crate::Cost;

pub mod astar;
pub mod basic;
pub(crate) mod cache;
pub mod dijkstra;

/// Options which control how a search runs, but not which
/// path it finds.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Log a progress line every this many expansions.
    pub verbose: Option<usize>,

    /// Give up with [SearchError::StepLimitExhausted] after
    /// this many expansions.
    pub limit: Option<usize>,

    /// Draw each expanded state, if the state space supports it.
    pub animate: bool,
}

#[derive(Debug)]
struct StepLimit {
    current: usize,
    maximum: usize,
}

impl StepLimit {
    fn new(limit: usize) -> Self {
        Self {
            current: 0,
            maximum: limit,
        }
    }

    fn increment(&mut self) -> Result<()> {
        if self.current >= self.maximum {
            return Err(SearchError::StepLimitExhausted(self.current));
        }
        self.current += 1;
        Ok(())
    }
}

/// How a search ended.
#[derive(Debug, Clone)]
pub enum Outcome<S> {
    /// A goal state was expanded; this is the path to it.
    Succeeded(SearchNode<S>),

    /// The frontier ran dry without reaching a goal.
    Exhausted,
}

impl<S> Outcome<S> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Succeeded(_))
    }

    /// The winning path, if there is one.
    pub fn solution(&self) -> Option<&SearchNode<S>> {
        match self {
            Outcome::Succeeded(node) => Some(node),
            Outcome::Exhausted => None,
        }
    }

    pub fn into_solution(self) -> Option<SearchNode<S>> {
        match self {
            Outcome::Succeeded(node) => Some(node),
            Outcome::Exhausted => None,
        }
    }
}

/// The outcome of a search, along with some accounting.
#[derive(Debug, Clone)]
pub struct SearchReport<S> {
    pub outcome: Outcome<S>,

    /// Number of distinct states expanded (the size of the visited set).
    pub expanded: usize,

    /// Number of successor nodes built.
    pub generated: usize,

    /// Largest number of live frontier entries at any point.
    pub max_frontier: usize,
}

type PriorityFn<'e, S> = Box<dyn Fn(&SearchNode<S>) -> Cost + 'e>;
type FilterFn<'e, S> = Box<dyn Fn(&SearchNode<S>) -> bool + 'e>;

/// Generic best-first search.
///
/// Every algorithm in this crate is a `SearchEngine` with a different
/// priority function. The engine pops the node with the lowest priority,
/// expands it unless its state has already been expanded, and queues
/// its successors, keeping only the best queued path to each state.
pub struct SearchEngine<'e, S> {
    name: String,
    priority: PriorityFn<'e, S>,
    filter: Option<FilterFn<'e, S>>,
    options: SearchOptions,
}

impl<'e, S> fmt::Debug for SearchEngine<'e, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchEngine")
            .field("name", &self.name)
            .field("filtered", &self.filter.is_some())
            .field("options", &self.options)
            .finish()
    }
}

impl<'e, S> SearchEngine<'e, S>
where
    S: fmt::Debug + Clone + Eq + std::hash::Hash + 'e,
{
    /// Build an engine which expands nodes in order of `priority`,
    /// lowest first.
    pub fn new<N, P>(name: N, priority: P) -> Self
    where
        N: Into<String>,
        P: Fn(&SearchNode<S>) -> Cost + 'e,
    {
        Self {
            name: name.into(),
            priority: Box::new(priority),
            filter: None,
            options: SearchOptions::default(),
        }
    }

    /// Only queue nodes for which `filter` returns true.
    ///
    /// The initial node is always expanded.
    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&SearchNode<S>) -> bool + 'e,
    {
        self.filter = Some(Box::new(filter));
        self
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Run the search to completion, returning only the outcome.
    pub fn search<D>(&self, problem: &D) -> Result<Outcome<S>>
    where
        D: StateSpace<State = S> + ?Sized,
    {
        self.search_counted(problem).map(|report| report.outcome)
    }

    /// Run the search to completion.
    pub fn search_counted<D>(&self, problem: &D) -> Result<SearchReport<S>>
    where
        D: StateSpace<State = S> + ?Sized,
    {
        let mut frontier = Frontier::new(&*self.priority);
        let mut visited = Visited::default();
        let mut limit = self.options.limit.map(StepLimit::new);
        let mut animate = self.options.animate;
        let mut generated = 0;
        let mut max_frontier = 0;

        let origin = problem.initial_state();
        let heuristic = checked_heuristic(problem, &origin)?;
        debug!("{} search starting from {:?}", self.name, origin);
        frontier.push(SearchNode::root(origin, heuristic))?;

        while let Some(node) = frontier.pop_min() {
            // Stale duplicates are discarded, not expanded twice.
            if visited.contains(node.state()) {
                continue;
            }

            if let Some(limit) = limit.as_mut() {
                limit.increment()?;
            }
            visited.insert(node.state().clone());

            trace!(
                "expanding {:?} (depth {}, cost {})",
                node.state(),
                node.depth(),
                node.cost()
            );
            if let Some(every) = self.options.verbose {
                if every > 0 && visited.len() % every == 0 {
                    info!(
                        "{}: F{} V{} T{} P{}",
                        self.name,
                        frontier.len(),
                        visited.len(),
                        frontier.tombstones(),
                        frontier.rank(&node)
                    );
                }
            }
            if animate {
                animate = self.draw(problem, node.state());
            }

            if problem.is_goal(node.state()) {
                debug!(
                    "{} search reached a goal after {} expansions (cost {})",
                    self.name,
                    visited.len(),
                    node.cost()
                );
                return Ok(SearchReport {
                    outcome: Outcome::Succeeded(node),
                    expanded: visited.len(),
                    generated,
                    max_frontier,
                });
            }

            for action in problem.successors(node.state()) {
                check_action(node.state(), &action)?;
                if visited.contains(&action.state) {
                    continue;
                }

                let heuristic = checked_heuristic(problem, &action.state)?;
                let child = node.extend(action, heuristic);
                generated += 1;

                if let Some(filter) = &self.filter {
                    if !filter(&child) {
                        continue;
                    }
                }

                if frontier.contains(child.state()) {
                    frontier.try_improve(child);
                } else {
                    frontier.push(child)?;
                }
            }
            max_frontier = cmp::max(max_frontier, frontier.len());
        }

        debug!(
            "{} search exhausted after {} expansions",
            self.name,
            visited.len()
        );
        Ok(SearchReport {
            outcome: Outcome::Exhausted,
            expanded: visited.len(),
            generated,
            max_frontier,
        })
    }

    // Returns whether to keep drawing.
    fn draw<D>(&self, problem: &D, state: &S) -> bool
    where
        D: StateSpace<State = S> + ?Sized,
    {
        match problem.draw(state) {
            Ok(picture) => {
                trace!("{:?}\n{}", state, picture);
                true
            }
            Err(error) => {
                warn!("{}: not animating: {}", self.name, error);
                false
            }
        }
    }
}

fn checked_heuristic<D>(problem: &D, state: &D::State) -> Result<Cost>
where
    D: StateSpace + ?Sized,
{
    let heuristic = problem.heuristic_cost(state);
    if !heuristic.is_finite() {
        return Err(ContractViolation::NonFiniteHeuristic {
            state: format!("{:?}", state),
        }
        .into());
    }
    Ok(heuristic)
}

fn check_action<S>(source: &S, action: &Action<S>) -> Result<()>
where
    S: fmt::Debug + Eq,
{
    if !action.cost.is_finite() {
        return Err(ContractViolation::NonFiniteCost {
            state: format!("{:?}", action.state),
        }
        .into());
    }
    if action.cost < 0.0 {
        return Err(ContractViolation::NegativeStepCost {
            state: format!("{:?}", action.state),
            cost: action.cost,
        }
        .into());
    }
    if &action.state == source {
        return Err(ContractViolation::SelfLoop {
            state: format!("{:?}", source),
        }
        .into());
    }
    Ok(())
}

/// The named search algorithms, which differ only in priority function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    DepthFirst,
    BreadthFirst,
    UniformCost,
    Greedy,
    AStar,
}

const ALGORITHMS: [Algorithm; 5] = [
    Algorithm::DepthFirst,
    Algorithm::BreadthFirst,
    Algorithm::UniformCost,
    Algorithm::Greedy,
    Algorithm::AStar,
];

impl Algorithm {
    pub fn all() -> impl Iterator<Item = Self> {
        ALGORITHMS.iter().cloned()
    }

    /// Build the search engine for this algorithm.
    pub fn engine<'e, S>(self) -> SearchEngine<'e, S>
    where
        S: fmt::Debug + Clone + Eq + std::hash::Hash + 'e,
    {
        match self {
            Algorithm::DepthFirst => basic::depth_first(),
            Algorithm::BreadthFirst => basic::breadth_first(),
            Algorithm::UniformCost => dijkstra::build(),
            Algorithm::Greedy => astar::greedy_engine(),
            Algorithm::AStar => astar::build(),
        }
    }

    /// Short name, as accepted by [Algorithm::from_str].
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::DepthFirst => "dfs",
            Algorithm::BreadthFirst => "bfs",
            Algorithm::UniformCost => "ucs",
            Algorithm::Greedy => "greedy",
            Algorithm::AStar => "astar",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error when parsing an algorithm name.
#[derive(Debug, thiserror::Error)]
#[error("Unknown search algorithm: {0}")]
pub struct ParseAlgorithmError(String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dfs" | "depth-first" => Ok(Algorithm::DepthFirst),
            "bfs" | "breadth-first" => Ok(Algorithm::BreadthFirst),
            "ucs" | "uniform-cost" | "dijkstra" => Ok(Algorithm::UniformCost),
            "greedy" => Ok(Algorithm::Greedy),
            "astar" | "a*" => Ok(Algorithm::AStar),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}
