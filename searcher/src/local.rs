//! Local search: steepest-descent hill climbing, and beam search
//! over randomized restarts.
//!
//! Local search is for problems which have a cost landscape but no
//! goal test. Each descent repeatedly moves to the cheapest neighbor,
//! and stops at the first state none of whose neighbors is strictly
//! cheaper.

use std::cmp::Ordering;
use std::fmt::Debug;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::Cost;

/// A cost function over states, along with a way to pick random
/// starting points.
pub trait Landscape {
    type State: Debug + Clone;

    /// Cost of a state. Lower is better.
    fn cost(&self, state: &Self::State) -> Cost;

    /// Pick a random state to start a descent from.
    fn random_state<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::State;
}

/// Configuration for local search.
#[derive(Debug, Clone)]
pub struct LocalOptions {
    /// Stop a descent after this many moves, even if it is still
    /// improving.
    pub max_iterations: Option<usize>,

    /// Base seed for randomized restarts; restart `i` is seeded with
    /// `seed + i`.
    pub seed: u64,

    /// Run restarts on the rayon thread pool.
    pub parallel: bool,
}

impl Default for LocalOptions {
    fn default() -> Self {
        Self {
            max_iterations: None,
            seed: 0,
            parallel: true,
        }
    }
}

/// A state where descent stopped.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalOptimum<S> {
    pub state: S,
    pub cost: Cost,

    /// Number of moves taken to get here.
    pub steps: usize,
}

/// Hill-climbing over a [Landscape].
#[derive(Debug)]
pub struct LocalSearchEngine<'l, L> {
    landscape: &'l L,
    options: LocalOptions,
}

impl<'l, L> LocalSearchEngine<'l, L>
where
    L: Landscape,
{
    pub fn new(landscape: &'l L) -> Self {
        Self {
            landscape,
            options: LocalOptions::default(),
        }
    }

    pub fn with_options(mut self, options: LocalOptions) -> Self {
        self.options = options;
        self
    }

    /// Steepest descent from `state`.
    ///
    /// At each step every neighbor is costed, and the search moves to
    /// the cheapest one (the first, among equals) if it is strictly
    /// cheaper than the current state. Otherwise the current state is
    /// a local optimum and is returned.
    pub fn descend<N>(&self, state: L::State, neighbors: N) -> LocalOptimum<L::State>
    where
        N: Fn(&L::State) -> Vec<L::State>,
    {
        let mut state = state;
        let mut cost = self.landscape.cost(&state);
        let mut steps = 0;

        loop {
            if let Some(max) = self.options.max_iterations {
                if steps >= max {
                    break;
                }
            }

            let mut best: Option<(Cost, L::State)> = None;
            for neighbor in neighbors(&state) {
                let c = self.landscape.cost(&neighbor);
                if best.as_ref().map(|(b, _)| c < *b).unwrap_or(true) {
                    best = Some((c, neighbor));
                }
            }

            match best {
                Some((c, next)) if c < cost => {
                    trace!("descending to {:?} ({} -> {})", next, cost, c);
                    state = next;
                    cost = c;
                    steps += 1;
                }
                _ => break,
            }
        }

        LocalOptimum { state, cost, steps }
    }
}

impl<'l, L> LocalSearchEngine<'l, L>
where
    L: Landscape + Sync,
    L::State: Send,
{
    /// Descend from each of the given states, returning the local
    /// optimum reached from each, in the same order.
    pub fn descend_all<N>(&self, starts: Vec<L::State>, neighbors: N) -> Vec<LocalOptimum<L::State>>
    where
        N: Fn(&L::State) -> Vec<L::State> + Sync,
    {
        if self.options.parallel {
            starts
                .into_par_iter()
                .map(|start| self.descend(start, &neighbors))
                .collect()
        } else {
            starts
                .into_iter()
                .map(|start| self.descend(start, &neighbors))
                .collect()
        }
    }

    /// Descend from each of the given states, and keep the best
    /// local optimum. Ties go to the earliest start.
    pub fn beam_from<N>(&self, starts: Vec<L::State>, neighbors: N) -> Option<LocalOptimum<L::State>>
    where
        N: Fn(&L::State) -> Vec<L::State> + Sync,
    {
        let optima = self.descend_all(starts, neighbors);
        for (i, optimum) in optima.iter().enumerate() {
            debug!("restart {} settled at cost {}", i, optimum.cost);
        }

        optima
            .into_iter()
            .enumerate()
            .min_by(|(i, a), (j, b)| better(a, b).then(i.cmp(j)))
            .map(|(_, optimum)| optimum)
    }

    /// Beam search: `restarts` independent descents from random
    /// starting states, keeping the best local optimum found.
    ///
    /// Returns `None` only when `restarts` is zero.
    pub fn beam<N>(&self, neighbors: N, restarts: usize) -> Option<LocalOptimum<L::State>>
    where
        N: Fn(&L::State) -> Vec<L::State> + Sync,
    {
        let starts = (0..restarts)
            .map(|i| {
                let mut rng = StdRng::seed_from_u64(self.options.seed.wrapping_add(i as u64));
                self.landscape.random_state(&mut rng)
            })
            .collect();
        self.beam_from(starts, neighbors)
    }
}

fn better<S>(a: &LocalOptimum<S>, b: &LocalOptimum<S>) -> Ordering {
    a.cost.total_cmp(&b.cost)
}
