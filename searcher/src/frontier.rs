//! The open list: a priority queue of search nodes with decrease-key.
//!
//! Nodes live in an arena of slots. The heap only holds tickets which
//! point into the arena, and an index maps each queued state to its
//! live slot. Replacing a queued node retires its slot (a tombstone)
//! rather than editing the heap; tombstones are skipped lazily on pop.

use std::cmp::{Ord, Ordering, PartialOrd};
use std::collections::{BinaryHeap, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

use crate::errors::{Result, SearchError};
use crate::node::SearchNode;
use crate::Cost;

/// Heap entry pointing at a slot in the arena.
///
/// Slots are handed out in insertion order, so the slot number
/// doubles as the tie-breaker between equal priorities.
#[derive(Debug, Clone, Copy)]
struct Ticket {
    priority: Cost,
    slot: usize,
}

impl PartialEq for Ticket {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ticket {}

impl Ord for Ticket {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then(self.slot.cmp(&other.slot))
            .reverse()
    }
}

impl PartialOrd for Ticket {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, Copy)]
struct Live {
    slot: usize,
    priority: Cost,
}

/// Priority queue of search nodes, keyed by the state at the end of
/// each node's path.
///
/// At most one live entry exists per state. Lower priorities are
/// popped first, and entries with equal priority come out in the order
/// they were inserted.
pub struct Frontier<S, P> {
    slots: Vec<Option<SearchNode<S>>>,
    heap: BinaryHeap<Ticket>,
    index: HashMap<S, Live>,
    priority: P,
}

impl<S, P> Frontier<S, P>
where
    S: Debug + Clone + Eq + Hash,
    P: Fn(&SearchNode<S>) -> Cost,
{
    /// Create an empty frontier which ranks nodes with `priority`.
    pub fn new(priority: P) -> Self {
        Self {
            slots: Vec::new(),
            heap: BinaryHeap::new(),
            index: HashMap::new(),
            priority,
        }
    }

    fn insert(&mut self, node: SearchNode<S>, priority: Cost) {
        let slot = self.slots.len();
        self.index
            .insert(node.state().clone(), Live { slot, priority });
        self.slots.push(Some(node));
        self.heap.push(Ticket { priority, slot });
    }

    /// Add a node for a state which is not yet queued.
    ///
    /// Fails with [SearchError::AlreadyQueued] when the state already
    /// has a live entry; use [Frontier::try_improve] for that case.
    pub fn push(&mut self, node: SearchNode<S>) -> Result<()> {
        if self.index.contains_key(node.state()) {
            return Err(SearchError::AlreadyQueued(format!("{:?}", node.state())));
        }
        let priority = (self.priority)(&node);
        self.insert(node, priority);
        Ok(())
    }

    /// Replace the queued entry for this node's state, if the new node
    /// has a strictly better (lower) priority.
    ///
    /// Returns whether the node was accepted. States which are not
    /// queued are left alone.
    pub fn try_improve(&mut self, node: SearchNode<S>) -> bool {
        let priority = (self.priority)(&node);
        let live = match self.index.get(node.state()) {
            Some(live) if priority < live.priority => *live,
            _ => return false,
        };

        self.slots[live.slot] = None;
        self.insert(node, priority);
        true
    }

    /// Remove and return the live node with the lowest priority.
    pub fn pop_min(&mut self) -> Option<SearchNode<S>> {
        while let Some(ticket) = self.heap.pop() {
            if let Some(node) = self.slots[ticket.slot].take() {
                self.index.remove(node.state());
                // Only tombstones remain, if anything.
                if self.index.is_empty() {
                    self.heap.clear();
                    self.slots.clear();
                }
                return Some(node);
            }
        }
        None
    }

    /// Is there a live entry for this state?
    pub fn contains(&self, state: &S) -> bool {
        self.index.contains_key(state)
    }

    /// Priority of the live entry for this state.
    pub fn priority_of(&self, state: &S) -> Option<Cost> {
        self.index.get(state).map(|live| live.priority)
    }

    /// Compute the priority this frontier would assign to a node.
    pub fn rank(&self, node: &SearchNode<S>) -> Cost {
        (self.priority)(node)
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of retired entries still waiting in the heap.
    ///
    /// Retired and popped slots stay in the arena until the frontier
    /// drains, so its size tracks every insertion made since it was
    /// last empty.
    pub fn tombstones(&self) -> usize {
        self.heap.len() - self.index.len()
    }
}

impl<S, P> Debug for Frontier<S, P>
where
    S: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frontier")
            .field("live", &self.index.len())
            .field("heap", &self.heap.len())
            .finish()
    }
}
