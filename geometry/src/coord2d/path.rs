//! Path data structures
//!
//! A path is a sequence of adjacent steps in a 2D geometry.

use std::convert::TryFrom;
use std::ops::Deref;

use searcher::SearchNode;
use thiserror::Error;

use super::{Direction, Point};

/// Error returned for invalid paths
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("A path must contain at least one point")]
    Empty,

    /// A new step added to this path was not adjecent to the
    /// previous step.
    #[error("{0} is not adjacent to the end of the path {1}")]
    NotAdjacentSequence(Point, Point),
}

/// A sequence of steps in a 2D geometry.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Path {
    steps: Vec<Point>,
}

impl TryFrom<Vec<Point>> for Path {
    type Error = PathError;

    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        if points.is_empty() {
            return Err(PathError::Empty);
        }
        for pair in points.windows(2) {
            if !pair[0].is_adjacent(&pair[1]) {
                return Err(PathError::NotAdjacentSequence(pair[1], pair[0]));
            }
        }
        Ok(Self { steps: points })
    }
}

impl TryFrom<SearchNode<Point>> for Path {
    type Error = PathError;

    fn try_from(node: SearchNode<Point>) -> Result<Self, Self::Error> {
        Self::try_from(node.into_path())
    }
}

impl Path {
    /// Where this path started
    pub fn origin(&self) -> &Point {
        &self.steps[0]
    }

    /// Where this path ends
    pub fn destination(&self) -> &Point {
        &self.steps[self.steps.len() - 1]
    }

    /// How many steps this path takes.
    pub fn distance(&self) -> usize {
        self.steps.len() - 1
    }

    /// The direction of each step along the path.
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.steps
            .windows(2)
            .filter_map(|pair| pair[0].direction(pair[1]))
    }
}

impl Deref for Path {
    type Target = [Point];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}
