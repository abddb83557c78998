#![deny(clippy::all)]

//! Points, directions and maps on a 2D grid, and pathfinding across them.

pub mod coord2d;

/// Data type used for coordinates
pub type Position = i32;

pub use coord2d::map::Map;
pub use coord2d::path::{Path, PathError};
pub use coord2d::pathfinder::MapProblem;
pub use coord2d::{BoundingBox, Direction, ParsePointError, Point};
