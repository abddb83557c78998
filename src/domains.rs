//! Concrete problems to search.
//!
//! Each domain has a `main` which reads its configuration, runs a
//! search, and prints what it found.

pub mod car_seating;
pub mod grid_world;
pub mod maze;
pub mod quartic;
pub mod sliding_puzzle;
pub mod word_ladder;
