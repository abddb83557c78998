use thiserror::Error;

/// Error produced when a search fails.
///
/// Running out of states to explore is not an error: a search which
/// exhausts its frontier returns [crate::Outcome::Exhausted] instead.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Contract violation: {0}")]
    ContractViolation(#[from] ContractViolation),

    #[error("State {0} already has a live frontier entry")]
    AlreadyQueued(String),

    #[error("Step limit exhausted after {0} steps")]
    StepLimitExhausted(usize),
}

/// A state space broke one of the promises the engine depends on.
///
/// States are recorded by their `Debug` representation, so that
/// errors do not need to be generic over the state type.
#[derive(Debug, Error, PartialEq)]
pub enum ContractViolation {
    #[error("negative step cost {cost} to reach {state}")]
    NegativeStepCost { state: String, cost: f64 },

    #[error("non-finite step cost to reach {state}")]
    NonFiniteCost { state: String },

    #[error("non-finite heuristic for {state}")]
    NonFiniteHeuristic { state: String },

    #[error("{state} lists itself as a successor")]
    SelfLoop { state: String },
}

/// Error produced by the optional `draw` hook of a state space.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Drawing is not supported by this domain")]
    Unsupported,

    #[error("Drawing failed: {0}")]
    Failed(String),
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
