// Error type for the vision generator.
//
// Most odd inputs are not errors here: unknown concept names describe
// themselves with a fallback string, zero-weight rows become uniform, and a
// sampling draw that outruns the rounded cumulative sum lands on the first
// concept of the row. What remains is eigensolver failure, caller bugs
// (walking from a state the matrix does not know, malformed hand-built
// matrices) and configuration loading.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, VisionError>;

#[derive(Debug, Error)]
pub enum VisionError {
    /// The symmetric eigensolver did not converge.
    #[error("eigendecomposition did not converge within {max_iterations} iterations")]
    EigenSolver { max_iterations: usize },

    /// A state was requested that the transition matrix does not contain.
    #[error("unknown concept '{0}'")]
    UnknownConcept(String),

    /// The concept set handed to a transition matrix is unusable.
    #[error("invalid concept set: {0}")]
    InvalidConcepts(String),

    /// Explicit probability rows failed validation.
    #[error("invalid transition matrix: {0}")]
    InvalidMatrix(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}
