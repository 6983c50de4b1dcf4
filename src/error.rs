//! Crate-wide error type.
//!
//! Precondition failures (degenerate instances, malformed matrices, bad
//! configurations) are reported before any search work starts; a search
//! that has begun only ever terminates through its budget or convergence,
//! never through an error.

use thiserror::Error;

/// Errors reported by instance construction, configuration validation,
/// and the search runners.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The instance has fewer than two facilities, so the swap
    /// neighborhood is empty and no move-based search is defined.
    #[error("instance has {n} facilities; at least 2 are required for swap-based search")]
    DegenerateInstance {
        /// Number of facilities in the offending instance.
        n: usize,
    },

    /// A matrix row does not match the declared dimension.
    #[error("{matrix} matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        /// Which matrix ("flow" or "distance").
        matrix: &'static str,
        /// Offending row index.
        row: usize,
        /// Entries found in that row.
        len: usize,
        /// Entries expected per row.
        expected: usize,
    },

    /// The flow and distance matrices have different dimensions.
    #[error("flow matrix is {flows}x{flows} but distance matrix is {distances}x{distances}")]
    DimensionMismatch {
        /// Dimension of the flow matrix.
        flows: usize,
        /// Dimension of the distance matrix.
        distances: usize,
    },

    /// A sequence offered as a permutation is not a bijection over `0..n`.
    #[error("invalid permutation: {0}")]
    InvalidPermutation(String),

    /// A strategy configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading an instance file failed.
    #[error("failed to read instance: {0}")]
    Io(#[from] std::io::Error),

    /// An instance file was readable but not parseable.
    #[error("malformed instance data: {0}")]
    Parse(String),
}
