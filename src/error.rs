//! Error types for matrix and Markov-chain operations.
//!
//! Every fallible operation in this crate returns [`Result`], so callers
//! check failures immediately and propagate them with `?`.

use std::fmt;

/// Main error type for matrix and Markov-chain operations.
///
/// # Examples
///
/// ```
/// use markov::error::MarkovError;
///
/// let err = MarkovError::DimensionMismatch {
///     expected: "2x3 * 3xN".to_string(),
///     actual: "2x3 * 2x2".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum MarkovError {
    /// The element buffer for a `rows x cols` matrix could not be allocated.
    AllocationFailed {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },

    /// Matrix dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Operation requires a square matrix.
    NotSquare {
        /// Row count of the offending matrix
        rows: usize,
        /// Column count of the offending matrix
        cols: usize,
    },

    /// Exponent must be at least 1.
    InvalidExponent {
        /// Exponent provided
        k: u32,
    },

    /// The chain tolerance is not a number.
    InvalidTolerance {
        /// Tolerance provided
        eps: f64,
    },

    /// A transition probability is negative beyond the tolerance.
    NegativeEntry {
        /// Row of the entry
        row: usize,
        /// Column of the entry
        col: usize,
        /// Offending value
        value: f64,
    },

    /// A row of a transition matrix does not sum to 1 within the tolerance.
    RowSumOutOfTolerance {
        /// Offending row
        row: usize,
        /// Computed row sum
        sum: f64,
    },

    /// A state index is outside the chain.
    StateOutOfRange {
        /// Requested state
        state: usize,
        /// Number of states in the chain
        n_states: usize,
    },
}

impl fmt::Display for MarkovError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkovError::AllocationFailed { rows, cols } => {
                write!(f, "Failed to allocate a {rows}x{cols} matrix")
            }
            MarkovError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Matrix dimension mismatch: expected {expected}, got {actual}"
                )
            }
            MarkovError::NotSquare { rows, cols } => {
                write!(f, "Matrix must be square, got {rows}x{cols}")
            }
            MarkovError::InvalidExponent { k } => {
                write!(f, "Invalid exponent: k = {k}, expected k >= 1")
            }
            MarkovError::InvalidTolerance { eps } => {
                write!(f, "Invalid tolerance: eps = {eps}")
            }
            MarkovError::NegativeEntry { row, col, value } => {
                write!(f, "Negative transition probability at ({row}, {col}): {value}")
            }
            MarkovError::RowSumOutOfTolerance { row, sum } => {
                write!(f, "Row {row} sums to {sum}, expected 1")
            }
            MarkovError::StateOutOfRange { state, n_states } => {
                write!(f, "State {state} out of range for a {n_states}-state chain")
            }
        }
    }
}

impl std::error::Error for MarkovError {}

impl MarkovError {
    /// Create a dimension mismatch error for a product `lhs * rhs`.
    #[must_use]
    pub fn matmul_mismatch(lhs: (usize, usize), rhs: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            expected: format!("{}x{} * {}xN", lhs.0, lhs.1, lhs.1),
            actual: format!("{}x{} * {}x{}", lhs.0, lhs.1, rhs.0, rhs.1),
        }
    }

    /// Create a dimension mismatch error for a data buffer of the wrong length.
    #[must_use]
    pub fn length_mismatch(rows: usize, cols: usize, len: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{rows}x{cols} = {} elements", rows.saturating_mul(cols)),
            actual: format!("{len} elements"),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MarkovError>;
