//! Markov-chain helpers built on top of [`Matrix`].
//!
//! A transition matrix `M` is row-stochastic: entry `(i, j)` is the
//! probability of moving from state `i` to state `j` in one step, every
//! entry is non-negative, and every row sums to 1. The `(i, j)` entry of
//! `M^k` is then the probability of reaching `j` from `i` in exactly `k`
//! steps.
//!
//! # Example
//!
//! ```
//! use markov::chain::{is_chain, power};
//! use markov::primitives::Matrix;
//!
//! let m = Matrix::from_rows(&[&[0.9, 0.1], &[0.5, 0.5]]).expect("valid rows");
//! assert!(is_chain(&m, 1e-9));
//!
//! let m2 = power(&m, 2).expect("square matrix, k >= 1");
//! assert!((m2.get(0, 0) - 0.86).abs() < 1e-12);
//! ```

mod config;

pub use config::{ChainConfig, DEFAULT_EPS};

use crate::error::{MarkovError, Result};
use crate::primitives::Matrix;

/// Checks that `m` is row-stochastic within `eps`, reporting the first
/// violation found.
///
/// Rows are scanned in order. Within a row every entry must be `>= -eps`;
/// after the row is summed, `|sum - 1| <= eps` must hold. Squareness is not
/// required.
///
/// # Errors
///
/// [`MarkovError::InvalidTolerance`] if `eps` is NaN, otherwise
/// [`MarkovError::NegativeEntry`] or [`MarkovError::RowSumOutOfTolerance`]
/// for the first offending row.
pub fn validate_chain(m: &Matrix, eps: f64) -> Result<()> {
    if eps.is_nan() {
        return Err(MarkovError::InvalidTolerance { eps });
    }
    for (row, values) in m.iter_rows().enumerate() {
        let mut sum = 0.0;
        for (col, &value) in values.iter().enumerate() {
            if value < -eps {
                tracing::debug!(row, col, value, eps, "negative transition probability");
                return Err(MarkovError::NegativeEntry { row, col, value });
            }
            sum += value;
        }
        // A NaN entry makes the sum NaN
        if sum.is_nan() || (sum - 1.0).abs() > eps {
            tracing::debug!(row, sum, eps, "row sum out of tolerance");
            return Err(MarkovError::RowSumOutOfTolerance { row, sum });
        }
    }
    Ok(())
}

/// Returns true if `m` is a valid Markov transition matrix within `eps`.
///
/// Tolerates tiny negative rounding noise down to `-eps` and row sums within
/// `eps` of 1.0. A matrix with no rows is vacuously valid. A NaN `eps`
/// accepts nothing.
#[must_use]
pub fn is_chain(m: &Matrix, eps: f64) -> bool {
    validate_chain(m, eps).is_ok()
}

/// Like [`is_chain`], but an absent matrix is never a chain.
#[must_use]
pub fn is_chain_opt(m: Option<&Matrix>, eps: f64) -> bool {
    m.is_some_and(|m| is_chain(m, eps))
}

/// Computes `M^k` by exponentiation by squaring.
///
/// Uses O(log k) multiplications, so O(n^3 log k) for an `n x n` matrix.
/// The input is never modified; `power(m, 1)` returns a fresh copy.
///
/// # Errors
///
/// - [`MarkovError::InvalidExponent`] if `k == 0`. `M^0` is not defined as
///   the identity here.
/// - [`MarkovError::NotSquare`] if `m` is not square.
/// - Any allocation failure from the intermediate products.
pub fn power(m: &Matrix, k: u32) -> Result<Matrix> {
    if k == 0 {
        return Err(MarkovError::InvalidExponent { k });
    }
    if !m.is_square() {
        let (rows, cols) = m.shape();
        return Err(MarkovError::NotSquare { rows, cols });
    }
    tracing::debug!(n = m.n_rows(), k, "matrix power");

    let mut result = Matrix::identity(m.n_rows())?;
    let mut base = m.clone();
    let mut exp = k;

    while exp > 0 {
        if exp & 1 == 1 {
            result = result.matmul(&base)?;
        }
        exp >>= 1;
        if exp > 0 {
            tracing::trace!(remaining = exp, "squaring base");
            base = base.matmul(&base)?;
        }
    }

    Ok(result)
}

/// Probability of moving from state `from` to state `to` in exactly
/// `steps` transitions, i.e. entry `(from, to)` of `M^steps`.
///
/// # Errors
///
/// [`MarkovError::StateOutOfRange`] for an unknown state, plus every error
/// of [`power`].
pub fn n_step_probability(m: &Matrix, from: usize, to: usize, steps: u32) -> Result<f64> {
    let mk = power(m, steps)?;
    let n_states = mk.n_rows();
    match [from, to].into_iter().find(|&s| s >= n_states) {
        Some(state) => Err(MarkovError::StateOutOfRange { state, n_states }),
        None => Ok(mk.get(from, to)),
    }
}


#[cfg(test)]
#[path = "tests_power_contract.rs"]
mod tests_power_contract;
