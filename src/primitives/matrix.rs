//! Dense matrix type for 2D numeric data.

use crate::error::{MarkovError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::ops::{Index, IndexMut};

/// A dense matrix of `f64` values (row-major storage).
///
/// Element `(i, j)` lives at offset `i * cols + j` of the backing buffer,
/// and the buffer length always equals `rows * cols`.
///
/// # Examples
///
/// ```
/// use markov::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m.get(1, 2), 6.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MatrixRepr")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

/// Unchecked wire shape; converted through [`Matrix::from_vec`].
#[derive(Deserialize)]
struct MatrixRepr {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl TryFrom<MatrixRepr> for Matrix {
    type Error = MarkovError;

    fn try_from(repr: MatrixRepr) -> Result<Self> {
        Matrix::from_vec(repr.rows, repr.cols, repr.data)
    }
}

impl Matrix {
    /// Creates a zero-filled `rows x cols` matrix.
    ///
    /// Either dimension may be zero, which yields an empty buffer.
    ///
    /// # Errors
    ///
    /// Returns [`MarkovError::AllocationFailed`] if `rows * cols` overflows or
    /// the buffer cannot be allocated.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let len = rows
            .checked_mul(cols)
            .ok_or(MarkovError::AllocationFailed { rows, cols })?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| MarkovError::AllocationFailed { rows, cols })?;
        data.resize(len, 0.0);
        Ok(Self { rows, cols, data })
    }

    /// Creates an `n x n` identity matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MarkovError::AllocationFailed`] if the buffer cannot be allocated.
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::new(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        Ok(m)
    }

    /// Creates a new matrix from a row-major vector of data.
    ///
    /// # Errors
    ///
    /// Returns an error if data length doesn't match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(MarkovError::length_mismatch(rows, cols, data.len()));
        }
        Ok(Self { rows, cols, data })
    }

    /// Creates a matrix from row slices.
    ///
    /// ```
    /// use markov::primitives::Matrix;
    ///
    /// let m = Matrix::from_rows(&[&[0.9, 0.1], &[0.5, 0.5]]).expect("rows have equal length");
    /// assert_eq!(m.get(1, 0), 0.5);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the rows have differing lengths.
    pub fn from_rows(rows: &[&[f64]]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.len());
        let mut m = Self::new(rows.len(), cols)?;
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MarkovError::DimensionMismatch {
                    expected: format!("row {i} with {cols} columns"),
                    actual: format!("{} columns", row.len()),
                });
            }
            m.data[i * cols..(i + 1) * cols].copy_from_slice(row);
        }
        Ok(m)
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Returns true if rows == cols.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if the computed offset is outside the buffer. Indices must
    /// satisfy `row < rows` and `col < cols`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Sets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if the computed offset is outside the buffer.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    /// Returns a row as a slice.
    #[must_use]
    pub fn row(&self, row_idx: usize) -> &[f64] {
        let start = row_idx * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Iterates over the rows as slices. Yields `rows` empty slices when
    /// `cols == 0`.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.rows).map(move |i| self.row(i))
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Matrix-matrix multiplication `C = self * other`.
    ///
    /// Neither input is modified. Cost is O(rows x other.cols x cols).
    ///
    /// # Errors
    ///
    /// Returns an error if `self.cols != other.rows`, or if the result
    /// cannot be allocated.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(MarkovError::matmul_mismatch(self.shape(), other.shape()));
        }
        tracing::debug!(
            lhs = ?self.shape(),
            rhs = ?other.shape(),
            "matrix multiply"
        );

        let mut result = Self::new(self.rows, other.cols)?;
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.data[i * self.cols + k] * other.data[k * other.cols + j];
                }
                result.data[i * other.cols + j] = sum;
            }
        }
        Ok(result)
    }

    /// Returns true if both matrices have the same shape and every pair of
    /// elements differs by at most `tol`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= tol)
    }

    /// Writes an optional `"{label} ({rows}x{cols}):"` header, one line per
    /// row with each value as `{:8.4}` plus a space, then a blank line.
    ///
    /// # Errors
    ///
    /// Propagates write failures from `out`.
    pub fn write_labeled<W: io::Write>(&self, out: &mut W, label: Option<&str>) -> io::Result<()> {
        if let Some(label) = label {
            writeln!(out, "{label} ({}x{}):", self.rows, self.cols)?;
        }
        write!(out, "{self}")?;
        writeln!(out)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for value in row {
                write!(f, "{value:8.4} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.data[row * self.cols + col]
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod tests_matrix_contract;
