//! Matrix multiplication demo: C = A * B for A (2x3) and B (3x2).

use crate::error::{CliError, Result};
use crate::output::{self, OutputMode};
use markov::primitives::Matrix;

const A_ROWS: [&[f64]; 2] = [&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]];
const B_ROWS: [&[f64]; 3] = [&[7.0, 8.0], &[9.0, 10.0], &[11.0, 12.0]];

const ALLOC_FAILED: &str = "Failed to allocate matrices A or B";

pub(crate) fn run(mode: OutputMode) -> Result<()> {
    let a = Matrix::from_rows(&A_ROWS).map_err(CliError::during(ALLOC_FAILED))?;
    let b = Matrix::from_rows(&B_ROWS).map_err(CliError::during(ALLOC_FAILED))?;

    output::matrix(mode, "A", &a)?;
    output::matrix(mode, "B", &b)?;

    let c = a
        .matmul(&b)
        .map_err(CliError::during("Failed to multiply A and B"))?;
    tracing::info!(shape = ?c.shape(), "computed C = A * B");

    output::matrix(mode, "C = A * B", &c)
}
