//! Markov chain demo: validate a 2-state transition matrix and print its
//! powers.

use crate::error::{CliError, Result};
use crate::output::{self, OutputMode};
use markov::chain::{self, ChainConfig};
use markov::primitives::Matrix;

/// State 0 stays with 0.9, moves with 0.1; state 1 splits evenly.
const TRANSITIONS: [&[f64]; 2] = [&[0.9, 0.1], &[0.5, 0.5]];

pub(crate) fn run(mode: OutputMode, config: &ChainConfig) -> Result<()> {
    let m = Matrix::from_rows(&TRANSITIONS)
        .map_err(CliError::during("Failed to allocate Markov matrix M"))?;

    output::matrix(mode, "Markov chain M", &m)?;

    let verdict = chain::validate_chain(&m, config.eps);
    if let Err(reason) = &verdict {
        tracing::warn!(%reason, "M is not a Markov chain");
    }
    output::chain_verdict(mode, config.eps, verdict.is_ok())?;

    // All powers are computed before any is printed
    let powers = config
        .powers
        .iter()
        .map(|&k| chain::power(&m, k).map(|mk| (k, mk)))
        .collect::<markov::Result<Vec<_>>>()
        .map_err(CliError::during("Failed to compute powers of M"))?;

    for (k, mk) in &powers {
        output::matrix(mode, &format!("M^{k}"), mk)?;
    }
    Ok(())
}
