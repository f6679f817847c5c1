//! Tolerance and power configuration for chain analysis.

use serde::{Deserialize, Serialize};

/// Default tolerance for negative entries and row sums.
pub const DEFAULT_EPS: f64 = 1e-9;

/// Configuration for validating a transition matrix and choosing which
/// powers to compute.
///
/// # Example
///
/// ```
/// use markov::chain::ChainConfig;
///
/// let config = ChainConfig::default().with_eps(1e-6).with_powers(vec![2, 4]);
/// assert_eq!(config.eps, 1e-6);
/// assert_eq!(config.powers, vec![2, 4]);
/// ```
///
/// Deserialization applies the same rules as the builders: missing fields
/// take their defaults, `eps` is clamped, and an empty `powers` list is
/// ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ChainConfigRepr")]
pub struct ChainConfig {
    /// Allowed slack for negative entries and for `|row_sum - 1|`.
    pub eps: f64,
    /// Exponents `k` for which `M^k` is computed.
    pub powers: Vec<u32>,
}

/// Wire shape; converted through the `with_*` builders.
#[derive(Deserialize)]
struct ChainConfigRepr {
    eps: Option<f64>,
    powers: Option<Vec<u32>>,
}

impl From<ChainConfigRepr> for ChainConfig {
    fn from(repr: ChainConfigRepr) -> Self {
        let config = Self::new().with_powers(repr.powers.unwrap_or_default());
        match repr.eps {
            Some(eps) => config.with_eps(eps),
            None => config,
        }
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            eps: DEFAULT_EPS,
            powers: vec![2, 3],
        }
    }
}

impl ChainConfig {
    /// Create a configuration with the default tolerance and powers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tolerance. Negative and NaN values are clamped to zero.
    #[must_use]
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps.max(0.0);
        self
    }

    /// Set the powers to compute. An empty list keeps the defaults.
    #[must_use]
    pub fn with_powers(mut self, powers: Vec<u32>) -> Self {
        if !powers.is_empty() {
            self.powers = powers;
        }
        self
    }
}
