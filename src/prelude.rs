//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use markov::prelude::*;
//! ```

pub use crate::chain::{is_chain, n_step_probability, power, validate_chain, ChainConfig};
pub use crate::error::MarkovError;
pub use crate::primitives::Matrix;
