//! Dense row-major matrices and Markov-chain transition powers.
//!
//! # Quick Start
//!
//! ```
//! use markov::prelude::*;
//!
//! let a = Matrix::from_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]).unwrap();
//! let b = Matrix::from_rows(&[&[7.0, 8.0], &[9.0, 10.0], &[11.0, 12.0]]).unwrap();
//! let c = a.matmul(&b).unwrap();
//! assert_eq!(c.as_slice(), &[58.0, 64.0, 139.0, 154.0]);
//!
//! let m = Matrix::from_rows(&[&[0.9, 0.1], &[0.5, 0.5]]).unwrap();
//! assert!(is_chain(&m, 1e-9));
//! let m3 = power(&m, 3).unwrap();
//! assert!((m3.get(1, 1) - 0.22).abs() < 1e-12);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: The dense [`Matrix`](primitives::Matrix) type
//! - [`chain`]: Row-stochastic validation and transition powers
//! - [`error`]: Error type shared by every fallible operation

pub mod chain;
pub mod error;
pub mod prelude;
pub mod primitives;

pub use error::{MarkovError, Result};
