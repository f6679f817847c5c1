//! Core compute primitives.
//!
//! [`Matrix`] is the dense row-major storage every chain operation is built on.

mod matrix;

pub use matrix::Matrix;
