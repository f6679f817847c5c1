//! Demo commands. Each one builds its matrices, runs, and prints.

pub(crate) mod chain;
pub(crate) mod multiply;
