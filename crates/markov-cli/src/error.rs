//! Error types for markov-cli

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub enum CliError {
    /// Matrix or chain operation failed
    #[error(transparent)]
    Markov(#[from] markov::MarkovError),

    /// Writing to stdout failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A demo step failed; carries the step description and its cause
    #[error("{step}: {source}")]
    Step {
        /// What the demo was doing
        step: &'static str,
        /// Underlying failure
        source: Box<CliError>,
    },
}

impl CliError {
    /// Attach the description of the demo step that failed.
    pub(crate) fn during<E: Into<CliError>>(step: &'static str) -> impl FnOnce(E) -> CliError {
        move |e| CliError::Step {
            step,
            source: Box::new(e.into()),
        }
    }
}
