//! markov-cli library
//!
//! Demo driver for matrix multiplication and Markov-chain powers.
//! Exports CLI structures for testing and reuse.

use clap::{Parser, Subcommand};
use markov::chain::{ChainConfig, DEFAULT_EPS};
use tracing_subscriber::EnvFilter;

mod commands;
pub mod error;
mod output;

pub use error::CliError;
pub use output::OutputMode;

/// markov-demo - matrix multiplication and Markov chain walkthrough
///
/// With no subcommand, runs the multiplication demo and then the Markov
/// chain demo. A failing demo reports to stderr without stopping the other.
#[derive(Parser, Debug)]
#[command(name = "markov-demo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Tolerance for negative entries and row sums
    #[arg(long, global = true, default_value_t = DEFAULT_EPS)]
    pub eps: f64,

    /// Power of M to print (repeatable; defaults to 2 and 3)
    #[arg(long = "power", value_name = "K", global = true)]
    pub powers: Vec<u32>,

    /// Output as JSON lines
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (no section headers)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Multiply A (2x3) by B (3x2) and print all three
    Multiply,

    /// Validate a 2-state transition matrix and print its powers
    Chain,
}

impl Cli {
    /// Chain configuration assembled from the flags.
    #[must_use]
    pub fn chain_config(&self) -> ChainConfig {
        ChainConfig::new()
            .with_eps(self.eps)
            .with_powers(self.powers.clone())
    }

    /// Rendering options assembled from the flags.
    #[must_use]
    pub fn output_mode(&self) -> OutputMode {
        OutputMode {
            json: self.json,
            quiet: self.quiet,
        }
    }
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the default
/// level (`warn`, or `debug` with `--verbose`).
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // Keeps any subscriber that is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Run the selected demos. Demo failures are reported, never propagated.
pub fn execute(cli: &Cli) {
    let mode = cli.output_mode();
    let config = cli.chain_config();
    tracing::debug!(?config, ?mode, "starting demos");

    let run_multiply = matches!(cli.command, None | Some(Commands::Multiply));
    let run_chain = matches!(cli.command, None | Some(Commands::Chain));

    if run_multiply {
        report(output::section(mode, "Lab 8: Matrix Multiplication Demo"));
        report(commands::multiply::run(mode));
    }
    if run_chain {
        report(output::section(mode, "Lab 8: Markov Chain Demo"));
        report(commands::chain::run(mode, &config));
    }
}

fn report(result: error::Result<()>) {
    if let Err(e) = result {
        tracing::error!(error = %e, "demo step failed");
        output::error(&e.to_string());
    }
}
