//! markov-demo - matrix multiplication and Markov chain walkthrough
//!
//! Usage:
//!   markov-demo                       # Run both demos
//!   markov-demo multiply              # C = A * B only
//!   markov-demo chain --power 5       # Validate M and print M^5
//!   markov-demo --json                # JSON lines instead of tables

use clap::Parser;
use markov_cli::{execute, init_logging, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    execute(&cli);
    ExitCode::SUCCESS
}
