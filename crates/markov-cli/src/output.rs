//! Output formatting utilities
//!
//! Matrix dumps and verdicts go to stdout; errors go to stderr.

use crate::error::Result;
use colored::Colorize;
use markov::primitives::Matrix;
use serde::Serialize;
use std::io::{self, Write};

/// How demo results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputMode {
    /// Emit JSON lines instead of fixed-width tables
    pub json: bool,
    /// Skip section headers
    pub quiet: bool,
}

#[derive(Serialize)]
struct LabeledMatrix<'a> {
    label: &'a str,
    #[serde(flatten)]
    matrix: &'a Matrix,
}

#[derive(Serialize)]
struct ChainVerdict {
    eps: f64,
    is_chain: bool,
}

/// Print a section header
pub(crate) fn section(mode: OutputMode, title: &str) -> Result<()> {
    let mut out = io::stdout().lock();
    write_section(&mut out, mode, title)
}

pub(crate) fn write_section<W: Write>(out: &mut W, mode: OutputMode, title: &str) -> Result<()> {
    if !(mode.quiet || mode.json) {
        writeln!(out, "{}\n", format!("=== {title} ===").cyan().bold())?;
    }
    Ok(())
}

/// Print a labeled matrix
pub(crate) fn matrix(mode: OutputMode, label: &str, m: &Matrix) -> Result<()> {
    let mut out = io::stdout().lock();
    write_matrix(&mut out, mode, label, m)
}

pub(crate) fn write_matrix<W: Write>(
    out: &mut W,
    mode: OutputMode,
    label: &str,
    m: &Matrix,
) -> Result<()> {
    if mode.json {
        serde_json::to_writer(&mut *out, &LabeledMatrix { label, matrix: m })?;
        writeln!(out)?;
    } else {
        m.write_labeled(out, Some(label))?;
    }
    Ok(())
}

/// Print the yes/no Markov validity line
pub(crate) fn chain_verdict(mode: OutputMode, eps: f64, is_chain: bool) -> Result<()> {
    let mut out = io::stdout().lock();
    write_chain_verdict(&mut out, mode, eps, is_chain)
}

pub(crate) fn write_chain_verdict<W: Write>(
    out: &mut W,
    mode: OutputMode,
    eps: f64,
    is_chain: bool,
) -> Result<()> {
    if mode.json {
        serde_json::to_writer(&mut *out, &ChainVerdict { eps, is_chain })?;
        writeln!(out)?;
    } else {
        let answer = if is_chain { "yes" } else { "no" };
        writeln!(out, "Is M a Markov chain (eps = {eps:.1e})? {answer}\n")?;
    }
    Ok(())
}

/// Print an error message. A failed write to stderr is dropped.
pub(crate) fn error(msg: &str) {
    let _ = writeln!(io::stderr().lock(), "{} {}", "error:".red().bold(), msg);
}
