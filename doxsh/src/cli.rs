use clap::Parser;
use std::path::PathBuf;

/// Interactive shell for a propositional belief revision agent
///
/// Beliefs are propositional formulas with a positive priority;
/// the shell answers entailment queries by resolution and
/// revises the belief set by priority-weighted contraction.
///
/// Set the environment variable "LOG" to "info", "debug", or "trace"
/// to obtain an increasingly detailed log.
#[derive(Parser)]
pub struct Cli {
    /// Write the final belief state in JSON format to given file
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Path of a command script to run instead of reading from standard input
    ///
    /// The script contains one shell command per line;
    /// empty lines and lines starting with '#' are skipped.
    pub script: Option<PathBuf>,
}
