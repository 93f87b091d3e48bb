//! Command-line argument handling for the `mgrep` binary.

use std::path::PathBuf;

use clap::Parser;

/// Search for a pattern in files, or in stdin if none are given.
#[derive(Debug, Parser)]
#[command(name = "mgrep", version, about)]
pub struct Cli {
    /// The pattern to search for.
    #[arg(short = 'E', long = "regexp", value_name = "PATTERN")]
    pub pattern: String,

    /// Descend into directories given as path arguments.
    #[arg(short = 'r', long = "recursive")]
    pub recursive: bool,

    /// Number of worker threads used to scan multiple files. Output order
    /// always matches input order regardless of this value.
    #[arg(short = 'j', long = "jobs", value_name = "N", default_value_t = 1)]
    pub jobs: usize,

    /// Files or directories to search. Reads stdin as a single stream of
    /// lines if empty.
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}
