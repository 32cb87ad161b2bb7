// SPDX-License-Identifier: MIT OR Apache-2.0

//! CLI argument parsing using clap

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// fnfind - Fuzzy function search for Python code
///
/// Indexes every function in a directory tree and ranks them by edit
/// distance to a signature-like query such as "is zipfile(filename)".
#[derive(Parser, Debug)]
#[command(name = "fnfind")]
#[command(
    author,
    version,
    about,
    long_about = None,
    after_help = "Quickstart:\n  fnfind search \"mainloop()\" ./stdlib\n  fnfind s \"is zipfile(filename)\" -m 5\n\nThe index is cached in functions.json and reused on every run.\nPass --reindex (or delete the file) after the code changes."
)]
pub struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Compact JSON output (no pretty formatting)
    #[arg(long, global = true)]
    pub compact: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank indexed functions against a signature query
    #[command(visible_aliases = ["s", "q"])]
    Search {
        /// Query written like a call, e.g. "is zipfile(filename)"
        query: String,

        /// Directory to index (defaults to current directory)
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,

        /// Maximum number of results
        #[arg(short = 'm', long = "limit", visible_alias = "max-results")]
        limit: Option<usize>,

        /// Directory name to exclude (repeatable)
        #[arg(short = 'x', long = "exclude", value_name = "DIR")]
        exclude: Vec<String>,

        /// Cache document location (default: functions.json)
        #[arg(long, value_name = "FILE")]
        cache: Option<PathBuf>,

        /// Delete the cache document and index again
        #[arg(long)]
        reindex: bool,

        /// Record absolute file paths when indexing
        #[arg(long)]
        absolute: bool,

        /// Prefix each result with its edit distance
        #[arg(long)]
        scores: bool,
    },

    /// Build the function index (or report the cached one)
    Index {
        /// Directory to index (defaults to current directory)
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,

        /// Directory name to exclude (repeatable)
        #[arg(short = 'x', long = "exclude", value_name = "DIR")]
        exclude: Vec<String>,

        /// Cache document location (default: functions.json)
        #[arg(long, value_name = "FILE")]
        cache: Option<PathBuf>,

        /// Delete the cache document and index again
        #[arg(short, long, visible_alias = "reindex")]
        force: bool,

        /// Record absolute file paths
        #[arg(long)]
        absolute: bool,
    },

    /// Print the canonical form used for comparison
    Normalize {
        /// Signature such as "is  zipfile ( filename)"
        signature: String,
    },
}
