// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types with helpful suggestions
//!
//! Every fallible library operation returns [`Result`]. Nothing here is
//! retried: callers see the first failure and the operation stops.

use std::path::PathBuf;

/// Top-level error enum for the fnfind library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A signature or query did not contain the `(` separating name and arguments.
    #[error(
        "Malformed signature: '{input}' has no opening parenthesis\n\n\
         Suggestion: write the query as a call, e.g. fnfind search \"is zipfile(filename)\""
    )]
    MalformedSignature { input: String },

    /// A source file is not valid Python. Fatal for a whole indexing run.
    #[error("Parse error in {}: invalid syntax at line {line}, column {column}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
    },

    #[error("Failed to load the Python grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Cache document {} is not a valid function list: {source}\n\n\
         Suggestion: delete it or run 'fnfind index --force' to rebuild it.",
        path.display()
    )]
    Cache {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Directory traversal failed: {0}")]
    Walk(#[from] ignore::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
