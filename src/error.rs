//! Error types for loading, computation, and persistence.
//!
//! Parse failures and I/O failures are distinct variants so callers can tell
//! a malformed link file apart from a filesystem problem. Computation itself
//! is infallible once a graph is loaded; output-writing failures never
//! invalidate in-memory results.

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, RankError>;

#[derive(Debug, Error)]
pub enum RankError {
    /// A token in the link file could not be parsed as an integer page id.
    /// The load is aborted; no partial graph is handed to the caller.
    #[error("line {line}: invalid page id {token:?}: {source}")]
    ParseToken {
        line: usize,
        token: String,
        source: ParseIntError,
    },

    /// A link-file line contained no tokens at all.
    #[error("line {line}: empty record")]
    EmptyRecord { line: usize },

    /// Reading input or writing output failed.
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
}

impl RankError {
    /// Attach a path to an I/O error, for use with `map_err`.
    pub fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { source, path }
    }
}
