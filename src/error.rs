//! Errors raised while reading documents or trees from outside the crate.
//!
//! Parsing and exporting never fail on their own; only the I/O around them does.

use std::io;
use std::path::{Path, PathBuf};

/// Failure to obtain text or a tree from a file or stream.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading a source failed.
    #[error("failed to read {}: {source}", source_name(.path.as_deref()))]
    Io {
        /// File being read, or `None` for stdin.
        path: Option<PathBuf>,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// Input was not valid JSON, or not a complete tree.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Input was valid JSON but not shaped like a tree.
    #[error("input is not a section tree")]
    InvalidTree,
}

fn source_name(path: Option<&Path>) -> String {
    path.map_or_else(|| "stdin".to_string(), |p| p.display().to_string())
}
