//! Reading documents and trees from files or stdin.

use crate::error::Error;
use crate::parser::Parser;
use crate::section::Tree;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Read the whole of `path`, or stdin when no path is given.
///
/// # Errors
///
/// Returns an error if the file or stream cannot be read as UTF-8 text.
pub fn read_source(path: Option<&Path>) -> Result<String, Error> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|source| Error::Io {
            path: Some(path.to_path_buf()),
            source,
        }),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| Error::Io { path: None, source })?;
            Ok(buf)
        }
    }
}

/// Feed each file into `parser` in turn, so repeated titles merge across files.
///
/// # Errors
///
/// Returns an error on the first file that cannot be read; files before it stay parsed.
pub fn parse_sources(parser: &mut Parser, paths: &[PathBuf]) -> Result<(), Error> {
    for path in paths {
        let text = read_source(Some(path))?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "parsing");
        parser.parse(&text);
    }
    Ok(())
}

/// Decode a complete tree from JSON.
///
/// # Errors
///
/// Returns an error if the JSON is malformed or any section or subsection lacks a field.
pub fn read_tree_json(json: &str) -> Result<Tree, Error> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
