//! Command-line input resolution.
//!
//! Arguments are file paths or glob patterns. Patterns are expanded in
//! argument order; matches within one pattern are sorted. A path that
//! repeats is kept at its first position only.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::core::error::{IndexError, Result};

const GLOB_METACHARACTERS: [char; 3] = ['*', '?', '['];

/// Expand file and glob arguments into an ordered list of files
///
/// A literal path that does not exist is an error. A pattern that
/// matches nothing only logs a warning.
pub fn resolve_inputs<S: AsRef<str>>(args: &[S]) -> Result<Vec<PathBuf>> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for arg in args {
        let arg = arg.as_ref();

        for path in expand(arg)? {
            if seen.insert(path.clone()) {
                files.push(path);
            }
        }
    }

    tracing::debug!("Resolved {} argument(s) to {} file(s)", args.len(), files.len());
    Ok(files)
}

fn expand(arg: &str) -> Result<Vec<PathBuf>> {
    if !is_pattern(arg) {
        let path = PathBuf::from(arg);
        if !path.is_file() {
            return Err(IndexError::InvalidPath(format!(
                "'{arg}' does not exist or is not a file"
            )));
        }
        return Ok(vec![path]);
    }

    let entries = glob::glob(arg).map_err(|e| IndexError::InvalidPattern {
        pattern: arg.to_string(),
        message: e.msg.to_string(),
    })?;

    let mut matches = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => matches.push(path),
            Ok(_) => {}
            Err(e) => tracing::warn!("Skipping unreadable match for '{}': {}", arg, e),
        }
    }
    matches.sort();

    if matches.is_empty() {
        tracing::warn!("Pattern '{}' matched no files", arg);
    }

    Ok(matches)
}

fn is_pattern(arg: &str) -> bool {
    arg.contains(GLOB_METACHARACTERS)
}
