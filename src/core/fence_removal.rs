//! Writes fence-free copies of markdown files.
//!
//! For `chapter.md` the copy is `chapter_de_fenced.md` in the same
//! directory. Only `.md` files are processed.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{IndexError, Result};
use crate::core::text::strip_code;

const SUFFIX: &str = "_de_fenced";

/// Path of the fence-free copy of `path`
pub fn de_fenced_path(path: &Path) -> Option<PathBuf> {
    let stem = path.file_stem()?.to_str()?;
    let ext = path.extension()?.to_str()?;
    Some(path.with_file_name(format!("{stem}{SUFFIX}.{ext}")))
}

/// Strip fenced code from each `.md` file and write the copies
///
/// Returns the paths written, in input order.
pub fn remove_fences_in_files<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for path in paths {
        let path = path.as_ref();

        if path.extension().and_then(|ext| ext.to_str()) != Some("md") {
            tracing::debug!("Skipping non-markdown file {:?}", path);
            continue;
        }

        let Some(target) = de_fenced_path(path) else {
            tracing::debug!("Skipping file with non-UTF-8 name {:?}", path);
            continue;
        };

        let markdown = fs::read_to_string(path).map_err(|e| IndexError::read(path, e))?;
        fs::write(&target, strip_code(&markdown)).map_err(|e| IndexError::write(&target, e))?;

        tracing::debug!("Wrote {:?}", target);
        written.push(target);
    }

    Ok(written)
}
