//! Scoped files that clean up after a successful run.
//!
//! [`ScopedFile`] creates an empty file and deletes it when its scope
//! ends normally. When the scope ends with an error (an `Err` out of
//! [`ScopedFile::scope`], or a panic unwinding through the guard) the
//! file is left on disk so its last contents can be inspected.
//!
//! [`SetFile`] layers a string set on top: every mutation rewrites the
//! whole file, one item per line in insertion order.
//!
//! ```no_run
//! use markua_index::core::set_file::SetFile;
//! use markua_index::core::error::Result;
//!
//! fn collect() -> Result<usize> {
//!     SetFile::scope("seen.txt", |seen| -> Result<usize> {
//!         seen.add("x")?;
//!         seen.add("y")?;
//!         Ok(seen.len())
//!     })
//! }
//! ```

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::error::{IndexError, Result};

/// A file that is deleted when it goes out of scope without an error
#[derive(Debug)]
pub struct ScopedFile {
    path: PathBuf,
    armed: bool,
}

impl ScopedFile {
    /// Create (or truncate) an empty file at `path`
    ///
    /// A file left behind by an earlier failed scope is replaced, with
    /// a warning naming it.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.exists() {
            tracing::warn!("Replacing leftover {:?} from an earlier run", path);
        }
        fs::write(&path, "").map_err(|e| IndexError::write(&path, e))?;
        tracing::debug!("Created scoped file {:?}", path);
        Ok(Self { path, armed: true })
    }

    /// Run `f` with a scoped file at `path`
    ///
    /// The file is deleted if `f` returns `Ok` and kept if it returns
    /// `Err` or panics.
    pub fn scope<T, E, F>(path: impl Into<PathBuf>, f: F) -> std::result::Result<T, E>
    where
        F: FnOnce(&mut ScopedFile) -> std::result::Result<T, E>,
        E: From<IndexError>,
    {
        let mut file = Self::create(path)?;
        let outcome = f(&mut file);
        match outcome {
            Ok(value) => {
                file.close()?;
                Ok(value)
            }
            Err(e) => {
                let kept = file.persist();
                tracing::warn!("Scope failed, keeping {:?} for inspection", kept);
                Err(e)
            }
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the file now
    ///
    /// A file that was already removed is not an error.
    pub fn close(mut self) -> Result<()> {
        self.armed = false;
        remove_if_exists(&self.path)
    }

    /// Keep the file on disk and return its path
    pub fn persist(mut self) -> PathBuf {
        self.armed = false;
        std::mem::take(&mut self.path)
    }
}

impl Drop for ScopedFile {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }

        if std::thread::panicking() {
            tracing::warn!("Unwinding, keeping {:?} for inspection", self.path);
            return;
        }

        if let Err(e) = remove_if_exists(&self.path) {
            tracing::error!("Failed to delete {:?}: {}", self.path, e);
        }
    }
}

fn remove_if_exists(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => {
            tracing::debug!("Deleted scoped file {:?}", path);
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(IndexError::write(path, e)),
    }
}

/// A string set persisted to a [`ScopedFile`] after every change
#[derive(Debug)]
pub struct SetFile {
    file: ScopedFile,
    items: Vec<String>,
    index: HashSet<String>,
}

impl SetFile {
    /// Create an empty set backed by a new file at `path`
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self::wrap(ScopedFile::create(path)?))
    }

    /// Run `f` with a set file at `path`
    ///
    /// Same cleanup rules as [`ScopedFile::scope`].
    pub fn scope<T, E, F>(path: impl Into<PathBuf>, f: F) -> std::result::Result<T, E>
    where
        F: FnOnce(&mut SetFile) -> std::result::Result<T, E>,
        E: From<IndexError>,
    {
        let mut set = Self::open(path)?;
        match f(&mut set) {
            Ok(value) => {
                set.close()?;
                Ok(value)
            }
            Err(e) => {
                let kept = set.persist();
                tracing::warn!("Scope failed, keeping {:?} for inspection", kept);
                Err(e)
            }
        }
    }

    fn wrap(file: ScopedFile) -> Self {
        Self {
            file,
            items: Vec::new(),
            index: HashSet::new(),
        }
    }

    /// Insert `item` if absent and rewrite the file
    pub fn add(&mut self, item: impl Into<String>) -> Result<()> {
        self.insert(item.into());
        self.save()
    }

    /// Remove `item` if present and rewrite the file
    pub fn remove(&mut self, item: &str) -> Result<()> {
        if self.index.remove(item) {
            self.items.retain(|existing| existing != item);
        }
        self.save()
    }

    /// Insert every item of a collection, then rewrite the file once
    ///
    /// Accepts any iterable of strings (`Vec`, `HashSet`, `BTreeSet`,
    /// arrays, iterators). A bare string is not a collection of items
    /// and is rejected by the type checker.
    pub fn add_all<I, S>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for item in items {
            self.insert(item.into());
        }
        self.save()
    }

    /// Check whether `item` is in the set
    pub fn contains(&self, item: &str) -> bool {
        self.index.contains(item)
    }

    /// Items in insertion order
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Delete the backing file now
    pub fn close(self) -> Result<()> {
        self.file.close()
    }

    /// Keep the backing file on disk and return its path
    pub fn persist(self) -> PathBuf {
        self.file.persist()
    }

    fn insert(&mut self, item: String) {
        if self.index.insert(item.clone()) {
            self.items.push(item);
        }
    }

    fn save(&self) -> Result<()> {
        let contents: String = self.items.iter().map(|item| format!("{item}\n")).collect();
        fs::write(self.path(), contents).map_err(|e| IndexError::write(self.path(), e))
    }
}
