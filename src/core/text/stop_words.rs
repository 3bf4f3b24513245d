//! Stop-word dictionaries.
//!
//! A dictionary is plain UTF-8 text with one term per line. Lines that
//! begin with `#` are comments; an indented `#` is part of a term. Terms
//! are trimmed and lowercased; matching against candidates is
//! case-insensitive while the candidates keep their original casing.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::config::DictionaryConfig;
use crate::core::error::{IndexError, Result};

/// English stop words shipped with the binary (NLTK list)
const BUILTIN_STOP_WORDS: &str = include_str!("../../../data/nltk_stop_words.txt");

/// Union of one or more stop-word dictionaries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// An empty dictionary (filters nothing)
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in English list
    pub fn builtin() -> Self {
        Self::from_text(BUILTIN_STOP_WORDS)
    }

    /// Parse dictionary text
    pub fn from_text(text: &str) -> Self {
        let mut stop_words = Self::new();
        stop_words.extend_from_text(text);
        stop_words
    }

    /// Build from literal terms (lowercased, no comment handling)
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Load a single dictionary file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut stop_words = Self::new();
        stop_words.load_file(path.as_ref())?;
        Ok(stop_words)
    }

    /// Load every `*.txt` file directly inside `dir`
    ///
    /// Files are read in name order. Subdirectories are not searched.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let mut stop_words = Self::new();
        for file in dictionary_files(dir.as_ref())? {
            stop_words.load_file(&file)?;
        }
        Ok(stop_words)
    }

    /// Assemble the dictionaries described by the configuration
    ///
    /// A configured directory that does not exist is skipped with a
    /// warning rather than treated as an error.
    pub fn from_config(config: &DictionaryConfig) -> Result<Self> {
        let mut stop_words = if config.builtin {
            Self::builtin()
        } else {
            Self::new()
        };

        if config.dir.is_dir() {
            stop_words.merge(Self::from_dir(&config.dir)?);
        } else {
            tracing::warn!(
                "Dictionary directory {:?} not found, using {} stop words",
                config.dir,
                stop_words.len()
            );
        }

        tracing::debug!("Loaded {} stop words", stop_words.len());
        Ok(stop_words)
    }

    /// Add the terms of another dictionary to this one
    pub fn merge(&mut self, other: StopWords) {
        self.words.extend(other.words);
    }

    /// Check whether `word` is a stop word (case-insensitive)
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Keep the candidates that are not stop words, in input order
    pub fn filter<I, S>(&self, candidates: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        candidates
            .into_iter()
            .map(Into::into)
            .filter(|candidate| !self.is_stop_word(candidate))
            .collect()
    }

    /// Number of distinct stop words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn load_file(&mut self, path: &Path) -> Result<()> {
        let text = fs::read_to_string(path).map_err(|e| IndexError::read(path, e))?;
        let before = self.words.len();
        self.extend_from_text(&text);
        tracing::debug!(
            "Dictionary {:?}: {} new stop words",
            path,
            self.words.len() - before
        );
        Ok(())
    }

    fn extend_from_text(&mut self, text: &str) {
        self.words.extend(
            text.lines()
                .filter(|line| !line.starts_with('#'))
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_lowercase),
        );
    }
}

fn dictionary_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            IndexError::InvalidPath(format!("Cannot list dictionaries in {}: {e}", dir.display()))
        })?;

        let path = entry.path();
        let is_txt = path.extension().and_then(|ext| ext.to_str()) == Some("txt");
        if entry.file_type().is_file() && is_txt {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}
