//! A single markdown manuscript and the index terms found in it.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{IndexError, Result};
use crate::core::text::{italicized_phrases, strip_code, unique_words, PhraseOptions, StopWords};

/// A loaded markdown document
///
/// All fields are computed once at construction.
#[derive(Debug, Clone)]
pub struct MarkdownDoc {
    path: PathBuf,
    original: String,
    codeless: String,
    italicized_phrases: BTreeSet<String>,
    unique_words: BTreeSet<String>,
    index_phrases: BTreeSet<String>,
    index_words: BTreeSet<String>,
}

impl MarkdownDoc {
    /// Read `path` and extract its index terms
    ///
    /// A missing or unreadable file is an error.
    pub fn load(
        path: impl AsRef<Path>,
        stop_words: &StopWords,
        options: &PhraseOptions,
    ) -> Result<Self> {
        let path = path.as_ref();
        let original = fs::read_to_string(path).map_err(|e| IndexError::read(path, e))?;
        Ok(Self::from_source(path, original, stop_words, options))
    }

    /// Build a document from text already in memory
    pub fn from_source(
        path: impl Into<PathBuf>,
        original: impl Into<String>,
        stop_words: &StopWords,
        options: &PhraseOptions,
    ) -> Self {
        let original = original.into();
        let codeless = strip_code(&original);
        let italicized_phrases: BTreeSet<String> =
            italicized_phrases(&codeless, options).into_iter().collect();
        let unique_words = unique_words(&codeless);

        let index_phrases = stop_words
            .filter(italicized_phrases.iter().cloned())
            .into_iter()
            .collect();
        let index_words = stop_words
            .filter(unique_words.iter().cloned())
            .into_iter()
            .collect();

        Self {
            path: path.into(),
            original,
            codeless,
            italicized_phrases,
            unique_words,
            index_phrases,
            index_words,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The raw file contents
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The contents with fenced code blocks removed
    pub fn codeless(&self) -> &str {
        &self.codeless
    }

    pub fn italicized_phrases(&self) -> &BTreeSet<String> {
        &self.italicized_phrases
    }

    pub fn unique_words(&self) -> &BTreeSet<String> {
        &self.unique_words
    }

    /// Italicized phrases that are not stop words
    pub fn index_phrases(&self) -> &BTreeSet<String> {
        &self.index_phrases
    }

    /// Unique words that are not stop words
    pub fn index_words(&self) -> &BTreeSet<String> {
        &self.index_words
    }
}
