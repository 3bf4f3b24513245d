//! Index generation across many documents.
//!
//! Coordinates the end-to-end workflow:
//! 1. Load each document (strip fences, find phrases)
//! 2. Merge phrases into one set and text into one corpus
//! 3. Tokenize the corpus once and sort the words
//! 4. Drop stop words from words and phrases
//! 5. Render and write the index file

use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::core::config::OutputConfig;
use crate::core::document::MarkdownDoc;
use crate::core::error::{IndexError, Result};
use crate::core::set_file::SetFile;
use crate::core::text::{sorted_unique_words, PhraseOptions, StopWords};

pub const PHRASES_HEADER: &str = "Italicized Phrases:";
pub const WORDS_HEADER: &str = "Index Words:";

/// The finished index: sorted phrases and words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexOutput {
    pub phrases: Vec<String>,
    pub words: Vec<String>,
}

impl IndexOutput {
    /// Render the index file contents
    ///
    /// The phrase section (and the blank line after it) only appears
    /// when there are phrases. The words header is always present.
    pub fn render(&self) -> String {
        let mut out = String::new();

        if !self.phrases.is_empty() {
            out.push_str(PHRASES_HEADER);
            out.push('\n');
            for phrase in &self.phrases {
                let _ = writeln!(out, "{phrase}");
            }
            out.push('\n');
        }

        out.push_str(WORDS_HEADER);
        out.push('\n');
        for word in &self.words {
            let _ = writeln!(out, "{word}");
        }

        out
    }

    /// Write the rendered index to `path`
    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render()).map_err(|e| IndexError::write(path, e))
    }

    /// Check if nothing was indexed
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty() && self.words.is_empty()
    }
}

/// Summary of a completed run
#[derive(Debug, Clone)]
pub struct IndexStats {
    pub files_processed: usize,
    pub phrases: usize,
    pub words: usize,
    pub output_path: PathBuf,
    pub duration_ms: u64,
}

/// Builds an index from a list of markdown files
pub struct IndexBuilder {
    stop_words: StopWords,
    phrase_options: PhraseOptions,
}

impl IndexBuilder {
    /// Create a new index builder
    ///
    /// # Arguments
    ///
    /// * `stop_words` - Terms removed from words and phrases
    /// * `phrase_options` - Which italic spans count as phrases
    pub fn new(stop_words: StopWords, phrase_options: PhraseOptions) -> Self {
        Self {
            stop_words,
            phrase_options,
        }
    }

    /// Build the index for `paths` in memory
    ///
    /// Fails on the first file that cannot be read.
    pub fn build<P: AsRef<Path>>(&self, paths: &[P]) -> Result<IndexOutput> {
        self.collect(paths, None)
    }

    /// Build the index for `paths` and write it under `output`
    ///
    /// Creates the output directory if needed. While documents are
    /// being read, the phrases found so far are kept in a scratch set
    /// file next to the index; it is removed on success and left behind
    /// if a document fails to load.
    pub fn write<P: AsRef<Path>>(&self, paths: &[P], output: &OutputConfig) -> Result<IndexStats> {
        let start = Instant::now();

        fs::create_dir_all(&output.dir).map_err(|e| IndexError::write(&output.dir, e))?;

        let index = SetFile::scope(output.partial_phrases_file(), |partial| -> Result<IndexOutput> {
            self.collect(paths, Some(partial))
        })?;

        let output_path = output.index_file();
        index.write_to(&output_path)?;

        let stats = IndexStats {
            files_processed: paths.len(),
            phrases: index.phrases.len(),
            words: index.words.len(),
            output_path,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        tracing::info!(
            "Indexed {} files: {} phrases, {} words -> {:?} in {}ms",
            stats.files_processed,
            stats.phrases,
            stats.words,
            stats.output_path,
            stats.duration_ms
        );

        Ok(stats)
    }

    fn collect<P: AsRef<Path>>(
        &self,
        paths: &[P],
        mut partial: Option<&mut SetFile>,
    ) -> Result<IndexOutput> {
        let mut all_phrases = BTreeSet::new();
        let mut corpus = String::new();

        for path in paths {
            let doc = MarkdownDoc::load(path, &self.stop_words, &self.phrase_options)?;

            tracing::debug!(
                "{:?}: {} phrases, {} unique words",
                doc.path(),
                doc.italicized_phrases().len(),
                doc.unique_words().len()
            );

            if let Some(partial) = partial.as_deref_mut() {
                partial.add_all(doc.italicized_phrases().iter().cloned())?;
            }

            all_phrases.extend(doc.italicized_phrases().iter().cloned());
            corpus.push_str(doc.codeless());
            corpus.push(' ');
        }

        // One tokenizer pass over the whole corpus, not a union of per-document sets
        let words = self.stop_words.filter(sorted_unique_words(&corpus));
        let phrases = self.stop_words.filter(all_phrases);

        Ok(IndexOutput { phrases, words })
    }
}
