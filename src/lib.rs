//! markua-index - Index term extraction for Markua manuscripts
//!
//! Reads a set of markdown chapters and produces a candidate list of
//! index entries: the italicized phrases and the unique words of the
//! prose, with fenced code removed and stop words filtered out.
//!
//! # Architecture
//!
//! - **core**: Domain logic
//!   - text pipeline (fences, phrases, tokenizer, stop words)
//!   - documents and index aggregation
//!   - scoped set files, config, errors, xdg
//!
//! - **cli**: clap adapter for the `markua-index` and
//!   `remove-fences` binaries (depends on core)

// Core domain logic
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{IndexError, Result};
pub use core::text::{PhraseOptions, StopWords};
pub use core::{IndexBuilder, IndexOutput, MarkdownDoc, SetFile};
