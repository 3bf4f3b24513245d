//! Core domain logic (independent of the command line)
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **xdg**: XDG directory handling
//! - **text**: Fence stripping, phrase extraction, tokenizing, stop words
//! - **document**: One markdown file and its index terms
//! - **aggregator**: Index generation across files
//! - **set_file**: Scoped scratch files
//! - **inputs**: File/glob argument expansion
//! - **fence_removal**: Fence-free copies of markdown files

pub mod aggregator;
pub mod config;
pub mod document;
pub mod error;
pub mod fence_removal;
pub mod inputs;
pub mod set_file;
pub mod text;
pub mod xdg;

// Re-export key types for convenience
pub use aggregator::{IndexBuilder, IndexOutput, IndexStats};
pub use config::Config;
pub use document::MarkdownDoc;
pub use error::{IndexError, Result};
pub use set_file::{ScopedFile, SetFile};
