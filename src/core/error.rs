//! Error types and error handling for markua-index.
//!
//! This module defines the error type used throughout the crate.
//! Presentation (colored messages, exit codes) is handled by the
//! CLI adapter.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for markua-index operations
pub type Result<T> = std::result::Result<T, IndexError>;

/// Main error type for markua-index
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Failed to read '{}': {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{}': {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl IndexError {
    /// Build a `ReadFailed` error for `path`
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IndexError::ReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Build a `WriteFailed` error for `path`
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IndexError::WriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Check if this error means an input could not be found
    pub fn is_not_found(&self) -> bool {
        match self {
            IndexError::InvalidPath(_) => true,
            IndexError::ReadFailed { source, .. } => {
                source.kind() == std::io::ErrorKind::NotFound
            }
            _ => false,
        }
    }

    /// Check if this is caused by bad user input (arguments or config)
    pub fn is_bad_input(&self) -> bool {
        matches!(
            self,
            IndexError::InvalidPath(_)
                | IndexError::InvalidPattern { .. }
                | IndexError::ConfigError(_)
                | IndexError::TomlError(_)
        )
    }
}
