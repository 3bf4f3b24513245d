//! Configuration management for markua-index.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.
//! The resulting `Config` is passed explicitly to the code that needs
//! it; nothing reads paths from global state.

use crate::core::error::{IndexError, Result};
use crate::core::text::PhraseOptions;
use crate::core::xdg::XdgDirs;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project-local config file
pub const LOCAL_CONFIG_FILE: &str = "markua-index.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dictionaries: DictionaryConfig,
    #[serde(default)]
    pub phrases: PhraseOptions,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Stop-word dictionary configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DictionaryConfig {
    /// Directory of `*.txt` stop-word files
    #[serde(default = "default_dictionaries_dir")]
    pub dir: PathBuf,

    /// Include the built-in English stop words
    #[serde(default = "default_builtin")]
    pub builtin: bool,
}

/// Index output configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OutputConfig {
    /// Directory the index file is written to (created if absent)
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// Index file name inside `dir`
    #[serde(default = "default_output_file")]
    pub file_name: String,
}

// Default value functions
fn default_dictionaries_dir() -> PathBuf {
    PathBuf::from("dictionaries")
}

fn default_builtin() -> bool {
    true
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("index_words")
}

fn default_output_file() -> String {
    "index_words.txt".to_string()
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            dir: default_dictionaries_dir(),
            builtin: default_builtin(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            file_name: default_output_file(),
        }
    }
}

impl OutputConfig {
    /// Output configuration writing to `dir/file_name`
    pub fn new(dir: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            file_name: file_name.into(),
        }
    }

    /// Full path of the index file
    pub fn index_file(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }

    /// Scratch file holding the phrases collected so far during a run
    pub fn partial_phrases_file(&self) -> PathBuf {
        self.dir.join(format!(".{}.phrases", self.file_name))
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| IndexError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// This method uses XDG Base Directory specification for file locations.
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. MARKUA_INDEX_CONFIG env var
    /// 2. XDG config file (~/.config/markua-index/config.toml)
    /// 3. ./markua-index.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        xdg.log_paths();

        let mut config = if let Ok(config_path) = env::var("MARKUA_INDEX_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new(LOCAL_CONFIG_FILE).exists() {
                Self::from_file(LOCAL_CONFIG_FILE)?
            } else {
                Self::default()
            }
        };

        // Fall back to the shared dictionaries when no project-local ones exist
        if config.dictionaries.dir == default_dictionaries_dir()
            && !config.dictionaries.dir.is_dir()
            && xdg.dictionaries_dir().is_dir()
        {
            config.dictionaries.dir = xdg.dictionaries_dir();
        }

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(dir) = env::var("MARKUA_INDEX_DICTIONARIES_DIR") {
            self.dictionaries.dir = PathBuf::from(dir);
        }
        if let Ok(builtin) = env::var("MARKUA_INDEX_BUILTIN_STOP_WORDS") {
            if let Ok(b) = builtin.parse() {
                self.dictionaries.builtin = b;
            }
        }

        if let Ok(max_words) = env::var("MARKUA_INDEX_MAX_PHRASE_WORDS") {
            if max_words.is_empty() || max_words == "none" {
                self.phrases.max_words = None;
            } else if let Ok(max) = max_words.parse() {
                self.phrases.max_words = Some(max);
            }
        }

        if let Ok(dir) = env::var("MARKUA_INDEX_OUTPUT_DIR") {
            self.output.dir = PathBuf::from(dir);
        }
        if let Ok(file_name) = env::var("MARKUA_INDEX_OUTPUT_FILE") {
            self.output.file_name = file_name;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.output.file_name.trim().is_empty() {
            return Err(IndexError::ConfigError(
                "Output file name must not be empty".to_string(),
            ));
        }

        if Path::new(&self.output.file_name).components().count() != 1 {
            return Err(IndexError::ConfigError(format!(
                "Output file name '{}' must not contain directories; set output.dir instead",
                self.output.file_name
            )));
        }

        if self.phrases.max_words == Some(0) {
            return Err(IndexError::ConfigError(
                "Max phrase words must be non-zero (omit it for no limit)".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Dictionaries dir: {:?}", self.dictionaries.dir);
        tracing::info!("  Built-in stop words: {}", self.dictionaries.builtin);
        match self.phrases.max_words {
            Some(max) => tracing::info!("  Max phrase words: {}", max),
            None => tracing::info!("  Max phrase words: unlimited"),
        }
        tracing::info!("  Index file: {:?}", self.output.index_file());
    }
}
