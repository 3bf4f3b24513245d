//! Index command - build the index word list for a manuscript

use crate::cli::output::{colors, format_duration, print_success, print_warning};
use crate::core::aggregator::IndexBuilder;
use crate::core::config::Config;
use crate::core::inputs::resolve_inputs;
use crate::core::text::StopWords;
use clap::Parser;
use std::error::Error;

/// Extract index words and italicized phrases from markdown files
///
/// Reads each file, removes fenced code blocks, collects phrases wrapped
/// in single `*` or `_`, splits the remaining prose into unique words and
/// drops stop words. The result is written to the configured index file
/// with the phrases first, then the words.
#[derive(Parser, Debug)]
#[command(name = "markua-index")]
#[command(about = "Extract index words and italicized phrases from markdown files")]
pub struct IndexArgs {
    /// Markdown files or glob patterns (e.g. "manuscript/*.md")
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<String>,
}

/// Execute the index command
pub fn execute(args: IndexArgs, config: &Config) -> Result<(), Box<dyn Error>> {
    let files = resolve_inputs(&args.files)?;

    if files.is_empty() {
        print_warning("No files matched; the index will have no entries.");
    }

    let stop_words = StopWords::from_config(&config.dictionaries).map_err(|e| {
        format!(
            "{e}. Check the files in '{}' or disable them with MARKUA_INDEX_DICTIONARIES_DIR.",
            config.dictionaries.dir.display()
        )
    })?;

    eprintln!(
        "Indexing {} file(s) with {} stop words...",
        colors::number(&files.len().to_string()),
        colors::number(&stop_words.len().to_string())
    );

    let builder = IndexBuilder::new(stop_words, config.phrases);
    let stats = builder.write(&files, &config.output)?;

    print_success(&format!(
        "Indexed {} phrases and {} words from {} file(s) in {}",
        stats.phrases,
        stats.words,
        stats.files_processed,
        format_duration(stats.duration_ms as f64 / 1000.0)
    ));
    println!(
        "{} {}",
        colors::dim("Written to"),
        colors::file_path(&stats.output_path.display().to_string())
    );

    Ok(())
}
