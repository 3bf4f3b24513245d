//! Remove-fences command - write fence-free copies of markdown files

use crate::cli::output::{colors, print_header, print_warning};
use crate::core::fence_removal::remove_fences_in_files;
use crate::core::inputs::resolve_inputs;
use clap::Parser;
use std::error::Error;

/// Remove fenced code blocks from markdown files
///
/// For every matched `.md` file, writes `<name>_de_fenced.md` next to
/// it with all fenced code blocks removed. Other files are ignored.
#[derive(Parser, Debug)]
#[command(name = "remove-fences")]
#[command(about = "Remove fenced code blocks from markdown files")]
pub struct RemoveFencesArgs {
    /// Markdown files or glob patterns (e.g. "manuscript/*.md")
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<String>,
}

/// Execute the remove-fences command
pub fn execute(args: RemoveFencesArgs) -> Result<(), Box<dyn Error>> {
    let files = resolve_inputs(&args.files)?;
    let written = remove_fences_in_files(&files)?;

    if written.is_empty() {
        print_warning("No markdown files were processed.");
        return Ok(());
    }

    print_header("Processed files saved as:");
    for path in &written {
        println!("  {}", colors::file_path(&path.display().to_string()));
    }

    Ok(())
}
