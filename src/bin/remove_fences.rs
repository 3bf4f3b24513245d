//! remove-fences - write copies of markdown files without code blocks
//!
//! # Examples
//!
//! ```bash
//! # Writes manuscript/chapter1_de_fenced.md and so on
//! remove-fences "manuscript/*.md"
//! ```

use clap::Parser;
use markua_index::cli::output::print_error;
use markua_index::cli::{init_logging, run_remove_fences, RemoveFencesArgs};

fn main() {
    let args = RemoveFencesArgs::parse();
    init_logging();

    if let Err(e) = run_remove_fences(args) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
