//! markua-index - build an index word list from markdown manuscripts
//!
//! Reads Markua/Markdown chapters, drops fenced code blocks, and writes
//! the italicized phrases and the unique non-stop-words to a single
//! index file an author can prune by hand.
//!
//! # Examples
//!
//! ```bash
//! # Index every chapter of a manuscript
//! markua-index "manuscript/*.md"
//!
//! # Index specific files
//! markua-index intro.md chapter1.md
//!
//! # Show what is happening under the hood
//! RUST_LOG=markua_index=debug markua-index "manuscript/*.md"
//! ```

use clap::Parser;
use markua_index::cli::output::print_error;
use markua_index::cli::{init_logging, run_index, IndexArgs};

fn main() {
    let args = IndexArgs::parse();
    init_logging();

    if let Err(e) = run_index(args) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
