//! Text extraction pipeline.
//!
//! The stages run in this order over a markdown source:
//!
//! 1. `fences`: remove fenced code blocks
//! 2. `phrases`: collect `*italic*` and `_italic_` spans
//! 3. `tokenizer`: split the remaining text into unique words
//! 4. `stop_words`: drop words and phrases found in the dictionaries
//!
//! Every stage works on `&str` and is Unicode-aware. None of them
//! can fail; I/O only happens when loading stop-word dictionaries.

pub mod fences;
pub mod phrases;
pub mod stop_words;
pub mod tokenizer;

pub use fences::strip_code;
pub use phrases::{italicized_phrases, PhraseOptions};
pub use stop_words::StopWords;
pub use tokenizer::{sort_index_words, sorted_unique_words, unique_words};
