//! Manuscript fixtures shared by the integration tests

#![allow(dead_code)]

/// Prose with both emphasis styles, bold text and a trailing sentence
pub const CHAPTER_ONE: &str = "# Ownership\n\
\n\
Every value in Rust has an *owner*. The _borrow checker_ enforces this.\n\
**Bold** text is not an index phrase.\n";

/// Overlaps CHAPTER_ONE so that merging can be observed
pub const CHAPTER_TWO: &str = "# Lifetimes\n\
\n\
An *owner* outlives its borrows. Lifetimes 2024 are *elided* often.\n";

/// Code fences hide their contents from the index
pub const FENCED_CHAPTER: &str = "Intro text before code.\n\
```rust\n\
let *hidden* = secret_identifier;\n\
```\n\
Closing text after code.\n";
