//! CLI command implementations
//!
//! Each command module defines its argument struct and an `execute`
//! function that the binaries call.

pub mod index;
pub mod remove_fences;

// Re-export argument types for use in mod.rs
pub use index::IndexArgs;
pub use remove_fences::RemoveFencesArgs;
