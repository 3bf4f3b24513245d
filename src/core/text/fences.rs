//! Fenced code block removal.

use once_cell::sync::Lazy;
use regex::Regex;

/// A newline, an opening fence, everything up to the first closing
/// fence, and whatever trails the closing fence on its line.
static FENCE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\n```.*?```[^\n]*").expect("fence pattern is valid"));

/// Remove every fenced code block from `source`.
///
/// A block starts with a newline followed by ```` ``` ````, ends at the
/// first ```` ``` ```` after it, and also swallows any language tag or
/// stray text after the closing marker. The newline before the opening
/// marker is consumed and the one after the closing marker is kept, so
/// the surrounding lines end up adjacent.
///
/// Unterminated fences do not match and are left in place.
pub fn strip_code(source: &str) -> String {
    FENCE_PATTERN.replace_all(source, "").into_owned()
}
