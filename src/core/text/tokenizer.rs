//! Word tokenization.
//!
//! Splits text on runs of non-word characters. "Word" follows the
//! Unicode definition used by `regex`'s `\w`: letters, marks, digits
//! and connector punctuation (including `_`). Underscores at either end
//! of a token are emphasis markup and are trimmed, so `_term_` yields
//! `term` while `snake_case` stays whole. Tokens made only of decimal
//! digits are discarded.

use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;
use std::collections::BTreeSet;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").expect("non-word pattern is valid"));
static DIGITS_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+$").expect("digits pattern is valid"));

/// Split `source` into its set of unique word tokens.
///
/// Casing is preserved, so `Word` and `word` are distinct tokens.
pub fn unique_words(source: &str) -> BTreeSet<String> {
    NON_WORD
        .replace_all(source, " ")
        .split_whitespace()
        .map(|token| token.trim_matches('_'))
        .filter(|token| !token.is_empty() && !is_number(token))
        .map(str::to_string)
        .collect()
}

/// Unique words of `source` in index order (see [`sort_index_words`])
pub fn sorted_unique_words(source: &str) -> Vec<String> {
    let mut words: Vec<String> = unique_words(source).into_iter().collect();
    sort_index_words(&mut words);
    words
}

/// Sort words case-insensitively, breaking ties by the original form.
///
/// `apple`, `Banana`, `banana`, `Cherry` stay in that order.
pub fn sort_index_words(words: &mut [String]) {
    words.sort_by(|a, b| compare_index_words(a, b));
}

fn compare_index_words(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn is_number(token: &str) -> bool {
    DIGITS_ONLY.is_match(token)
}
