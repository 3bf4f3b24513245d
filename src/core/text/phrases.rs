//! Italicized phrase extraction.
//!
//! Markua marks emphasis with a single `*` or `_` on each side. Bold
//! (`**`, `__`) and backslash-escaped delimiters are not emphasis. The
//! `regex` crate has no look-around, so the delimiter rules are applied
//! by a small scanner over the characters of the source.

use serde::Deserialize;

const DELIMITERS: [char; 2] = ['*', '_'];
const ESCAPE: char = '\\';

/// Options controlling which spans count as index phrases
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PhraseOptions {
    /// Drop phrases with more than this many words (None = no limit)
    #[serde(default)]
    pub max_words: Option<usize>,
}

impl PhraseOptions {
    /// Options that keep phrases of at most `max_words` words
    pub fn capped(max_words: usize) -> Self {
        Self {
            max_words: Some(max_words),
        }
    }

    fn accepts(&self, phrase: &str) -> bool {
        match self.max_words {
            Some(max) => phrase.split_whitespace().count() <= max,
            None => true,
        }
    }
}

/// Find all italicized phrases in `source`.
///
/// Returns the text between the delimiters, in document order, first
/// for `*` and then for `_`. Duplicates are kept; callers that need a
/// set collect into one. Phrases may span lines.
pub fn italicized_phrases(source: &str, options: &PhraseOptions) -> Vec<String> {
    let chars: Vec<char> = source.chars().collect();

    DELIMITERS
        .iter()
        .flat_map(|&delimiter| spans(&chars, delimiter))
        .filter(|phrase| options.accepts(phrase))
        .collect()
}

/// Scan for `delimiter`-wrapped spans.
///
/// An opening delimiter must not touch another delimiter of the same
/// kind on either side and must not be escaped. The span closes at the
/// next unescaped delimiter (escaped ones stay inside the phrase), which
/// must not be followed by another delimiter; otherwise scanning resumes
/// right after the rejected opening.
fn spans(chars: &[char], delimiter: char) -> Vec<String> {
    let at = |i: usize| chars.get(i).copied();
    let mut phrases = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let opens = chars[i] == delimiter
            && (i == 0 || (chars[i - 1] != delimiter && chars[i - 1] != ESCAPE))
            && at(i + 1).is_some_and(|next| next != delimiter);

        if !opens {
            i += 1;
            continue;
        }

        let close = (i + 1..chars.len()).find(|&j| chars[j] == delimiter && chars[j - 1] != ESCAPE);

        match close {
            Some(end) if at(end + 1) != Some(delimiter) => {
                phrases.push(chars[i + 1..end].iter().collect());
                i = end + 1;
            }
            Some(_) => i += 1,
            // No closing delimiter anywhere after this point
            None => break,
        }
    }

    phrases
}
