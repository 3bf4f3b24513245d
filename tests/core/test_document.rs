//! MarkdownDoc pipeline tests against files on disk

use crate::common::{create_manuscript, FENCED_CHAPTER};
use markua_index::{MarkdownDoc, PhraseOptions, StopWords};
use std::collections::BTreeSet;

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_sentence_with_emphasis_and_bold() {
    let manuscript = create_manuscript(&[("doc.md", "This is a _test_ **Markdown** document.")]);
    let stop_words = StopWords::from_words(["is", "a"]);

    let doc = MarkdownDoc::load(
        manuscript.path().join("doc.md"),
        &stop_words,
        &PhraseOptions::default(),
    )
    .unwrap();

    assert_eq!(doc.index_phrases(), &set(&["test"]));
    assert_eq!(
        doc.index_words(),
        &set(&["This", "test", "Markdown", "document"])
    );
}

#[test]
fn test_fenced_code_never_reaches_the_index() {
    let manuscript = create_manuscript(&[("doc.md", FENCED_CHAPTER)]);

    let doc = MarkdownDoc::load(
        manuscript.path().join("doc.md"),
        &StopWords::new(),
        &PhraseOptions::default(),
    )
    .unwrap();

    assert!(doc.italicized_phrases().is_empty());
    assert!(!doc.unique_words().contains("secret_identifier"));
    assert!(doc.unique_words().contains("Closing"));
    assert_eq!(doc.codeless(), "Intro text before code.\nClosing text after code.\n");
}

#[test]
fn test_builtin_stop_words_are_case_insensitive() {
    let doc = MarkdownDoc::from_source(
        "doc.md",
        "The Quick fox AND the *lazy dog*",
        &StopWords::builtin(),
        &PhraseOptions::default(),
    );

    assert_eq!(doc.index_words(), &set(&["Quick", "fox", "lazy", "dog"]));
    assert_eq!(doc.index_phrases(), &set(&["lazy dog"]));
}

#[test]
fn test_phrase_cap_drops_long_phrases() {
    let doc = MarkdownDoc::from_source(
        "doc.md",
        "*short one* and *a much longer emphasized run*",
        &StopWords::new(),
        &PhraseOptions::capped(2),
    );

    assert_eq!(doc.italicized_phrases(), &set(&["short one"]));
}

#[test]
fn test_load_missing_file() {
    let manuscript = create_manuscript(&[]);
    let err = MarkdownDoc::load(
        manuscript.path().join("gone.md"),
        &StopWords::new(),
        &PhraseOptions::default(),
    )
    .unwrap_err();

    assert!(err.is_not_found());
}
