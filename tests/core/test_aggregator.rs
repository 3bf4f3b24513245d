//! IndexBuilder tests: merging chapters and writing the index file

use crate::common::{create_manuscript, CHAPTER_ONE, CHAPTER_TWO};
use markua_index::core::config::OutputConfig;
use markua_index::{IndexBuilder, PhraseOptions, StopWords};
use std::fs;
use std::path::PathBuf;

#[test]
fn test_zero_inputs_write_only_the_words_header() {
    let out = create_manuscript(&[]);
    let output = OutputConfig::new(out.path().join("index"), "index_words.txt");
    let builder = IndexBuilder::new(StopWords::builtin(), PhraseOptions::default());

    let stats = builder.write::<PathBuf>(&[], &output).unwrap();

    assert_eq!(stats.files_processed, 0);
    assert_eq!(fs::read_to_string(output.index_file()).unwrap(), "Index Words:\n");
}

#[test]
fn test_words_come_from_the_combined_corpus() {
    // "foot" + "note" only becomes a token if documents were joined without a separator
    let manuscript = create_manuscript(&[("a.md", "ends with foot"), ("b.md", "note starts here")]);
    let paths = vec![manuscript.path().join("a.md"), manuscript.path().join("b.md")];
    let builder = IndexBuilder::new(StopWords::new(), PhraseOptions::default());

    let index = builder.build(&paths).unwrap();

    assert!(index.words.contains(&"foot".to_string()));
    assert!(index.words.contains(&"note".to_string()));
    assert!(!index.words.contains(&"footnote".to_string()));
}

#[test]
fn test_dictionary_directory_filters_words_and_phrases() {
    let manuscript = create_manuscript(&[
        ("ch1.md", CHAPTER_ONE),
        ("ch2.md", CHAPTER_TWO),
        ("dicts/common.txt", "the\nan\nits\nare\nis\nnot\nin\nhas\nthis\n"),
        ("dicts/project.txt", "# names that are too common in this book\nowner\n"),
    ]);
    let stop_words = StopWords::from_dir(manuscript.path().join("dicts")).unwrap();
    let builder = IndexBuilder::new(stop_words, PhraseOptions::default());
    let output = OutputConfig::new(manuscript.path().join("out"), "terms.txt");

    let stats = builder
        .write(
            &[manuscript.path().join("ch1.md"), manuscript.path().join("ch2.md")],
            &output,
        )
        .unwrap();

    assert_eq!(stats.files_processed, 2);
    assert_eq!(stats.phrases, 2);
    assert_eq!(stats.output_path, output.index_file());

    let text = fs::read_to_string(output.index_file()).unwrap();
    assert!(text.starts_with("Italicized Phrases:\nborrow checker\nelided\n\nIndex Words:\n"));
    assert!(!text.lines().any(|line| line == "owner"));
    assert!(text.lines().any(|line| line == "Ownership"));
    assert!(!text.lines().any(|line| line == "2024"));
}

#[test]
fn test_failed_run_leaves_partial_phrases_for_inspection() {
    let manuscript = create_manuscript(&[("ch1.md", CHAPTER_ONE)]);
    let builder = IndexBuilder::new(StopWords::new(), PhraseOptions::default());
    let output = OutputConfig::new(manuscript.path().join("out"), "index_words.txt");

    let err = builder
        .write(
            &[manuscript.path().join("ch1.md"), manuscript.path().join("missing.md")],
            &output,
        )
        .unwrap_err();

    assert!(err.is_not_found());
    assert!(!output.index_file().exists());
    assert_eq!(
        fs::read_to_string(output.partial_phrases_file()).unwrap(),
        "borrow checker\nowner\n"
    );
}
