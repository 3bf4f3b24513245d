//! Tests for the remove-fences command

use crate::common::{create_manuscript, FENCED_CHAPTER};
use markua_index::cli::commands::remove_fences::{execute, RemoveFencesArgs};
use std::fs;

/// Test that a de-fenced copy is written next to the original
#[test]
fn test_remove_fences_writes_copy() {
    let manuscript = create_manuscript(&[("ch1.md", FENCED_CHAPTER)]);
    let file = manuscript.path().join("ch1.md");

    let args = RemoveFencesArgs {
        files: vec![file.display().to_string()],
    };
    execute(args).expect("remove-fences should succeed");

    let copy = fs::read_to_string(manuscript.path().join("ch1_de_fenced.md")).unwrap();
    assert_eq!(copy, "Intro text before code.\nClosing text after code.\n");
    assert_eq!(fs::read_to_string(&file).unwrap(), FENCED_CHAPTER);
}

/// Test that only markdown files are processed
#[test]
fn test_remove_fences_skips_other_files() {
    let manuscript = create_manuscript(&[("notes.txt", FENCED_CHAPTER), ("ch1.md", "plain\n")]);
    let pattern = format!("{}/*", manuscript.path().display());

    execute(RemoveFencesArgs {
        files: vec![pattern],
    })
    .expect("remove-fences should succeed");

    assert!(manuscript.path().join("ch1_de_fenced.md").exists());
    assert!(!manuscript.path().join("notes_de_fenced.txt").exists());
}

/// Test that a missing file is reported
#[test]
fn test_remove_fences_missing_file() {
    let manuscript = create_manuscript(&[]);
    let missing = manuscript.path().join("missing.md");

    let result = execute(RemoveFencesArgs {
        files: vec![missing.display().to_string()],
    });
    assert!(result.is_err());
}
