//! Integration tests for PDF merging.

use std::env;
use std::fs;

use filekit::config::CombineConfig;
use filekit::error::FilekitError;
use filekit::merge::{InputStatus, merge_pdfs, write_merged};
use serial_test::serial;
use tempfile::TempDir;

use crate::common::{pdf_words, write_pdf, write_text};

fn path_str(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

#[test]
fn test_skips_non_pdf_and_keeps_order() {
    let dir = TempDir::new().unwrap();
    let x = write_pdf(dir.path(), "x.pdf", &["x-one", "x-two"]);
    let y = write_text(dir.path(), "y.txt", "not a pdf");
    let z = write_pdf(dir.path(), "z.pdf", &["z-one"]);
    let output = dir.path().join("merged.pdf");

    let mut config = CombineConfig::new([path_str(&x), path_str(&y), path_str(&z)]);
    config.output = output.clone();

    let mut outcome = merge_pdfs(&config).unwrap();
    assert!(matches!(outcome.inputs[1].status, InputStatus::Skipped));
    assert_eq!(outcome.statistics.files_merged, 2);
    assert_eq!(outcome.statistics.total_pages, 3);

    let mut document = outcome.take_document().unwrap();
    write_merged(&mut document, &config.output).unwrap();

    assert_eq!(pdf_words(&output), vec!["x-one", "x-two", "z-one"]);
}

#[test]
fn test_missing_input_is_reported_not_fatal() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", &["alpha"]);
    let missing = dir.path().join("missing.pdf");

    let outcome = merge_pdfs(&CombineConfig::new([path_str(&missing), path_str(&a)])).unwrap();

    let InputStatus::Failed(err) = &outcome.inputs[0].status else {
        panic!("missing input should fail");
    };
    assert!(matches!(err, FilekitError::FileNotFound { .. }));
    assert_eq!(outcome.merged_files(), vec![a.as_path()]);
}

#[test]
fn test_nothing_to_merge() {
    let dir = TempDir::new().unwrap();
    let notes = write_text(dir.path(), "notes.txt", "x");
    let broken = write_text(dir.path(), "broken.pdf", "not a pdf at all");

    let mut outcome = merge_pdfs(&CombineConfig::new([path_str(&notes), path_str(&broken)])).unwrap();

    let err = outcome.take_document().unwrap_err();
    assert!(matches!(err, FilekitError::NoFilesToMerge));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_glob_pattern_expands_alphabetically() {
    let dir = TempDir::new().unwrap();
    write_pdf(dir.path(), "part2.pdf", &["second"]);
    write_pdf(dir.path(), "part1.pdf", &["first"]);
    write_text(dir.path(), "part3.txt", "ignored by pattern");
    let output = dir.path().join("book.pdf");

    let pattern = path_str(&dir.path().join("part*.pdf"));
    let mut config = CombineConfig::new([pattern]);
    config.output = output.clone();

    let mut outcome = merge_pdfs(&config).unwrap();
    write_merged(&mut outcome.take_document().unwrap(), &output).unwrap();

    assert_eq!(pdf_words(&output), vec!["first", "second"]);
}

#[test]
fn test_bracketed_file_name_is_not_a_pattern() {
    let dir = TempDir::new().unwrap();
    let bracketed = write_pdf(dir.path(), "a[1].pdf", &["literal"]);
    write_pdf(dir.path(), "a1.pdf", &["impostor"]);
    let output = dir.path().join("out.pdf");

    let mut outcome = merge_pdfs(&CombineConfig::new([path_str(&bracketed)])).unwrap();
    assert_eq!(outcome.merged_files(), vec![bracketed.as_path()]);

    write_merged(&mut outcome.take_document().unwrap(), &output).unwrap();
    assert_eq!(pdf_words(&output), vec!["literal"]);
}

#[test]
fn test_write_failure_leaves_no_output() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", &["alpha"]);
    let blocker = write_text(dir.path(), "blocker", "a file where a directory should be");
    let output = blocker.join("merged.pdf");

    let mut outcome = merge_pdfs(&CombineConfig::new([path_str(&a)])).unwrap();
    let err = write_merged(&mut outcome.take_document().unwrap(), &output).unwrap_err();

    assert!(matches!(err, FilekitError::MergeWriteError { .. }));
    assert!(!output.exists());
}

#[test]
fn test_existing_output_is_replaced() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", &["fresh"]);
    let output = write_text(dir.path(), "out.pdf", "stale");

    let mut outcome = merge_pdfs(&CombineConfig::new([path_str(&a)])).unwrap();
    write_merged(&mut outcome.take_document().unwrap(), &output).unwrap();

    assert_eq!(pdf_words(&output), vec!["fresh"]);
    let leftovers: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
#[serial]
fn test_default_output_in_working_directory() {
    let dir = TempDir::new().unwrap();
    write_pdf(dir.path(), "one.pdf", &["one"]);
    write_pdf(dir.path(), "two.pdf", &["two"]);
    let previous = env::current_dir().unwrap();
    env::set_current_dir(dir.path()).unwrap();

    let config = CombineConfig::new(["one.pdf", "two.pdf"]);
    let result = merge_pdfs(&config).and_then(|mut outcome| {
        let mut document = outcome.take_document()?;
        write_merged(&mut document, &config.output)
    });

    env::set_current_dir(previous).unwrap();

    result.unwrap();
    assert_eq!(pdf_words(&dir.path().join("combined.pdf")), vec!["one", "two"]);
}
