//! Integration tests for batch renaming and conversion.

use std::env;
use std::fs;

use filekit::config::{CollisionPolicy, RenameConfig};
use filekit::convert::ConversionKind;
use filekit::error::FilekitError;
use filekit::rename::{RenameStatus, rename_files};
use serial_test::serial;
use tempfile::TempDir;

use crate::common::{content_lines, listing, write_pdf, write_text};

#[test]
fn test_prefix_suffix_on_directory() {
    let dir = TempDir::new().unwrap();
    write_text(dir.path(), "a.txt", "a");
    write_text(dir.path(), "b.md", "b");

    let mut config = RenameConfig::new(dir.path());
    config.prefix = "2024_".to_string();
    config.suffix = "_v2".to_string();

    let report = rename_files(&config).unwrap();

    assert_eq!(report.renamed_count(), 2);
    assert!(report.failures().is_empty());
    assert_eq!(listing(dir.path()), vec!["2024_a_v2.txt", "2024_b_v2.md"]);
}

#[test]
fn test_numbered_wins_over_overwrite() {
    let dir = TempDir::new().unwrap();
    for name in ["x.txt", "y.txt", "z.txt"] {
        write_text(dir.path(), name, name);
    }

    let mut config = RenameConfig::new(dir.path());
    config.numbered = true;
    config.overwrite = Some(vec!["p".into(), "q".into(), "r".into()]);

    rename_files(&config).unwrap();
    assert_eq!(listing(dir.path()), vec!["1.txt", "2.txt", "3.txt"]);
}

#[test]
fn test_overwrite_names_follow_listing_order() {
    let dir = TempDir::new().unwrap();
    write_text(dir.path(), "first.txt", "first");
    write_text(dir.path(), "second.txt", "second");

    let mut config = RenameConfig::new(dir.path());
    config.overwrite = Some(vec!["alpha".into(), "beta".into()]);

    let report = rename_files(&config).unwrap();

    let names = ["alpha", "beta"];
    for file in &report.files {
        let outcome = file.outcome.as_ref().unwrap();
        assert_eq!(
            outcome.to,
            dir.path().join(format!("{}.txt", names[file.index]))
        );
    }
    assert_eq!(listing(dir.path()), vec!["alpha.txt", "beta.txt"]);
}

#[test]
fn test_overwrite_length_mismatch_changes_nothing() {
    let dir = TempDir::new().unwrap();
    for name in ["a.txt", "b.txt", "c.txt"] {
        write_text(dir.path(), name, name);
    }

    let mut config = RenameConfig::new(dir.path());
    config.overwrite = Some(vec!["only".into(), "two".into()]);
    config.convert_formats = true;
    config.output_root = dir.path().join("out");

    let err = rename_files(&config).unwrap_err();

    assert!(matches!(err, FilekitError::InvalidOverwrite { .. }));
    assert_eq!(listing(dir.path()), vec!["a.txt", "b.txt", "c.txt"]);
    assert!(!dir.path().join("out").exists());
}

#[test]
fn test_collision_policies() {
    let dir = TempDir::new().unwrap();
    let source = write_text(dir.path(), "draft.txt", "new");
    write_text(dir.path(), "final.txt", "old");

    let mut config = RenameConfig::new(&source);
    config.overwrite = Some(vec!["final".into()]);

    let report = rename_files(&config).unwrap();
    assert!(matches!(
        report.files[0].outcome,
        Err(FilekitError::DestinationExists { .. })
    ));
    assert_eq!(report.failures()[0].exit_code(), 4);

    config.collision = CollisionPolicy::Suffix;
    let report = rename_files(&config).unwrap();
    let outcome = report.files[0].outcome.as_ref().unwrap();
    assert_eq!(outcome.to, dir.path().join("final (1).txt"));
    assert_eq!(fs::read_to_string(dir.path().join("final.txt")).unwrap(), "old");
}

#[test]
fn test_unchanged_name_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let source = write_text(dir.path(), "keep.txt", "x");

    let report = rename_files(&RenameConfig::new(&source)).unwrap();

    let outcome = report.files[0].outcome.as_ref().unwrap();
    assert_eq!(outcome.status, RenameStatus::Unchanged);
    assert!(source.exists());
}

#[cfg(unix)]
#[test]
fn test_non_utf8_name_is_preserved() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = TempDir::new().unwrap();
    let source = dir.path().join(OsStr::from_bytes(b"caf\xe9.txt"));
    fs::write(&source, "x").unwrap();

    let report = rename_files(&RenameConfig::new(dir.path())).unwrap();
    assert_eq!(
        report.files[0].outcome.as_ref().unwrap().status,
        RenameStatus::Unchanged
    );
    assert!(source.exists());

    let mut config = RenameConfig::new(dir.path());
    config.prefix = "p_".to_string();
    rename_files(&config).unwrap();

    assert!(!source.exists());
    assert!(dir.path().join(OsStr::from_bytes(b"p_caf\xe9.txt")).exists());
}

#[test]
fn test_dry_run_matches_real_run_for_duplicate_names() {
    let dir = TempDir::new().unwrap();
    write_text(dir.path(), "a.txt", "a");
    write_text(dir.path(), "b.txt", "b");

    let mut config = RenameConfig::new(dir.path());
    config.overwrite = Some(vec!["x".into(), "x".into()]);
    config.dry_run = true;

    let planned = rename_files(&config).unwrap();
    assert_eq!(planned.renamed_count(), 1);
    assert_eq!(planned.failures().len(), 1);
    assert_eq!(listing(dir.path()), vec!["a.txt", "b.txt"]);

    config.dry_run = false;
    let real = rename_files(&config).unwrap();
    assert_eq!(real.renamed_count(), planned.renamed_count());
    assert_eq!(real.failures().len(), planned.failures().len());
    assert_eq!(listing(dir.path()).len(), 2);
    assert!(dir.path().join("x.txt").exists());
}

#[test]
fn test_convert_text_and_pdf_side_outputs() {
    let dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_text(dir.path(), "notes.txt", "first line\n\nsecond line\n");
    write_pdf(dir.path(), "scan.pdf", &["scanned words"]);

    let mut config = RenameConfig::new(dir.path());
    config.prefix = "p_".to_string();
    config.convert_formats = true;
    config.output_root = out.path().to_path_buf();

    let report = rename_files(&config).unwrap();

    assert_eq!(report.converted_count(), 2);
    assert_eq!(report.renamed_count(), 2);
    assert_eq!(listing(dir.path()), vec!["p_notes.txt", "p_scan.pdf"]);

    let pdf_out = out.path().join("output_pdf").join("p_notes.pdf");
    let txt_out = out.path().join("output_txt").join("p_scan.txt");
    assert!(pdf_out.exists());
    assert_eq!(
        content_lines(&fs::read_to_string(&txt_out).unwrap()),
        vec!["scanned words"]
    );

    let kinds: Vec<ConversionKind> = report
        .files
        .iter()
        .filter_map(|f| f.conversion.as_ref()?.as_ref().ok().map(|c| c.kind))
        .collect();
    assert!(kinds.contains(&ConversionKind::TextToPdf));
    assert!(kinds.contains(&ConversionKind::PdfToText));
}

#[test]
fn test_text_pdf_text_round_trip() {
    let dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let original = "Dear reader,\n\nthis line has   spaces\n\tand a tab\nlast line";
    let source = write_text(dir.path(), "letter.txt", original);

    let mut config = RenameConfig::new(&source);
    config.convert_formats = true;
    config.output_root = out.path().to_path_buf();
    rename_files(&config).unwrap();

    let pdf = out.path().join("output_pdf").join("letter.pdf");
    let mut back = RenameConfig::new(&pdf);
    back.convert_formats = true;
    back.output_root = out.path().to_path_buf();
    rename_files(&back).unwrap();

    let text = fs::read_to_string(out.path().join("output_txt").join("letter.txt")).unwrap();
    let words: Vec<String> = content_lines(&text)
        .iter()
        .flat_map(|l| l.split_whitespace().map(str::to_string).collect::<Vec<_>>())
        .collect();
    let expected: Vec<String> = original.split_whitespace().map(str::to_string).collect();
    assert_eq!(words, expected);
}

#[test]
#[serial]
fn test_default_output_root_is_working_directory() {
    let dir = TempDir::new().unwrap();
    let source = write_text(dir.path(), "memo.txt", "hello");
    let previous = env::current_dir().unwrap();
    env::set_current_dir(dir.path()).unwrap();

    let mut config = RenameConfig::new(&source);
    config.suffix = "_x".to_string();
    config.convert_formats = true;
    let result = rename_files(&config);

    env::set_current_dir(previous).unwrap();

    let report = result.unwrap();
    assert_eq!(report.converted_count(), 1);
    assert!(dir.path().join("output_pdf").join("memo_x.pdf").exists());
    assert!(dir.path().join("memo_x.txt").exists());
}
