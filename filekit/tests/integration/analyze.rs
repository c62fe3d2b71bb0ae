//! Integration tests for the text analyzer.

use filekit::analyze::analyze_file;
use filekit::config::{AnalyzeConfig, AnalyzeSections};
use filekit::error::FilekitError;
use filekit::output::{statistics_json, statistics_lines};
use tempfile::TempDir;

use crate::common::write_text;

#[test]
fn test_analyze_file_all_sections() {
    let dir = TempDir::new().unwrap();
    let path = write_text(dir.path(), "poem.txt", "the cat\nthe hat\nthe end");

    let config = AnalyzeConfig::new(&path);
    let stats = analyze_file(&config).unwrap();

    assert_eq!(stats.lines, 3);
    assert_eq!(stats.words, 6);
    assert_eq!(stats.top_words[0].word, "the");
    assert_eq!(stats.top_words[0].count, 3);

    let lines = statistics_lines(&stats, config.sections);
    assert_eq!(lines[0], "Lines: 3");
    assert_eq!(lines[1], "Words: 6");
    assert_eq!(lines[2], "Characters: 23");
    assert_eq!(lines[4], "  the: 3");
    assert_eq!(lines[5], "  cat: 1");
}

#[test]
fn test_analyze_top_limits_frequency_list() {
    let dir = TempDir::new().unwrap();
    let path = write_text(dir.path(), "list.txt", "a b c d e f a");

    let mut config = AnalyzeConfig::new(&path);
    config.top = 2;
    config.sections = AnalyzeSections {
        freq: true,
        ..Default::default()
    };

    let stats = analyze_file(&config).unwrap();
    let json = statistics_json(&stats, config.sections);

    let top = json["top_words"].as_array().unwrap();
    assert_eq!(top.len(), 2);
    assert_eq!(top[0]["word"], "a");
    assert_eq!(top[1]["word"], "b");
    assert!(json.get("lines").is_none());
}

#[test]
fn test_analyze_rejects_non_utf8() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("binary.txt");
    std::fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

    let err = analyze_file(&AnalyzeConfig::new(&path)).unwrap_err();
    assert!(matches!(err, FilekitError::Io { .. }));
}

#[test]
fn test_analyze_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = analyze_file(&AnalyzeConfig::new(dir.path().join("absent.txt"))).unwrap_err();
    assert!(matches!(err, FilekitError::FileNotFound { .. }));
}
