//! Shared helpers for the integration tests.
//!
//! PDF fixtures are generated on the fly rather than checked in.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use filekit::convert::{TextPdfBuilder, extract_document_text};
use filekit::io::PdfWriter;
use lopdf::Document;

/// Write a PDF with one page per entry of `pages` into `dir`.
pub fn write_pdf(dir: &Path, name: &str, pages: &[&str]) -> PathBuf {
    let mut doc = pages
        .iter()
        .fold(TextPdfBuilder::new(), |builder, text| {
            builder.page(&[text.to_string()])
        })
        .build();

    let path = dir.join(name);
    PdfWriter::new()
        .save(&mut doc, &path)
        .expect("Failed to write fixture PDF");
    path
}

/// Write a text file into `dir`.
pub fn write_text(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write fixture text");
    path
}

/// Sorted file names directly inside `dir`.
pub fn listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("Failed to list directory")
        .map(|entry| {
            entry
                .expect("Failed to read directory entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}

/// Whitespace-separated words of every page of the PDF at `path`.
pub fn pdf_words(path: &Path) -> Vec<String> {
    let doc = Document::load(path).expect("Failed to load PDF");
    extract_document_text(&doc)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Non-empty trimmed lines of `text`.
pub fn content_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
