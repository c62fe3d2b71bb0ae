//! PDF merging functionality.
//!
//! This module combines PDF files into one document:
//!
//! - [`merger`]: the sequential merge loop and its per-input report
//! - [`pages`]: page tree surgery used to append one document to another

pub mod merger;
pub mod pages;

pub use merger::{InputReport, InputStatus, MergeOutcome, MergeStatistics, Merger};

use lopdf::Document;
use std::path::Path;

use crate::config::CombineConfig;
use crate::error::{FilekitError, Result};
use crate::io::{PdfWriter, WriteStatistics};
use crate::utils::collect_paths_for_patterns;

/// Expand the configured inputs and merge them in order.
///
/// Nothing is written; pass the document to [`write_merged`] once the
/// per-input notices have been shown.
///
/// # Errors
///
/// Only configuration and pattern errors are returned here. A merge where
/// nothing could be loaded still returns an outcome; its
/// [`MergeOutcome::take_document`] yields [`FilekitError::NoFilesToMerge`].
pub fn merge_pdfs(config: &CombineConfig) -> Result<MergeOutcome> {
    config.validate()?;

    let paths = collect_paths_for_patterns(&config.inputs)?;
    tracing::debug!(inputs = paths.len(), "expanded merge inputs");

    Ok(Merger::new().merge(&paths))
}

/// Write a merged document to `output`.
///
/// # Errors
///
/// [`FilekitError::MergeWriteError`] if the file cannot be written. The
/// write goes through a temporary file, so a failure leaves no partial
/// output behind.
pub fn write_merged(document: &mut Document, output: &Path) -> Result<WriteStatistics> {
    PdfWriter::new()
        .save(document, output)
        .map_err(|source| FilekitError::merge_write(output, source))
}
