//! Sequential PDF merging.
//!
//! Inputs are visited strictly in order. Anything that is not PDF-like is
//! skipped, anything that fails to load is recorded, and everything else
//! has its pages appended to the accumulating document. Per-input problems
//! never abort the merge.

use lopdf::Document;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{FilekitError, Result};
use crate::io::PdfReader;
use crate::merge::pages;
use crate::utils::{format_file_size, is_pdf_like};

/// What happened to one merge input.
#[derive(Debug)]
pub enum InputStatus {
    /// Pages were appended.
    Merged {
        /// Pages contributed by this input.
        pages: usize,
    },
    /// Not PDF-like, left out.
    Skipped,
    /// Could not be loaded or appended.
    Failed(FilekitError),
}

/// One input and its fate.
#[derive(Debug)]
pub struct InputReport {
    /// The input path after pattern expansion.
    pub path: PathBuf,
    /// Outcome for this input.
    pub status: InputStatus,
}

/// Statistics about a merge operation.
#[derive(Debug, Clone, Default)]
pub struct MergeStatistics {
    /// Number of PDFs successfully merged.
    pub files_merged: usize,

    /// Number of inputs skipped for not being PDFs.
    pub files_skipped: usize,

    /// Number of inputs that failed to load.
    pub files_failed: usize,

    /// Total number of pages in merged document.
    pub total_pages: usize,

    /// Total size of merged input files.
    pub input_size: u64,

    /// Total time taken for merge.
    pub merge_time: Duration,
}

impl MergeStatistics {
    /// Format input size as human-readable string.
    pub fn format_input_size(&self) -> String {
        format_file_size(self.input_size)
    }
}

/// Result of a merge operation.
#[derive(Debug)]
pub struct MergeOutcome {
    /// The merged document, absent when no input could be merged.
    pub document: Option<Document>,

    /// Every input in the order it was visited.
    pub inputs: Vec<InputReport>,

    /// Statistics about the merge.
    pub statistics: MergeStatistics,
}

impl MergeOutcome {
    /// Paths whose pages made it into the document.
    pub fn merged_files(&self) -> Vec<&Path> {
        self.inputs
            .iter()
            .filter(|input| matches!(input.status, InputStatus::Merged { .. }))
            .map(|input| input.path.as_path())
            .collect()
    }

    /// Take the merged document out of the outcome.
    ///
    /// # Errors
    ///
    /// [`FilekitError::NoFilesToMerge`] if nothing was merged.
    pub fn take_document(&mut self) -> Result<Document> {
        self.document.take().ok_or(FilekitError::NoFilesToMerge)
    }
}

/// PDF merger that combines multiple documents.
#[derive(Debug, Default)]
pub struct Merger {
    reader: PdfReader,
}

impl Merger {
    /// Create a new merger with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `paths` in order.
    ///
    /// The first successfully loaded document becomes the base; later ones
    /// are appended to it. Per-input failures are recorded in the outcome.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use filekit::merge::Merger;
    /// # use std::path::PathBuf;
    /// let merger = Merger::new();
    /// let outcome = merger.merge(&[PathBuf::from("a.pdf"), PathBuf::from("b.pdf")]);
    /// println!("Merged {} files into {} pages",
    ///          outcome.statistics.files_merged,
    ///          outcome.statistics.total_pages);
    /// ```
    pub fn merge(&self, paths: &[PathBuf]) -> MergeOutcome {
        let merge_start = Instant::now();

        let mut merged: Option<Document> = None;
        let mut inputs = Vec::with_capacity(paths.len());
        let mut statistics = MergeStatistics::default();

        for path in paths {
            let status = if is_pdf_like(path) {
                self.append(&mut merged, path, &mut statistics)
            } else {
                tracing::debug!(path = %path.display(), "not a PDF, skipping");
                InputStatus::Skipped
            };

            match &status {
                InputStatus::Merged { pages } => {
                    statistics.files_merged += 1;
                    statistics.total_pages += pages;
                }
                InputStatus::Skipped => statistics.files_skipped += 1,
                InputStatus::Failed(err) => {
                    tracing::warn!("{err}");
                    statistics.files_failed += 1;
                }
            }

            inputs.push(InputReport {
                path: path.clone(),
                status,
            });
        }

        if statistics.files_merged > 1
            && let Some(doc) = merged.as_mut()
        {
            pages::tidy(doc);
        }

        statistics.merge_time = merge_start.elapsed();

        MergeOutcome {
            document: merged,
            inputs,
            statistics,
        }
    }

    fn append(
        &self,
        merged: &mut Option<Document>,
        path: &Path,
        statistics: &mut MergeStatistics,
    ) -> InputStatus {
        let loaded = match self.reader.load(path) {
            Ok(loaded) => loaded,
            Err(err) => return InputStatus::Failed(err),
        };

        let file_size = loaded.file_size;
        let result = match merged {
            Some(base) => pages::append_document(base, loaded.document),
            None => {
                let page_count = loaded.page_count;
                *merged = Some(loaded.document);
                Ok(page_count)
            }
        };

        match result {
            Ok(pages) => {
                statistics.input_size += file_size;
                InputStatus::Merged { pages }
            }
            Err(err) => InputStatus::Failed(FilekitError::failed_to_load_pdf(path, err.to_string())),
        }
    }
}
