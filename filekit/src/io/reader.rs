//! PDF reading and loading operations.
//!
//! # Examples
//!
//! ```no_run
//! use filekit::io::PdfReader;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = PdfReader::new();
//! let loaded = reader.load(Path::new("document.pdf"))?;
//! println!("Loaded {} pages", loaded.page_count);
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{FilekitError, Result};

/// A loaded PDF document with metadata.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The PDF document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,

    /// Time taken to load the document.
    pub load_time: Duration,

    /// File size in bytes.
    pub file_size: u64,
}

impl LoadedPdf {
    fn new(document: Document, path: PathBuf, load_time: Duration) -> Self {
        let page_count = document.get_pages().len();
        let file_size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);

        Self {
            document,
            path,
            page_count,
            load_time,
            file_size,
        }
    }
}

/// PDF reader with configurable loading behavior.
#[derive(Debug, Clone)]
pub struct PdfReader {
    /// Reject documents without any page.
    require_pages: bool,
}

impl PdfReader {
    /// Create a reader that rejects page-less documents.
    pub fn new() -> Self {
        Self {
            require_pages: true,
        }
    }

    /// Create a reader that accepts documents with zero pages.
    pub fn lenient() -> Self {
        Self {
            require_pages: false,
        }
    }

    /// Load a single PDF document.
    ///
    /// # Errors
    ///
    /// - [`FilekitError::FileNotFound`] if nothing exists at `path`
    /// - [`FilekitError::FailedToLoadPdf`] if the file is not a readable PDF,
    ///   is encrypted, or (unless lenient) has no pages
    pub fn load(&self, path: &Path) -> Result<LoadedPdf> {
        Self::check_path_exists(path)?;

        let start = Instant::now();
        let doc = Document::load(path)
            .map_err(|e| FilekitError::failed_to_load_pdf(path, e.to_string()))?;

        if doc.is_encrypted() {
            return Err(FilekitError::failed_to_load_pdf(
                path,
                "PDF is encrypted; decrypt it first",
            ));
        }

        if self.require_pages && doc.get_pages().is_empty() {
            return Err(FilekitError::failed_to_load_pdf(path, "PDF has no pages"));
        }

        let loaded = LoadedPdf::new(doc, path.to_path_buf(), start.elapsed());
        tracing::debug!(
            path = %loaded.path.display(),
            pages = loaded.page_count,
            "loaded pdf"
        );

        Ok(loaded)
    }

    /// Make sure `path` names an existing regular file.
    pub fn check_path_exists(path: &Path) -> Result<()> {
        if !path.try_exists()? {
            return Err(FilekitError::file_not_found(path));
        }

        if !path.is_file() {
            return Err(FilekitError::failed_to_load_pdf(path, "Not a file"));
        }

        Ok(())
    }
}

impl Default for PdfReader {
    fn default() -> Self {
        Self::new()
    }
}
