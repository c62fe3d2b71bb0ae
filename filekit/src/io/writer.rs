//! PDF writing and saving operations.
//!
//! Writes go through a buffered writer and, by default, land in a sibling
//! temp file that is renamed over the destination once complete, so a failed
//! save never leaves a truncated PDF behind.
//!
//! # Examples
//!
//! ```no_run
//! use filekit::io::PdfWriter;
//! use lopdf::Document;
//! use std::path::Path;
//!
//! # fn example(mut doc: Document) -> std::io::Result<()> {
//! let writer = PdfWriter::new();
//! writer.save(&mut doc, Path::new("output.pdf"))?;
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::utils::format_file_size;

/// Options for writing PDF files.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Use atomic writes (write to temp file, then rename).
    pub atomic: bool,

    /// Compress content streams before writing.
    pub compress: bool,

    /// Buffer size for writing (in bytes).
    pub buffer_size: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            atomic: true,
            compress: true,
            buffer_size: 8192,
        }
    }
}

/// Statistics about a write operation.
#[derive(Debug, Clone)]
pub struct WriteStatistics {
    /// Time taken to write the file.
    pub write_time: Duration,

    /// Size of the written file in bytes.
    pub file_size: u64,

    /// Path where the file was written.
    pub output_path: PathBuf,
}

impl WriteStatistics {
    /// Format file size as human-readable string.
    pub fn format_file_size(&self) -> String {
        format_file_size(self.file_size)
    }
}

/// PDF writer with configurable behavior.
#[derive(Debug, Clone, Default)]
pub struct PdfWriter {
    options: WriteOptions,
}

impl PdfWriter {
    /// Create a new PDF writer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with custom options.
    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    /// Save `doc` to `path`, creating missing parent directories.
    ///
    /// Errors are plain I/O errors; callers attach the meaning
    /// (merge write failure, conversion failure).
    pub fn save(&self, doc: &mut Document, path: &Path) -> io::Result<WriteStatistics> {
        let start = Instant::now();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        if self.options.compress {
            doc.compress();
        }

        let write_path = if self.options.atomic {
            temp_path_for(path)
        } else {
            path.to_path_buf()
        };

        if let Err(err) = self.write_to(doc, &write_path) {
            if self.options.atomic {
                let _ = fs::remove_file(&write_path);
            }
            return Err(err);
        }

        if self.options.atomic {
            fs::rename(&write_path, path).inspect_err(|_| {
                let _ = fs::remove_file(&write_path);
            })?;
        }

        let file_size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        tracing::debug!(path = %path.display(), bytes = file_size, "wrote pdf");

        Ok(WriteStatistics {
            write_time: start.elapsed(),
            file_size,
            output_path: path.to_path_buf(),
        })
    }

    fn write_to(&self, doc: &mut Document, path: &Path) -> io::Result<()> {
        let file = fs::File::create(path)?;
        let mut writer = BufWriter::with_capacity(self.options.buffer_size, file);

        doc.save_to(&mut writer).map_err(io::Error::other)?;
        writer.flush()
    }
}

/// `out.pdf` becomes `.out.pdf.tmp` in the same directory.
fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.tmp"))
}
