//! Text/PDF format conversion for the rename pipeline.
//!
//! Conversion is a side effect of renaming: the source file is left where it
//! is and the converted copy lands in a fixed directory under the output
//! root:
//!
//! | source   | output                                       |
//! |----------|----------------------------------------------|
//! | `.txt`   | `output_pdf/{prefix}{name}{suffix}.pdf`      |
//! | `.pdf`   | `output_txt/{prefix}{name}{suffix}.txt`      |
//!
//! Every failure is reported as [`FilekitError::ConversionError`] so the
//! caller can record it and move on to the next file.

pub mod pdf_to_text;
pub mod text_to_pdf;

pub use pdf_to_text::{extract_document_text, pdf_file_to_text};
pub use text_to_pdf::{TextPdfBuilder, encode_win_ansi, text_file_to_document};

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{OUTPUT_PDF_DIR, OUTPUT_TXT_DIR};
use crate::error::{FilekitError, Result};
use crate::io::PdfWriter;
use crate::rename::FileEntry;
use crate::utils::{has_extension, is_pdf_like};

/// Direction of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionKind {
    /// `.txt` to PDF.
    TextToPdf,
    /// PDF to `.txt`.
    PdfToText,
}

impl ConversionKind {
    /// Pick the conversion for `path`, if its extension has one.
    pub fn detect(path: &Path) -> Option<Self> {
        if has_extension(path, "txt") {
            Some(Self::TextToPdf)
        } else if is_pdf_like(path) {
            Some(Self::PdfToText)
        } else {
            None
        }
    }

    fn output_dir(self) -> &'static str {
        match self {
            Self::TextToPdf => OUTPUT_PDF_DIR,
            Self::PdfToText => OUTPUT_TXT_DIR,
        }
    }

    fn output_extension(self) -> &'static str {
        match self {
            Self::TextToPdf => "pdf",
            Self::PdfToText => "txt",
        }
    }
}

/// A conversion that was written successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Which way the file was converted.
    pub kind: ConversionKind,
    /// File that was read.
    pub source: PathBuf,
    /// File that was written.
    pub output: PathBuf,
}

/// Writes converted copies under a fixed output root.
#[derive(Debug, Clone)]
pub struct FormatConverter {
    output_root: PathBuf,
    writer: PdfWriter,
}

impl FormatConverter {
    /// Create a converter writing below `output_root`.
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
            writer: PdfWriter::new(),
        }
    }

    /// Where the converted copy of a file named `base_name` goes.
    pub fn output_path(
        &self,
        kind: ConversionKind,
        base_name: &OsStr,
        prefix: &str,
        suffix: &str,
    ) -> PathBuf {
        let mut name = OsString::from(prefix);
        name.push(base_name);
        name.push(suffix);
        name.push(".");
        name.push(kind.output_extension());
        self.output_root.join(kind.output_dir()).join(name)
    }

    /// Convert `entry` if its extension calls for it.
    ///
    /// Returns `Ok(None)` for files that are neither text nor PDF.
    pub fn convert(
        &self,
        entry: &FileEntry,
        prefix: &str,
        suffix: &str,
    ) -> Result<Option<Conversion>> {
        let Some(kind) = ConversionKind::detect(&entry.path) else {
            return Ok(None);
        };

        let output = self.output_path(kind, &entry.base_name, prefix, suffix);
        tracing::debug!(
            source = %entry.path.display(),
            output = %output.display(),
            ?kind,
            "converting"
        );

        let result = match kind {
            ConversionKind::TextToPdf => self.text_to_pdf(&entry.path, &output),
            ConversionKind::PdfToText => self.pdf_to_text(&entry.path, &output),
        };

        result
            .map(|()| {
                Some(Conversion {
                    kind,
                    source: entry.path.clone(),
                    output,
                })
            })
            .map_err(|err| FilekitError::conversion(&entry.path, conversion_reason(err)))
    }

    fn text_to_pdf(&self, source: &Path, output: &Path) -> Result<()> {
        let mut doc = text_file_to_document(source)?;
        self.writer.save(&mut doc, output)?;
        Ok(())
    }

    fn pdf_to_text(&self, source: &Path, output: &Path) -> Result<()> {
        let text = pdf_file_to_text(source)?;
        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(output, text)?;
        Ok(())
    }
}

/// Strip the wrapper so the reason reads cleanly inside `ConversionError`.
fn conversion_reason(err: FilekitError) -> String {
    match err {
        FilekitError::FailedToLoadPdf { reason, .. } => reason,
        FilekitError::Io { source } => source.to_string(),
        other => other.to_string(),
    }
}
