//! Configuration module for filekit.
//!
//! The CLI turns each subcommand's arguments into one of the config structs
//! below. Each config is validated once, up front, so that the operations
//! themselves never see a malformed request:
//! - [`RenameConfig`] drives the rename/convert pipeline
//! - [`CombineConfig`] drives the PDF merger
//! - [`AnalyzeConfig`] drives the text analyzer

use std::path::{MAIN_SEPARATOR, PathBuf};
use std::str::FromStr;

use crate::error::{FilekitError, Result};

/// Output path used by `combine` when none is given.
pub const DEFAULT_COMBINE_OUTPUT: &str = "combined.pdf";

/// Number of tokens listed in the frequency report by default.
pub const DEFAULT_TOP_WORDS: usize = 10;

/// Side-output directory for text files converted to PDF.
pub const OUTPUT_PDF_DIR: &str = "output_pdf";

/// Side-output directory for PDFs converted to text.
pub const OUTPUT_TXT_DIR: &str = "output_txt";

/// What to do when a rename destination is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Leave the file alone and report the collision.
    #[default]
    Skip,
    /// Replace the existing destination.
    Overwrite,
    /// Append ` (n)` to the base name until the name is free.
    Suffix,
}

impl FromStr for CollisionPolicy {
    type Err = FilekitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "overwrite" => Ok(Self::Overwrite),
            "suffix" => Ok(Self::Suffix),
            _ => Err(FilekitError::invalid_config(format!(
                "Invalid collision policy: {s}. Must be one of: skip, overwrite, suffix"
            ))),
        }
    }
}

/// Settings for one `rename` invocation.
#[derive(Debug, Clone)]
pub struct RenameConfig {
    /// File or directory to rename.
    pub source: PathBuf,

    /// Text placed before every new base name.
    pub prefix: String,

    /// Text placed after every new base name, before the extension.
    pub suffix: String,

    /// Replace base names with their 1-based position.
    pub numbered: bool,

    /// Replacement base names, matched to files by position.
    pub overwrite: Option<Vec<String>>,

    /// Convert `.txt` files to PDF and PDFs to text before renaming.
    pub convert_formats: bool,

    /// Behaviour when the destination name is already taken.
    pub collision: CollisionPolicy,

    /// Directory under which `output_pdf/` and `output_txt/` are created.
    pub output_root: PathBuf,

    /// Report the mapping without touching the filesystem.
    pub dry_run: bool,
}

impl RenameConfig {
    /// Create a config that renames `source` with every option off.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            prefix: String::new(),
            suffix: String::new(),
            numbered: false,
            overwrite: None,
            convert_formats: false,
            collision: CollisionPolicy::default(),
            output_root: PathBuf::from("."),
            dry_run: false,
        }
    }

    /// Validate the parts of the request that don't depend on the batch.
    ///
    /// The overwrite list length can only be checked once the source has
    /// been resolved; see [`crate::rename::composer::validate_overwrite`].
    pub fn validate(&self) -> Result<()> {
        if self.source.as_os_str().is_empty() {
            return Err(FilekitError::invalid_config("No path specified"));
        }

        for (label, value) in [("prefix", &self.prefix), ("suffix", &self.suffix)] {
            if contains_separator(value) {
                return Err(FilekitError::invalid_config(format!(
                    "The {label} must not contain a path separator: {value}"
                )));
            }
        }

        if let Some(names) = &self.overwrite {
            for (idx, name) in names.iter().enumerate() {
                if name.is_empty() {
                    return Err(FilekitError::invalid_overwrite(format!(
                        "entry {} is empty",
                        idx + 1
                    )));
                }
                if contains_separator(name) {
                    return Err(FilekitError::invalid_overwrite(format!(
                        "entry {} contains a path separator: {name}",
                        idx + 1
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Settings for one `combine` invocation.
#[derive(Debug, Clone)]
pub struct CombineConfig {
    /// Input files or glob patterns, in merge order.
    pub inputs: Vec<String>,

    /// Where the merged document is written.
    pub output: PathBuf,

    /// Load and report without writing the output.
    pub dry_run: bool,
}

impl CombineConfig {
    /// Create a config writing to [`DEFAULT_COMBINE_OUTPUT`].
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            output: PathBuf::from(DEFAULT_COMBINE_OUTPUT),
            dry_run: false,
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() {
            return Err(FilekitError::invalid_config("No input files specified"));
        }

        if self.output.as_os_str().is_empty() {
            return Err(FilekitError::invalid_config("Output path is empty"));
        }

        Ok(())
    }
}

/// Which parts of the analysis to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnalyzeSections {
    /// Word frequency table.
    pub freq: bool,
    /// Line count.
    pub lines: bool,
    /// Word count.
    pub words: bool,
    /// Character count.
    pub chars: bool,
}

impl AnalyzeSections {
    /// Every section switched on.
    pub fn all() -> Self {
        Self {
            freq: true,
            lines: true,
            words: true,
            chars: true,
        }
    }

    /// The sections to actually show: none selected means all of them.
    pub fn effective(self) -> Self {
        if self == Self::default() {
            Self::all()
        } else {
            self
        }
    }
}

impl FromStr for AnalyzeSections {
    type Err = FilekitError;

    /// Parse a comma-separated list such as `lines,words`.
    fn from_str(s: &str) -> Result<Self> {
        let mut sections = Self::default();

        for name in s.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            match name.to_lowercase().as_str() {
                "freq" => sections.freq = true,
                "lines" => sections.lines = true,
                "words" => sections.words = true,
                "chars" => sections.chars = true,
                "all" => sections = Self::all(),
                _ => {
                    return Err(FilekitError::invalid_config(format!(
                        "Invalid report section: {name}. Must be one of: freq, lines, words, chars, all"
                    )));
                }
            }
        }

        Ok(sections)
    }
}

/// Settings for one `analyze` invocation.
#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    /// Text file to analyze.
    pub path: PathBuf,

    /// Requested report sections.
    pub sections: AnalyzeSections,

    /// How many tokens the frequency report lists.
    pub top: usize,

    /// Print the report as JSON.
    pub json: bool,
}

impl AnalyzeConfig {
    /// Create a config showing every section.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sections: AnalyzeSections::default(),
            top: DEFAULT_TOP_WORDS,
            json: false,
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(FilekitError::invalid_config("No file specified"));
        }

        if self.top == 0 {
            return Err(FilekitError::invalid_config(
                "Frequency report size must be at least 1",
            ));
        }

        Ok(())
    }
}

fn contains_separator(value: &str) -> bool {
    value.contains('/') || value.contains(MAIN_SEPARATOR)
}
