//! Batch renaming with optional text/PDF conversion.
//!
//! A batch runs in three phases:
//!
//! 1. **Pre-flight**: validate the config, resolve the source into
//!    [`FileEntry`]s and check the overwrite list against the batch size.
//!    Any failure here returns an error and nothing on disk changes.
//! 2. **Per file**, in resolved order: compose the new name, convert the
//!    file if requested, rename it.
//! 3. **Report**: every file gets a [`FileReport`]; conversion and rename
//!    failures are recorded there and the batch keeps going.
//!
//! # Examples
//!
//! ```no_run
//! use filekit::config::RenameConfig;
//! use filekit::rename::rename_files;
//!
//! # fn example() -> filekit::Result<()> {
//! let mut config = RenameConfig::new("photos");
//! config.prefix = "holiday_".to_string();
//! config.numbered = true;
//!
//! let report = rename_files(&config)?;
//! println!("{} file(s) renamed", report.renamed_count());
//! # Ok(())
//! # }
//! ```

pub mod composer;
pub mod renamer;
pub mod resolver;

pub use composer::{ComposedName, NameOptions, compose, validate_overwrite};
pub use renamer::{RenameOutcome, RenameStatus, Renamer};
pub use resolver::{FileEntry, resolve};

use std::path::PathBuf;

use crate::config::RenameConfig;
use crate::convert::{Conversion, FormatConverter};
use crate::error::{FilekitError, Result};

/// Result of processing one file of a batch.
#[derive(Debug)]
pub struct FileReport {
    /// Position in the batch.
    pub index: usize,
    /// Path before renaming.
    pub source: PathBuf,
    /// Conversion result, if conversion was attempted.
    pub conversion: Option<Result<Conversion>>,
    /// Rename result.
    pub outcome: Result<RenameOutcome>,
}

/// Per-file results of a rename batch, in batch order.
#[derive(Debug, Default)]
pub struct RenameReport {
    /// One report per resolved file.
    pub files: Vec<FileReport>,
}

impl RenameReport {
    /// Number of files actually moved (or planned to be, in a dry run).
    pub fn renamed_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| {
                matches!(
                    &f.outcome,
                    Ok(RenameOutcome {
                        status: RenameStatus::Renamed | RenameStatus::Planned,
                        ..
                    })
                )
            })
            .count()
    }

    /// Number of successful conversions.
    pub fn converted_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.conversion, Some(Ok(_))))
            .count()
    }

    /// Every per-file error, conversion errors first within a file.
    pub fn failures(&self) -> Vec<&FilekitError> {
        self.files
            .iter()
            .flat_map(|f| {
                let conversion = f.conversion.as_ref().and_then(|c| c.as_ref().err());
                conversion.into_iter().chain(f.outcome.as_ref().err())
            })
            .collect()
    }
}

/// Run a rename batch.
///
/// # Errors
///
/// Only pre-flight problems are returned as errors:
/// [`FilekitError::InvalidConfig`], [`FilekitError::PathNotFound`],
/// [`FilekitError::InvalidOverwrite`]. Per-file problems end up in the
/// report.
pub fn rename_files(config: &RenameConfig) -> Result<RenameReport> {
    config.validate()?;

    let entries = resolve(&config.source)?;
    validate_overwrite(config.overwrite.as_deref(), entries.len())?;

    let options = NameOptions {
        prefix: &config.prefix,
        suffix: &config.suffix,
        numbered: config.numbered,
        overwrite: config.overwrite.as_deref(),
    };
    let converter = (config.convert_formats && !config.dry_run)
        .then(|| FormatConverter::new(&config.output_root));
    let mut renamer = Renamer::new(config.collision, config.dry_run);

    let mut report = RenameReport::default();

    for entry in &entries {
        let name = compose(entry, &options);

        let conversion = converter
            .as_ref()
            .and_then(|c| c.convert(entry, &config.prefix, &config.suffix).transpose());
        if let Some(Err(err)) = &conversion {
            tracing::warn!("{err}");
        }

        let outcome = renamer.rename(&entry.path, &name);
        if let Err(err) = &outcome {
            tracing::warn!("{err}");
        }

        report.files.push(FileReport {
            index: entry.index,
            source: entry.path.clone(),
            conversion,
            outcome,
        });
    }

    Ok(report)
}
