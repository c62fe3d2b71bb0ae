//! Computes new file names for a rename batch.
//!
//! Precedence, highest first:
//! 1. numbering: the base name becomes the 1-based index
//! 2. overwrite list: the entry at the file's index
//! 3. the original base name
//!
//! Prefix and suffix wrap whichever base name won; the extension is kept.

use std::ffi::OsString;

use crate::error::{FilekitError, Result};
use crate::rename::FileEntry;

/// Naming options shared by every file in a batch.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameOptions<'a> {
    /// Text placed before the base name.
    pub prefix: &'a str,
    /// Text placed after the base name.
    pub suffix: &'a str,
    /// Use the 1-based index as base name.
    pub numbered: bool,
    /// Replacement base names, by index.
    pub overwrite: Option<&'a [String]>,
}

/// A computed destination name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedName {
    /// `{prefix}{base}{suffix}`.
    pub stem: OsString,
    /// Extension including the dot, or empty.
    pub extension: OsString,
}

impl ComposedName {
    /// Full file name.
    pub fn file_name(&self) -> OsString {
        let mut name = self.stem.clone();
        name.push(&self.extension);
        name
    }

    /// Same name with ` (n)` appended to the stem.
    pub fn with_counter(&self, n: usize) -> Self {
        let mut stem = self.stem.clone();
        stem.push(format!(" ({n})"));
        Self {
            stem,
            extension: self.extension.clone(),
        }
    }
}

/// Check an overwrite list against the size of the batch.
///
/// Must pass before any file in the batch is touched.
///
/// # Errors
///
/// [`FilekitError::InvalidOverwrite`] if the list length differs from
/// `file_count` or any entry is empty.
pub fn validate_overwrite(overwrite: Option<&[String]>, file_count: usize) -> Result<()> {
    let Some(names) = overwrite else {
        return Ok(());
    };

    if names.len() != file_count {
        return Err(FilekitError::invalid_overwrite(format!(
            "{} name(s) given for {} file(s)",
            names.len(),
            file_count
        )));
    }

    if let Some(idx) = names.iter().position(|n| n.is_empty()) {
        return Err(FilekitError::invalid_overwrite(format!(
            "entry {} is empty",
            idx + 1
        )));
    }

    Ok(())
}

/// Compute the destination name for `entry`.
pub fn compose(entry: &FileEntry, options: &NameOptions<'_>) -> ComposedName {
    let base = if options.numbered {
        OsString::from((entry.index + 1).to_string())
    } else if let Some(name) = options.overwrite.and_then(|names| names.get(entry.index)) {
        OsString::from(name)
    } else {
        entry.base_name.clone()
    };

    let mut stem = OsString::from(options.prefix);
    stem.push(base);
    stem.push(options.suffix);

    ComposedName {
        stem,
        extension: entry.extension.clone(),
    }
}
