//! Turns the rename source argument into an ordered batch of files.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{FilekitError, Result};

/// One file of a rename batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Where the file currently lives.
    pub path: PathBuf,
    /// File name without its final extension.
    pub base_name: OsString,
    /// Final extension including the dot, or empty.
    pub extension: OsString,
    /// 0-based position in the batch.
    pub index: usize,
}

impl FileEntry {
    /// Split `path`'s file name at its last dot, ignoring leading dots.
    ///
    /// `a.tar.gz` splits into `a.tar` and `.gz`; `.bashrc` has no extension.
    /// Names that are not valid UTF-8 are kept byte for byte.
    pub fn from_path(path: PathBuf, index: usize) -> Self {
        let base_name = path.file_stem().map(OsString::from).unwrap_or_default();
        let extension = path
            .extension()
            .map(|e| {
                let mut dotted = OsString::from(".");
                dotted.push(e);
                dotted
            })
            .unwrap_or_default();

        Self {
            path,
            base_name,
            extension,
            index,
        }
    }

    /// The file's current name.
    pub fn file_name(&self) -> OsString {
        let mut name = self.base_name.clone();
        name.push(&self.extension);
        name
    }
}

/// Resolve `source` into the files to rename.
///
/// A directory yields its immediate regular files (symlinks to files count)
/// in directory-listing order; subdirectories are not entered. A file yields
/// itself.
///
/// # Errors
///
/// - [`FilekitError::PathNotFound`] if `source` is neither
/// - [`FilekitError::Io`] if the directory cannot be listed
pub fn resolve(source: &Path) -> Result<Vec<FileEntry>> {
    if source.is_dir() {
        let mut entries = Vec::new();

        for dir_entry in WalkDir::new(source).min_depth(1).max_depth(1) {
            let dir_entry = dir_entry.map_err(io::Error::from)?;
            let path = dir_entry.into_path();

            if !path.is_file() {
                tracing::debug!(path = %path.display(), "skipping non-file entry");
                continue;
            }

            entries.push(FileEntry::from_path(path, entries.len()));
        }

        tracing::debug!(dir = %source.display(), files = entries.len(), "resolved directory");
        Ok(entries)
    } else if source.is_file() {
        Ok(vec![FileEntry::from_path(source.to_path_buf(), 0)])
    } else {
        Err(FilekitError::path_not_found(source))
    }
}
