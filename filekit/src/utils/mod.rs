//! Utilities for path collection and extension checks.

use crate::Result;
use std::path::{Path, PathBuf};

/// Expand shell-style patterns into filesystem paths, preserving order.
///
/// Inputs without glob metacharacters pass through untouched even when
/// nothing exists there, so the caller can report the missing file itself.
/// A pattern that matches nothing is passed through the same way. An input
/// naming an existing file is taken literally even if it contains `[`, `*`
/// or `?`.
///
/// Errors:
/// - Propagates `glob` parse errors.
pub fn collect_paths_for_patterns<T>(patterns: T) -> Result<Vec<PathBuf>>
where
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    let mut resolved_paths = Vec::new();

    for pattern in patterns.into_iter() {
        resolved_paths.extend(collect_paths_for_pattern(pattern.as_ref())?);
    }

    Ok(resolved_paths)
}

fn collect_paths_for_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
    if !is_glob_pattern(pattern) || Path::new(pattern).exists() {
        return Ok(vec![PathBuf::from(pattern)]);
    }

    let mut resolved_paths = Vec::new();
    for entry in glob::glob(pattern)? {
        match entry {
            Ok(path) => resolved_paths.push(path),
            Err(err) => tracing::warn!("skipping unreadable glob match: {err}"),
        }
    }

    if resolved_paths.is_empty() {
        tracing::debug!(pattern, "pattern matched nothing; keeping it literally");
        resolved_paths.push(PathBuf::from(pattern));
    }

    Ok(resolved_paths)
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains(['*', '?', '['])
}

/// Case-insensitive check of a path's final extension.
pub fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

/// Whether a path ends in a case-insensitive `.pdf` suffix.
pub fn is_pdf_like(path: &Path) -> bool {
    has_extension(path, "pdf")
}

/// Format file size as human-readable string.
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{size} bytes")
    }
}
