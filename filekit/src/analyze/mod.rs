//! Text file statistics.
//!
//! Counts follow plain Rust string semantics: lines as produced by
//! [`str::lines`], words as whitespace-separated tokens, characters as
//! Unicode scalar values. Word frequency is case-sensitive and compares
//! tokens exactly, punctuation included.
//!
//! # Examples
//!
//! ```
//! use filekit::analyze::analyze_text;
//!
//! let stats = analyze_text("a b\nc", 10);
//! assert_eq!((stats.lines, stats.words, stats.chars), (2, 3, 5));
//! ```

use serde::Serialize;
use std::collections::HashMap;
use std::fs;

use crate::config::AnalyzeConfig;
use crate::error::{FilekitError, Result};

/// How often one token occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    /// The token.
    pub word: String,
    /// Number of occurrences.
    pub count: usize,
}

/// Statistics for one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextStatistics {
    /// Number of lines.
    pub lines: usize,
    /// Number of whitespace-separated tokens.
    pub words: usize,
    /// Number of characters.
    pub chars: usize,
    /// Most frequent tokens, most frequent first.
    pub top_words: Vec<WordCount>,
}

/// Compute statistics for `text`, keeping the `top` most frequent tokens.
///
/// Tokens with equal counts keep the order in which they first appeared.
pub fn analyze_text(text: &str, top: usize) -> TextStatistics {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    let mut words = 0;

    for (position, token) in text.split_whitespace().enumerate() {
        counts.entry(token).or_insert((0, position)).0 += 1;
        words += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(word, (count, first_seen))| (word, count, first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    TextStatistics {
        lines: text.lines().count(),
        words,
        chars: text.chars().count(),
        top_words: ranked
            .into_iter()
            .take(top)
            .map(|(word, count, _)| WordCount {
                word: word.to_string(),
                count,
            })
            .collect(),
    }
}

/// Read the configured file and compute its statistics.
///
/// # Errors
///
/// - [`FilekitError::InvalidConfig`] if the config is invalid
/// - [`FilekitError::FileNotFound`] if the file does not exist
/// - [`FilekitError::Io`] if it cannot be read or is not UTF-8
pub fn analyze_file(config: &AnalyzeConfig) -> Result<TextStatistics> {
    config.validate()?;
    if !config.path.is_file() {
        return Err(FilekitError::file_not_found(&config.path));
    }

    let text = fs::read_to_string(&config.path)?;
    let stats = analyze_text(&text, config.top);
    tracing::debug!(
        path = %config.path.display(),
        lines = stats.lines,
        words = stats.words,
        "analyzed text"
    );

    Ok(stats)
}
