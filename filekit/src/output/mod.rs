//! Output formatting and display for filekit.
//!
//! This module turns operation reports into user-facing messages:
//! - per-file notices for rename batches and merges
//! - summary lines
//! - the text analyzer report, as plain text or JSON
//!
//! # Examples
//!
//! ```no_run
//! use filekit::config::RenameConfig;
//! use filekit::output::{OutputFormatter, display_rename_report};
//! use filekit::rename::rename_files;
//!
//! # fn example() -> filekit::Result<()> {
//! let formatter = OutputFormatter::default();
//! let report = rename_files(&RenameConfig::new("docs"))?;
//! display_rename_report(&formatter, &report);
//! # Ok(())
//! # }
//! ```

pub mod formatter;

pub use formatter::{MessageLevel, OutputFormatter};

use serde_json::{Map, Value};

use crate::analyze::TextStatistics;
use crate::config::AnalyzeSections;
use crate::error::{FilekitError, Result};
use crate::io::WriteStatistics;
use crate::merge::{InputStatus, MergeOutcome};
use crate::rename::{RenameReport, RenameStatus};

/// Display every per-file result of a rename batch, then a summary.
pub fn display_rename_report(formatter: &OutputFormatter, report: &RenameReport) {
    for file in &report.files {
        match &file.conversion {
            Some(Ok(conversion)) => formatter.success(&format!(
                "Converted {} -> {}",
                conversion.source.display(),
                conversion.output.display()
            )),
            Some(Err(err)) => formatter.warning(&err.to_string()),
            None => {}
        }

        match &file.outcome {
            Ok(outcome) => match outcome.status {
                RenameStatus::Renamed => formatter.success(&format!(
                    "Renamed {} -> {}",
                    outcome.from.display(),
                    outcome.to.display()
                )),
                RenameStatus::Planned => formatter.info(&format!(
                    "Would rename {} -> {}",
                    outcome.from.display(),
                    outcome.to.display()
                )),
                RenameStatus::Unchanged => {
                    formatter.debug(&format!("{} already has that name", outcome.from.display()))
                }
            },
            Err(err) => formatter.warning(&err.to_string()),
        }
    }

    let failures = report.failures().len();
    let mut summary = format!(
        "{} of {} file(s) renamed",
        report.renamed_count(),
        report.files.len()
    );
    if report.converted_count() > 0 {
        summary.push_str(&format!(", {} converted", report.converted_count()));
    }
    if failures > 0 {
        summary.push_str(&format!(", {failures} problem(s)"));
    }
    formatter.info(&summary);
}

/// Display the per-input notices of a merge and its summary.
pub fn display_merge_outcome(formatter: &OutputFormatter, outcome: &MergeOutcome) {
    for input in &outcome.inputs {
        match &input.status {
            InputStatus::Merged { pages } => {
                formatter.debug(&format!("Added {} ({pages} page(s))", input.path.display()))
            }
            InputStatus::Skipped => formatter.warning(&format!(
                "Skipping {}: not a PDF file",
                input.path.display()
            )),
            InputStatus::Failed(err) => formatter.warning(&err.to_string()),
        }
    }

    let stats = &outcome.statistics;
    formatter.info(&format!(
        "Merged {} file(s): {} page(s), {}",
        stats.files_merged,
        stats.total_pages,
        stats.format_input_size()
    ));
    formatter.detail("Skipped", &stats.files_skipped.to_string());
    formatter.detail("Failed", &stats.files_failed.to_string());
    formatter.detail("Time", &format!("{:.2}s", stats.merge_time.as_secs_f64()));
}

/// Display where a merged document was written.
pub fn display_write_statistics(formatter: &OutputFormatter, stats: &WriteStatistics) {
    formatter.success(&format!(
        "Wrote {} ({})",
        stats.output_path.display(),
        stats.format_file_size()
    ));
    formatter.detail("Write time", &format!("{:.2}s", stats.write_time.as_secs_f64()));
}

/// Plain-text lines of an analyzer report, limited to `sections`.
pub fn statistics_lines(stats: &TextStatistics, sections: AnalyzeSections) -> Vec<String> {
    let sections = sections.effective();
    let mut lines = Vec::new();

    if sections.lines {
        lines.push(format!("Lines: {}", stats.lines));
    }
    if sections.words {
        lines.push(format!("Words: {}", stats.words));
    }
    if sections.chars {
        lines.push(format!("Characters: {}", stats.chars));
    }
    if sections.freq {
        lines.push("Word frequency:".to_string());
        lines.extend(
            stats
                .top_words
                .iter()
                .map(|w| format!("  {}: {}", w.word, w.count)),
        );
    }

    lines
}

/// JSON object of an analyzer report, limited to `sections`.
pub fn statistics_json(stats: &TextStatistics, sections: AnalyzeSections) -> Value {
    let sections = sections.effective();
    let mut object = Map::new();

    if sections.lines {
        object.insert("lines".into(), stats.lines.into());
    }
    if sections.words {
        object.insert("words".into(), stats.words.into());
    }
    if sections.chars {
        object.insert("chars".into(), stats.chars.into());
    }
    if sections.freq {
        let top_words = serde_json::to_value(&stats.top_words).unwrap_or(Value::Null);
        object.insert("top_words".into(), top_words);
    }

    Value::Object(object)
}

/// Print an analyzer report.
///
/// The report is the command's output, so quiet mode does not hide it.
///
/// # Errors
///
/// Returns [`FilekitError::UnknownError`] if the JSON cannot be rendered.
pub fn display_statistics(
    formatter: &OutputFormatter,
    stats: &TextStatistics,
    sections: AnalyzeSections,
    json: bool,
) -> Result<()> {
    if json {
        let rendered = serde_json::to_string_pretty(&statistics_json(stats, sections))
            .map_err(|e| FilekitError::unknown(format!("Failed to render JSON: {e}")))?;
        formatter.raw(&rendered);
    } else {
        for line in statistics_lines(stats, sections) {
            formatter.raw(&line);
        }
    }

    Ok(())
}
