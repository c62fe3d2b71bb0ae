//! CLI argument parsing for filekit.
//!
//! This module defines the command-line interface structure using `clap`.
//! Each subcommand's arguments convert into the matching library config.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use filekit::config::{
    AnalyzeConfig, AnalyzeSections, CollisionPolicy, CombineConfig, DEFAULT_COMBINE_OUTPUT,
    DEFAULT_TOP_WORDS, RenameConfig,
};
use filekit::error::Result;

/// Rename, convert, merge and analyze files.
#[derive(Parser, Debug)]
#[command(name = "filekit")]
#[command(version)]
#[command(about = "Rename, convert, merge and analyze files", long_about = None)]
#[command(author)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Verbose output - show every step and extra statistics
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all non-error output
    ///
    /// Warnings, errors and the analyzer report are still printed.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available operations.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rename a file or every file in a directory
    ///
    /// Examples:
    ///   filekit rename photos --prefix 2024_ --numbered
    ///   filekit rename notes --overwrite intro body outro
    ///   filekit rename report.txt --suffix _final --txtpdfconvert
    Rename(RenameArgs),

    /// Merge PDF files into one document, in the order given
    ///
    /// Examples:
    ///   filekit combine a.pdf b.pdf --output book.pdf
    ///   filekit combine "chapters/*.pdf"
    Combine(CombineArgs),

    /// Count lines, words and characters of a text file
    ///
    /// Examples:
    ///   filekit analyze notes.txt
    ///   filekit analyze notes.txt --freq --top 5 --json
    Analyze(AnalyzeArgs),
}

/// Arguments of `filekit rename`.
#[derive(Args, Debug)]
pub struct RenameArgs {
    /// File or directory to rename
    ///
    /// A directory renames its immediate files; subdirectories are left alone.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Text to put before every new name
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub prefix: String,

    /// Text to put after every new name, before the extension
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub suffix: String,

    /// Replace names with 1, 2, 3... in listing order
    ///
    /// Takes precedence over --overwrite.
    #[arg(long)]
    pub numbered: bool,

    /// Explicit new names, one per file, in listing order
    ///
    /// The number of names must match the number of files, otherwise
    /// nothing is renamed.
    #[arg(long, value_name = "NAME", num_args = 1..)]
    pub overwrite: Option<Vec<String>>,

    /// Also write .txt files as PDF into output_pdf/ and PDFs as text
    /// into output_txt/
    #[arg(long = "txtpdfconvert")]
    pub txt_pdf_convert: bool,

    /// What to do when the new name is already taken
    #[arg(long, value_name = "POLICY", default_value = "skip")]
    #[arg(value_parser = ["skip", "overwrite", "suffix"])]
    pub on_collision: String,

    /// Show the new names without renaming or converting anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

impl RenameArgs {
    /// Convert the arguments into a validated [`RenameConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if the collision policy is unknown or the config
    /// fails validation.
    pub fn to_config(&self) -> Result<RenameConfig> {
        let mut config = RenameConfig::new(&self.path);
        config.prefix = self.prefix.clone();
        config.suffix = self.suffix.clone();
        config.numbered = self.numbered;
        config.overwrite = self.overwrite.clone();
        config.convert_formats = self.txt_pdf_convert;
        config.collision = self.on_collision.parse::<CollisionPolicy>()?;
        config.dry_run = self.dry_run;

        config.validate()?;
        Ok(config)
    }
}

/// Arguments of `filekit combine`.
#[derive(Args, Debug)]
pub struct CombineArgs {
    /// PDF files or glob patterns to merge, in order
    ///
    /// Files that do not end in .pdf are skipped with a warning.
    #[arg(required = true, value_name = "FILE")]
    pub inputs: Vec<String>,

    /// Output PDF file path
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_COMBINE_OUTPUT)]
    pub output: PathBuf,

    /// Load and check the inputs without writing the output
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

impl CombineArgs {
    /// Convert the arguments into a validated [`CombineConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if the config fails validation.
    pub fn to_config(&self) -> Result<CombineConfig> {
        let mut config = CombineConfig::new(self.inputs.iter().cloned());
        config.output = self.output.clone();
        config.dry_run = self.dry_run;

        config.validate()?;
        Ok(config)
    }
}

/// Arguments of `filekit analyze`.
///
/// Without any of `--freq`, `--lines`, `--words`, `--chars` every section
/// is shown.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Text file to analyze
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Show the most frequent words
    #[arg(long)]
    pub freq: bool,

    /// Show the line count
    #[arg(long)]
    pub lines: bool,

    /// Show the word count
    #[arg(long)]
    pub words: bool,

    /// Show the character count
    #[arg(long)]
    pub chars: bool,

    /// Number of words in the frequency list
    #[arg(long, value_name = "N", default_value_t = DEFAULT_TOP_WORDS)]
    pub top: usize,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl AnalyzeArgs {
    /// Convert the arguments into a validated [`AnalyzeConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if the config fails validation.
    pub fn to_config(&self) -> Result<AnalyzeConfig> {
        let mut config = AnalyzeConfig::new(&self.file);
        config.sections = AnalyzeSections {
            freq: self.freq,
            lines: self.lines,
            words: self.words,
            chars: self.chars,
        };
        config.top = self.top;
        config.json = self.json;

        config.validate()?;
        Ok(config)
    }
}
