//! filekit - Rename, convert, merge and analyze files.

mod cli;

use clap::Parser;
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

use crate::cli::{AnalyzeArgs, Cli, CombineArgs, Command, RenameArgs};
use filekit::analyze::analyze_file;
use filekit::error::FilekitError;
use filekit::merge::{merge_pdfs, write_merged};
use filekit::output::{
    OutputFormatter, display_merge_outcome, display_rename_report, display_statistics,
    display_write_statistics,
};
use filekit::rename::rename_files;

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    let formatter = OutputFormatter::new(cli.quiet, cli.verbose);

    if let Err(err) = run(cli, &formatter) {
        formatter.error(&format!("Error: {err}"));
        process::exit(err.exit_code());
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the level picked here.
fn init_tracing(cli: &Cli) {
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli, formatter: &OutputFormatter) -> Result<(), FilekitError> {
    match cli.command {
        Command::Rename(args) => run_rename(&args, formatter),
        Command::Combine(args) => run_combine(&args, formatter),
        Command::Analyze(args) => run_analyze(&args, formatter),
    }
}

fn run_rename(args: &RenameArgs, formatter: &OutputFormatter) -> Result<(), FilekitError> {
    let config = args.to_config()?;

    if config.dry_run {
        formatter.info("Dry run: nothing will be renamed or converted");
    }
    formatter.debug(&format!("Renaming files in {}", config.source.display()));

    let report = rename_files(&config)?;
    display_rename_report(formatter, &report);

    Ok(())
}

fn run_combine(args: &CombineArgs, formatter: &OutputFormatter) -> Result<(), FilekitError> {
    let config = args.to_config()?;

    formatter.info("Merging documents...");
    let mut outcome = merge_pdfs(&config)?;
    display_merge_outcome(formatter, &outcome);

    let mut document = outcome.take_document()?;

    if config.dry_run {
        formatter.success("Dry run completed successfully");
        formatter.info(&format!("  Output would be: {}", config.output.display()));
        return Ok(());
    }

    let write_stats = write_merged(&mut document, &config.output)?;
    display_write_statistics(formatter, &write_stats);

    Ok(())
}

fn run_analyze(args: &AnalyzeArgs, formatter: &OutputFormatter) -> Result<(), FilekitError> {
    let config = args.to_config()?;
    let stats = analyze_file(&config)?;
    display_statistics(formatter, &stats, config.sections, config.json)
}
