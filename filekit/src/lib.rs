//! filekit - Rename, convert, merge and analyze files.
//!
//! This library backs the `filekit` command and provides:
//!
//! - Batch renaming with prefix, suffix, numbering or explicit names
//! - Text to PDF and PDF to text conversion
//! - Sequential PDF merging
//! - Word, line and character statistics for text files
//!
//! # Examples
//!
//! ## Renaming a directory
//!
//! ```no_run
//! use filekit::config::RenameConfig;
//! use filekit::rename::rename_files;
//!
//! # fn example() -> filekit::Result<()> {
//! let mut config = RenameConfig::new("scans");
//! config.prefix = "2024_".to_string();
//! config.numbered = true;
//!
//! let report = rename_files(&config)?;
//! println!("{} file(s) renamed", report.renamed_count());
//! # Ok(())
//! # }
//! ```
//!
//! ## Merging PDFs
//!
//! ```no_run
//! use filekit::config::CombineConfig;
//! use filekit::merge::{merge_pdfs, write_merged};
//!
//! # fn example() -> filekit::Result<()> {
//! let config = CombineConfig::new(["intro.pdf", "chapters/*.pdf"]);
//! let mut outcome = merge_pdfs(&config)?;
//! let mut document = outcome.take_document()?;
//! write_merged(&mut document, &config.output)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analyze;
pub mod config;
pub mod convert;
pub mod error;
pub mod io;
pub mod merge;
pub mod output;
pub mod rename;
pub mod utils;

// Re-export commonly used types
pub use error::{FilekitError, Result};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
