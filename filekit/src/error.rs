//! Error types for filekit.
//!
//! Every operation in the crate returns [`FilekitError`]. Errors fall into
//! two groups:
//!
//! - **Pre-flight errors** (`PathNotFound`, `InvalidOverwrite`,
//!   `InvalidConfig`) abort a whole batch before anything on disk changes.
//! - **Per-item errors** (`ConversionError`, `FailedToLoadPdf`,
//!   `FileNotFound` for a combine entry, `DestinationExists`) are recorded
//!   in the operation's report and the loop moves on.

use std::io;
use std::path::PathBuf;

/// Result type alias for filekit operations.
pub type Result<T> = std::result::Result<T, FilekitError>;

/// Main error type for filekit operations.
#[derive(Debug, thiserror::Error)]
pub enum FilekitError {
    /// Rename target is neither a file nor a directory.
    #[error("Path not found: {}", .path.display())]
    PathNotFound {
        /// The path given on the command line.
        path: PathBuf,
    },

    /// Overwrite list does not line up with the resolved batch.
    #[error("Invalid overwrite list: {reason}")]
    InvalidOverwrite {
        /// What is wrong with the list.
        reason: String,
    },

    /// Input file was not found.
    #[error("File not found: {}", .path.display())]
    FileNotFound {
        /// Path to the missing file.
        path: PathBuf,
    },

    /// A text/PDF conversion failed for one file.
    #[error("Failed to convert {}\n  Reason: {reason}", .path.display())]
    ConversionError {
        /// File being converted.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// A PDF could not be parsed.
    #[error("Failed to load PDF: {}\n  Reason: {reason}", .path.display())]
    FailedToLoadPdf {
        /// Path to the PDF file.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// Rename destination is already taken.
    #[error(
        "Destination already exists: {}\n  Use --on-collision overwrite or suffix to proceed",
        .path.display()
    )]
    DestinationExists {
        /// The occupied destination.
        path: PathBuf,
    },

    /// Writing the merged document failed.
    #[error("Failed to write merged PDF: {}\n  Reason: {source}", .path.display())]
    MergeWriteError {
        /// Output path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Nothing survived the combine loop.
    #[error("No PDF files to merge")]
    NoFilesToMerge,

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong with the configuration.
        message: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },

    /// Anything a collaborator reported that fits no other kind.
    #[error("{message}")]
    UnknownError {
        /// Error message.
        message: String,
    },
}

impl From<lopdf::Error> for FilekitError {
    fn from(err: lopdf::Error) -> Self {
        Self::unknown(err.to_string())
    }
}

impl From<glob::PatternError> for FilekitError {
    fn from(err: glob::PatternError) -> Self {
        Self::invalid_config(format!("Invalid glob pattern: {err}"))
    }
}

impl FilekitError {
    /// Create a PathNotFound error.
    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::PathNotFound { path: path.into() }
    }

    /// Create an InvalidOverwrite error.
    pub fn invalid_overwrite(reason: impl Into<String>) -> Self {
        Self::InvalidOverwrite {
            reason: reason.into(),
        }
    }

    /// Create a FileNotFound error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a ConversionError.
    pub fn conversion(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ConversionError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a FailedToLoadPdf error.
    pub fn failed_to_load_pdf(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::FailedToLoadPdf {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a DestinationExists error.
    pub fn destination_exists(path: impl Into<PathBuf>) -> Self {
        Self::DestinationExists { path: path.into() }
    }

    /// Create a MergeWriteError.
    pub fn merge_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::MergeWriteError {
            path: path.into(),
            source,
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an UnknownError with a custom message.
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::UnknownError {
            message: message.into(),
        }
    }

    /// Whether a batch loop records this error and keeps going.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::FileNotFound { .. }
                | Self::ConversionError { .. }
                | Self::FailedToLoadPdf { .. }
                | Self::DestinationExists { .. }
        )
    }

    /// Get the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidOverwrite { .. } => 1,
            Self::NoFilesToMerge => 1,
            Self::InvalidConfig { .. } => 1,
            Self::UnknownError { .. } => 1,
            Self::PathNotFound { .. } => 2,
            Self::FileNotFound { .. } => 2,
            Self::ConversionError { .. } => 3,
            Self::FailedToLoadPdf { .. } => 3,
            Self::DestinationExists { .. } => 4,
            Self::MergeWriteError { .. } => 5,
            Self::Io { .. } => 5,
        }
    }
}
