//! I/O operations for filekit.
//!
//! - Loading PDF documents from disk ([`PdfReader`])
//! - Writing PDF documents to disk ([`PdfWriter`])

pub mod reader;
pub mod writer;

pub use reader::{LoadedPdf, PdfReader};
pub use writer::{PdfWriter, WriteOptions, WriteStatistics};
