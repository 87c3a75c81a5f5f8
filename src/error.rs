//! Error types for the doc2md library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`Doc2MdError`] — **Fatal**: the batch cannot proceed at all (input
//!   directory missing, output directory cannot be created). Returned as
//!   `Err(Doc2MdError)` from [`crate::convert::convert_batch`].
//!
//! * [`FileError`] — **Non-fatal**: a single input file failed (corrupt
//!   workbook, unreadable PDF, write error) but the rest of the batch is
//!   fine. Stored inside [`crate::output::FileOutcome`] so callers can
//!   inspect partial success rather than losing the whole run to one bad
//!   file.
//!
//! The separation lets callers decide their own tolerance: abort on the
//! first file failure, log and continue, or collect all errors for a
//! post-run report. The CLI logs and continues.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the doc2md library.
///
/// Per-file failures use [`FileError`] and are stored in
/// [`crate::output::FileOutcome`] rather than propagated here.
#[derive(Debug, Error)]
pub enum Doc2MdError {
    /// The input directory does not exist.
    #[error("input folder not found: '{path}'\nCheck the path or pass an explicit input directory.")]
    InputDirNotFound { path: PathBuf },

    /// The input path exists but is not a directory.
    #[error("input path is not a directory: '{path}'")]
    InputNotADirectory { path: PathBuf },

    /// Could not create the output directory.
    #[error("failed to create output directory '{path}': {source}")]
    OutputDirCreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Walking the input tree failed below the root (permissions, broken
    /// mount). Individual unreadable files are skipped, not fatal.
    #[error("failed to scan input directory '{path}': {detail}")]
    ScanFailed { path: PathBuf, detail: String },

    /// Builder validation failed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// A non-fatal error for a single input file.
///
/// Stored in [`crate::output::FileOutcome`] when a file fails. The batch
/// continues with the next file regardless.
///
/// Details are plain strings (not `#[source]` chains) so the type stays
/// `Clone + Serialize` and can round-trip through the `--json` report.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
pub enum FileError {
    /// The file's extension matches no known extractor. Discovery never
    /// yields such files; this surfaces only when `convert_file` is called
    /// directly on an arbitrary path.
    #[error("unsupported file type: '{path}'")]
    Unsupported { path: PathBuf },

    /// The file could not be opened or parsed by its backend.
    #[error("failed to open '{path}': {detail}")]
    Open { path: PathBuf, detail: String },

    /// The file opened but content extraction failed partway.
    #[error("failed to extract '{path}': {detail}")]
    Extract { path: PathBuf, detail: String },

    /// A Markdown output file could not be written.
    #[error("failed to write '{path}': {detail}")]
    Write { path: PathBuf, detail: String },

    /// The build lacks the capability needed for this file kind.
    ///
    /// Reported when a PDF is encountered and the crate was compiled
    /// without the `pdf` feature. Recoverable: the file is skipped and
    /// the batch continues.
    #[error("missing capability for '{path}': {hint}")]
    MissingCapability { path: PathBuf, hint: String },
}

impl FileError {
    /// The input file this error refers to.
    pub fn path(&self) -> &PathBuf {
        match self {
            FileError::Unsupported { path }
            | FileError::Open { path, .. }
            | FileError::Extract { path, .. }
            | FileError::Write { path, .. }
            | FileError::MissingCapability { path, .. } => path,
        }
    }
}
