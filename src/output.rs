//! Result types describing what a batch run produced.
//!
//! Everything here derives `Serialize` so the CLI can emit the whole
//! report as JSON (`--json`) without a separate presentation layer.

use crate::config::FileKind;
use crate::error::FileError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One extracted (title, body) pair.
///
/// Single-sheet spreadsheets, CSV, text, and Word documents yield exactly
/// one section titled by the original file name. Multi-sheet spreadsheets
/// yield one section per sheet, titled by the sheet name. The title is
/// used verbatim in the Markdown heading; only derived file names are
/// sanitized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub body: String,
}

impl Section {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// The result of converting (or failing to convert) one input file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileOutcome {
    /// The discovered input path.
    pub input: PathBuf,
    /// The kind the dispatcher routed this file to.
    pub kind: FileKind,
    /// Markdown files written for this input, in section order. Empty
    /// when the file failed.
    pub written: Vec<PathBuf>,
    /// The per-file error, if the conversion failed. `None` means every
    /// section was written.
    pub error: Option<FileError>,
}

impl FileOutcome {
    /// Whether this file converted without error.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Aggregate report for a whole batch run.
///
/// Returned by [`crate::convert::convert_batch`] even when individual
/// files failed; a fatal [`crate::error::Doc2MdError`] is raised only for
/// setup problems.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Files that converted successfully.
    pub converted: usize,
    /// Files that failed and were skipped.
    pub failed: usize,
    /// The output root, resolved to an absolute path when possible.
    pub output_root: PathBuf,
    /// Per-file outcomes, in discovery order.
    pub files: Vec<FileOutcome>,
}

impl BatchSummary {
    /// Outcomes for files that failed, in discovery order.
    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.files.iter().filter(|f| !f.is_success())
    }
}
