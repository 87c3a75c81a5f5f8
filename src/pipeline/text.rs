//! Plain-text extraction.
//!
//! The bytes are read raw and decoded with an explicit replacement
//! policy: invalid UTF-8 sequences become U+FFFD instead of failing the
//! file. A text file can therefore only fail on I/O, never on content.

use crate::error::FileError;
use crate::output::Section;
use std::path::Path;

/// Read the file verbatim as one section titled by the file name.
pub fn extract(path: &Path) -> Result<Vec<Section>, FileError> {
    let bytes = std::fs::read(path).map_err(|e| FileError::Open {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;
    let body = String::from_utf8_lossy(&bytes).into_owned();

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(vec![Section::new(file_name, body)])
}
