//! CSV extraction.
//!
//! The `csv` crate does the quoting/escaping work; this module only maps
//! records into the common [`Table`] form. Cells are kept as strings with
//! no type inference, and a missing field is an empty string, never a
//! null marker. The reader runs in flexible mode so ragged files (rows
//! shorter or longer than the header) extract instead of erroring — the
//! table renderer pads or widens as needed.

use crate::error::FileError;
use crate::output::Section;
use crate::table::Table;
use std::path::Path;
use tracing::debug;

/// Extract the whole file as a single table section titled by the file
/// name.
pub fn extract(path: &Path) -> Result<Vec<Section>, FileError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| FileError::Open {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| FileError::Extract {
            path: path.to_path_buf(),
            detail: format!("reading header: {e}"),
        })?
        .iter()
        .map(String::from)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| FileError::Extract {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;
        rows.push(record.iter().map(String::from).collect::<Vec<String>>());
    }
    debug!("{}: {} data row(s)", path.display(), rows.len());

    // An entirely empty file has no header record either; headers() then
    // yields an empty record and the table renders as the placeholder.
    let table = Table::new(columns, rows);

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(vec![Section::new(file_name, table.to_markdown())])
}
