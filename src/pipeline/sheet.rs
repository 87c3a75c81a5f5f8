//! Spreadsheet extraction via calamine.
//!
//! Workbooks are opened with `open_workbook_auto`, so both `.xlsx` and
//! legacy `.xls` are handled by the same code path. Every cell is coerced
//! to its display string — no type inference, dates and floats render the
//! way calamine formats them, and empty cells become empty strings.
//!
//! Sectioning rule: a single-sheet workbook produces one section titled
//! by the original file name; a multi-sheet workbook produces one section
//! per sheet titled by the sheet name. The dispatcher turns the former
//! into `<out>/<stem>.md` and the latter into `<out>/<stem>/<sheet>.md`.

use crate::error::FileError;
use crate::output::Section;
use crate::table::Table;
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;
use tracing::debug;

/// Extract one section per sheet (or one for the whole file when the
/// workbook has a single sheet).
pub fn extract(path: &Path) -> Result<Vec<Section>, FileError> {
    let mut workbook = open_workbook_auto(path).map_err(|e| FileError::Open {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;

    let sheet_names: Vec<String> = workbook.sheet_names().to_vec();
    debug!(
        "workbook {} has {} sheet(s)",
        path.display(),
        sheet_names.len()
    );

    let mut tables = Vec::with_capacity(sheet_names.len());
    for name in &sheet_names {
        let range = workbook
            .worksheet_range(name)
            .map_err(|e| FileError::Extract {
                path: path.to_path_buf(),
                detail: format!("sheet '{name}': {e}"),
            })?;
        tables.push(range_to_table(&range));
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if tables.len() == 1 {
        let table = tables.into_iter().next().unwrap_or_default();
        return Ok(vec![Section::new(file_name, table.to_markdown())]);
    }

    Ok(sheet_names
        .into_iter()
        .zip(tables)
        .map(|(name, table)| Section::new(name, table.to_markdown()))
        .collect())
}

/// Convert a calamine cell range into the common [`Table`] form.
///
/// The first row of the used range supplies the column names, matching
/// spreadsheet-with-header semantics; remaining rows are data. An empty
/// range yields an empty table (rendered as the empty-table placeholder).
fn range_to_table(range: &Range<Data>) -> Table {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Table::default();
    };

    let columns: Vec<String> = header.iter().map(cell_to_string).collect();
    let data: Vec<Vec<String>> = rows
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    Table::new(columns, data)
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}
