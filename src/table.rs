//! Tabular data and its Markdown rendering.
//!
//! [`Table`] is the common intermediate form for the spreadsheet and CSV
//! extractors: ordered column names plus ordered rows of string cells.
//! No cell typing, no uniqueness requirements on names, ragged rows
//! permitted — rendering pads with empty cells.
//!
//! Rendering is total. The normal output is a GFM pipe table; when a cell
//! or header contains a line break a pipe table cannot represent it, so
//! the renderer falls back to a fixed-width code-block layout of the same
//! data instead of failing.

use serde::{Deserialize, Serialize};

/// Placeholder emitted for a table with no columns and no rows.
pub const EMPTY_TABLE_PLACEHOLDER: &str = "_(Empty table)_";

/// An ordered grid of string cells with labelled columns.
///
/// Column names may be empty and need not be unique. Rows may be shorter
/// or longer than the header; missing cells render as empty strings,
/// never as a null marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    /// True when the table has neither columns nor rows.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.rows.is_empty()
    }

    /// Widest row, counting the header as a row.
    fn width(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.columns.len()))
            .max()
            .unwrap_or(0)
    }

    /// Render the table as Markdown, ending with exactly one newline.
    ///
    /// Empty table → [`EMPTY_TABLE_PLACEHOLDER`]. Cells containing line
    /// breaks route the whole table to [`Table::to_code_block`].
    pub fn to_markdown(&self) -> String {
        if self.is_empty() {
            return format!("{EMPTY_TABLE_PLACEHOLDER}\n");
        }

        let has_line_breaks = self
            .columns
            .iter()
            .chain(self.rows.iter().flatten())
            .any(|cell| cell.contains('\n') || cell.contains('\r'));
        if has_line_breaks {
            return self.to_code_block();
        }

        let width = self.width();
        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(pipe_row(&self.columns, width));
        lines.push(format!("|{}", " --- |".repeat(width)));
        for row in &self.rows {
            lines.push(pipe_row(row, width));
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    /// Fixed-width, monospace rendering inside a code fence.
    ///
    /// Used as the fallback when pipe-table rendering is not feasible;
    /// also total. Line breaks inside cells are flattened to spaces so
    /// column alignment survives.
    pub fn to_code_block(&self) -> String {
        let width = self.width();
        let flat = |cell: &str| cell.replace(['\n', '\r'], " ");

        // Per-column display widths across header and body.
        let mut col_widths = vec![0usize; width];
        for (i, name) in self.columns.iter().enumerate() {
            col_widths[i] = col_widths[i].max(flat(name).chars().count());
        }
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                col_widths[i] = col_widths[i].max(flat(cell).chars().count());
            }
        }

        let render_row = |cells: &[String]| -> String {
            let mut parts = Vec::with_capacity(width);
            for i in 0..width {
                let text = cells.get(i).map(|c| flat(c)).unwrap_or_default();
                parts.push(format!("{text:<w$}", w = col_widths[i]));
            }
            parts.join("  ").trim_end().to_string()
        };

        let mut lines = Vec::with_capacity(self.rows.len() + 3);
        lines.push("```".to_string());
        if !self.columns.is_empty() {
            lines.push(render_row(&self.columns));
        }
        for row in &self.rows {
            lines.push(render_row(row));
        }
        lines.push("```".to_string());

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

/// Render one pipe-table row, padding short rows with empty cells.
fn pipe_row(cells: &[String], width: usize) -> String {
    let mut parts = Vec::with_capacity(width);
    for i in 0..width {
        parts.push(escape_pipes(cells.get(i).map(String::as_str).unwrap_or("")));
    }
    format!("| {} |", parts.join(" | "))
}

/// Escape literal pipes so cell content cannot break the table structure.
fn escape_pipes(cell: &str) -> String {
    cell.replace('|', "\\|")
}
