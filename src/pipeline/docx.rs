//! Word-document extraction via docx-rs.
//!
//! Only top-level paragraph text is extracted, in document order; table
//! contents, headers/footers, and formatting are out of scope. Runs are
//! concatenated per paragraph (hyperlink runs included, since their text
//! is part of the sentence), each paragraph is trimmed of trailing
//! whitespace, and paragraphs are joined with a blank line. A document
//! with no non-empty paragraph text yields a placeholder body so the
//! output file is never an empty shell.

use crate::error::FileError;
use crate::output::Section;
use std::path::Path;
use tracing::debug;

/// Placeholder body for a document without any paragraph text.
pub const EMPTY_DOCUMENT_PLACEHOLDER: &str = "_(Empty document)_";

/// Extract paragraph text as one section titled by the file name.
pub fn extract(path: &Path) -> Result<Vec<Section>, FileError> {
    let bytes = std::fs::read(path).map_err(|e| FileError::Open {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;
    let doc = docx_rs::read_docx(&bytes).map_err(|e| FileError::Open {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;

    let paragraphs: Vec<String> = doc
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            docx_rs::DocumentChild::Paragraph(p) => Some(paragraph_text(p)),
            _ => None,
        })
        .collect();
    debug!("{}: {} paragraph(s)", path.display(), paragraphs.len());

    let body = join_paragraphs(&paragraphs);

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(vec![Section::new(file_name, body)])
}

/// Join paragraph texts with blank lines; placeholder when nothing
/// non-empty remains.
fn join_paragraphs(paragraphs: &[String]) -> String {
    let joined = paragraphs
        .iter()
        .map(|p| p.trim_end())
        .collect::<Vec<_>>()
        .join("\n\n");
    let trimmed = joined.trim();
    if trimmed.is_empty() {
        EMPTY_DOCUMENT_PLACEHOLDER.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Concatenate the text of all runs in a paragraph, including runs
/// nested inside hyperlinks and inserted revisions.
fn paragraph_text(paragraph: &docx_rs::Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        match child {
            docx_rs::ParagraphChild::Run(run) => push_run_text(run, &mut text),
            docx_rs::ParagraphChild::Hyperlink(link) => {
                for nested in &link.children {
                    if let docx_rs::ParagraphChild::Run(run) = nested {
                        push_run_text(run, &mut text);
                    }
                }
            }
            docx_rs::ParagraphChild::Insert(ins) => {
                for nested in &ins.children {
                    if let docx_rs::InsertChild::Run(run) = nested {
                        push_run_text(run, &mut text);
                    }
                }
            }
            _ => {}
        }
    }
    text
}

fn push_run_text(run: &docx_rs::Run, out: &mut String) {
    for child in &run.children {
        match child {
            docx_rs::RunChild::Text(t) => out.push_str(&t.text),
            docx_rs::RunChild::Tab(_) => out.push('\t'),
            docx_rs::RunChild::Break(_) => out.push('\n'),
            _ => {}
        }
    }
}
