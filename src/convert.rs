//! The conversion dispatcher: discovery, per-file routing, and output
//! writing.
//!
//! [`convert_batch`] is the primary entry point. It discovers the input
//! files, converts each one in discovery order, and returns a
//! [`BatchSummary`] that records every outcome. Per-file failures are
//! captured, reported through the progress callback, and never abort the
//! batch; only setup problems (missing input directory, output directory
//! creation failure) are fatal.
//!
//! Processing is deliberately single-threaded and sequential: the work is
//! I/O-bound over small batches, files are independent, and one worker
//! keeps output ordering, logging, and the last-write-wins overwrite
//! policy trivially deterministic.

use crate::config::{ConversionConfig, FileKind};
use crate::error::{Doc2MdError, FileError};
use crate::output::{BatchSummary, FileOutcome, Section};
use crate::pipeline::{self, discover};
use crate::slug::slugify;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Convert every supported file under `input_root` into Markdown files
/// under `output_root`.
///
/// # Returns
/// `Ok(BatchSummary)` on completion, even if some files failed (check
/// `summary.failed`).
///
/// # Errors
/// Returns `Err(Doc2MdError)` only for fatal setup errors:
/// - input directory missing or not a directory
/// - output directory cannot be created
pub fn convert_batch(
    input_root: &Path,
    output_root: &Path,
    config: &ConversionConfig,
) -> Result<BatchSummary, Doc2MdError> {
    info!(
        "starting batch: {} -> {}",
        input_root.display(),
        output_root.display()
    );

    let files = discover::discover_files(input_root, config)?;

    std::fs::create_dir_all(output_root).map_err(|e| Doc2MdError::OutputDirCreateFailed {
        path: output_root.to_path_buf(),
        source: e,
    })?;
    // Resolve after creation so the summary shows an absolute path even
    // for a brand-new directory.
    let resolved_output = std::fs::canonicalize(output_root)
        .unwrap_or_else(|_| output_root.to_path_buf());

    if let Some(ref cb) = config.progress_callback {
        cb.on_batch_start(files.len());
    }

    let total = files.len();
    let mut outcomes = Vec::with_capacity(total);
    let mut seen_outputs: HashSet<PathBuf> = HashSet::new();

    for (index, file) in files.iter().enumerate() {
        if let Some(ref cb) = config.progress_callback {
            cb.on_file_start(&file.path, index, total);
        }

        let outcome = match convert_file(&file.path, output_root, config) {
            Ok(written) => {
                // Collisions between sanitized names are allowed
                // (last-write-wins, in discovery order) but worth a
                // warning because the earlier file's output is gone.
                for path in &written {
                    if !seen_outputs.insert(path.clone()) {
                        warn!("output path collision, overwriting: {}", path.display());
                    }
                }
                if let Some(ref cb) = config.progress_callback {
                    cb.on_file_complete(&file.path, &written);
                }
                FileOutcome {
                    input: file.path.clone(),
                    kind: file.kind,
                    written,
                    error: None,
                }
            }
            Err(error) => {
                if let Some(ref cb) = config.progress_callback {
                    cb.on_file_error(&file.path, &error);
                }
                FileOutcome {
                    input: file.path.clone(),
                    kind: file.kind,
                    written: Vec::new(),
                    error: Some(error),
                }
            }
        };
        outcomes.push(outcome);
    }

    let converted = outcomes.iter().filter(|o| o.is_success()).count();
    let failed = outcomes.len() - converted;

    if let Some(ref cb) = config.progress_callback {
        cb.on_batch_complete(total, converted);
    }
    info!("batch complete: {converted} converted, {failed} failed");

    Ok(BatchSummary {
        converted,
        failed,
        output_root: resolved_output,
        files: outcomes,
    })
}

/// Convert a single input file, returning the Markdown paths written.
///
/// Sections are written in order: a single section goes to
/// `<output_root>/<slug(stem)>.md`; multiple sections (multi-sheet
/// workbooks) go to `<output_root>/<slug(stem)>/<slug(title)>.md`.
pub fn convert_file(
    input: &Path,
    output_root: &Path,
    config: &ConversionConfig,
) -> Result<Vec<PathBuf>, FileError> {
    let kind = FileKind::from_path(input).ok_or_else(|| FileError::Unsupported {
        path: input.to_path_buf(),
    })?;
    debug!("converting {} as {kind}", input.display());

    let sections = extract(kind, input)?;

    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base = slugify(&stem, config.slug_max_len);

    let mut written = Vec::with_capacity(sections.len());
    if let [section] = sections.as_slice() {
        let out_path = output_root.join(format!("{base}.md"));
        write_markdown(input, &out_path, section)?;
        written.push(out_path);
    } else {
        let book_dir = output_root.join(&base);
        for section in &sections {
            let name = slugify(&section.title, config.slug_max_len);
            let out_path = book_dir.join(format!("{name}.md"));
            write_markdown(input, &out_path, section)?;
            written.push(out_path);
        }
    }
    Ok(written)
}

/// Route one file to the extractor for its kind.
fn extract(kind: FileKind, input: &Path) -> Result<Vec<Section>, FileError> {
    match kind {
        FileKind::Spreadsheet => pipeline::sheet::extract(input),
        FileKind::Csv => pipeline::csv::extract(input),
        FileKind::Text => pipeline::text::extract(input),
        FileKind::WordDocument => pipeline::docx::extract(input),
        FileKind::Pdf => pipeline::pdf::extract(input),
    }
}

/// Write one section as `# <title>`, a blank line, then the body trimmed
/// of trailing whitespace with a single trailing newline. The title is
/// used verbatim — only file names are sanitized. Existing files are
/// overwritten without prompting.
fn write_markdown(input: &Path, out_path: &Path, section: &Section) -> Result<(), FileError> {
    if let Some(parent) = out_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| FileError::Write {
            path: out_path.to_path_buf(),
            detail: e.to_string(),
        })?;
    }
    let content = format!("# {}\n\n{}\n", section.title, section.body.trim_end());
    std::fs::write(out_path, content).map_err(|e| FileError::Write {
        path: out_path.to_path_buf(),
        detail: e.to_string(),
    })?;
    debug!("{} -> {}", input.display(), out_path.display());
    Ok(())
}
