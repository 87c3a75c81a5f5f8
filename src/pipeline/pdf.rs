//! PDF text-layer extraction via pdf-extract.
//!
//! Strictly text-layer: text already encoded in the PDF content stream.
//! Scanned/image-only pages yield nothing, and the extractor then
//! substitutes an explicit placeholder instead of attempting OCR.
//!
//! The whole backend sits behind the `pdf` cargo feature. A build
//! without it still accepts PDF inputs at the discovery level but fails
//! them per-file with [`FileError::MissingCapability`] — a reportable,
//! recoverable condition, not a crash, so a mixed batch still converts
//! everything else.
//!
//! pdf-extract (via its font-parsing dependencies) is known to panic on
//! certain malformed fonts, so the call runs under `catch_unwind` and a
//! panic is reported as a per-file extraction error.

use crate::error::FileError;
use crate::output::Section;
use std::path::Path;

/// Placeholder body when no page has any extractable text.
pub const SCANNED_PDF_PLACEHOLDER: &str =
    "_(No extractable text found. This PDF may be scanned; OCR is not enabled.)_";

/// Extract per-page text as one section titled by the file name.
///
/// Non-empty pages become `## Page N` blocks (1-indexed), joined with
/// blank lines; an all-empty document gets [`SCANNED_PDF_PLACEHOLDER`].
#[cfg(feature = "pdf")]
pub fn extract(path: &Path) -> Result<Vec<Section>, FileError> {
    use tracing::{debug, warn};

    let pages = match std::panic::catch_unwind(|| pdf_extract::extract_text_by_pages(path)) {
        Ok(Ok(pages)) => pages,
        Ok(Err(e)) => {
            return Err(FileError::Extract {
                path: path.to_path_buf(),
                detail: e.to_string(),
            });
        }
        Err(_) => {
            warn!("pdf-extract panicked on {}", path.display());
            return Err(FileError::Extract {
                path: path.to_path_buf(),
                detail: "text extraction panicked (likely a malformed embedded font)".into(),
            });
        }
    };
    debug!("{}: {} page(s)", path.display(), pages.len());

    let body = assemble_pages(&pages);

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(vec![Section::new(file_name, body)])
}

/// Stub used when the crate is built without the `pdf` feature.
#[cfg(not(feature = "pdf"))]
pub fn extract(path: &Path) -> Result<Vec<Section>, FileError> {
    Err(FileError::MissingCapability {
        path: path.to_path_buf(),
        hint: "doc2md was built without PDF support; rebuild with `--features pdf`".into(),
    })
}

/// Assemble per-page texts into the output body.
///
/// Pages whose text trims to empty are dropped entirely — no `## Page N`
/// header is emitted for them. Page numbers refer to the position in the
/// document, not to the surviving pages.
fn assemble_pages(pages: &[String]) -> String {
    let chunks: Vec<String> = pages
        .iter()
        .enumerate()
        .filter_map(|(i, text)| {
            let text = text.trim();
            if text.is_empty() {
                None
            } else {
                Some(format!("## Page {}\n\n{}", i + 1, text))
            }
        })
        .collect();

    if chunks.is_empty() {
        SCANNED_PDF_PLACEHOLDER.to_string()
    } else {
        chunks.join("\n\n")
    }
}
