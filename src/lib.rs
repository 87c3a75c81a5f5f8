//! # doc2md
//!
//! Batch-convert office documents to Markdown.
//!
//! Given an input directory tree, doc2md finds every spreadsheet
//! (`.xlsx`/`.xls`), CSV, plain-text, Word (`.docx`), and PDF file and
//! writes a Markdown rendition of each into an output directory, with
//! file names derived deterministically from the inputs through a
//! filename sanitizer.
//!
//! ## Pipeline Overview
//!
//! ```text
//! input dir
//!  │
//!  ├─ 1. Discover  walk the tree, match supported extensions, sort
//!  ├─ 2. Extract   per-kind backend → (title, body) sections
//!  │                 spreadsheet → Markdown table per sheet
//!  │                 csv         → Markdown table
//!  │                 text        → verbatim (lossy UTF-8)
//!  │                 docx        → paragraphs joined by blank lines
//!  │                 pdf         → "## Page N" text-layer blocks
//!  └─ 3. Write     `# <title>` + body → <out>/<slug>.md
//! ```
//!
//! Per-file failures never abort the batch: each is recorded in the
//! returned [`BatchSummary`] and the run continues with the next file.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use doc2md::{convert_batch, ConversionConfig};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConversionConfig::default();
//!     let summary = convert_batch(Path::new("input"), Path::new("output"), &config)?;
//!     println!(
//!         "converted {} file(s) into {}",
//!         summary.converted,
//!         summary.output_root.display()
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `doc2md` binary (clap + anyhow + tracing-subscriber) |
//! | `pdf`   | on      | PDF text-layer extraction via pdf-extract |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! doc2md = { version = "0.1", default-features = false, features = ["pdf"] }
//! ```
//!
//! Without `pdf`, PDF inputs fail per-file with a typed
//! missing-capability error instead of being converted. OCR of scanned
//! documents is out of scope in every configuration.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod slug;
pub mod table;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder, FileKind, KindFilter};
pub use convert::{convert_batch, convert_file};
pub use error::{Doc2MdError, FileError};
pub use output::{BatchSummary, FileOutcome, Section};
pub use progress::{BatchProgressCallback, NoopProgressCallback, ProgressCallback};
pub use slug::{slugify, slugify_default};
pub use table::Table;
