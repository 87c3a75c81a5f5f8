//! Pipeline stages for batch document-to-Markdown conversion.
//!
//! Each submodule implements exactly one stage. Keeping them separate
//! makes each independently testable and lets a backend be swapped
//! (e.g. a different spreadsheet reader) without touching the others.
//!
//! ## Data Flow
//!
//! ```text
//! input root ──▶ discover ──▶ sheet / csv / text / docx / pdf ──▶ dispatcher
//!  (directory)   (walkdir)        (one extractor per kind)      (writes .md)
//! ```
//!
//! 1. [`discover`] — recursively enumerate supported files in sorted order
//! 2. [`sheet`], [`csv`], [`text`], [`docx`], [`pdf`] — read one input
//!    file and produce `Vec<Section>`; each is a one-shot pure read with
//!    no state between files
//!
//! The dispatcher itself lives in [`crate::convert`]; it routes each
//! discovered file to the extractor matching its [`crate::config::FileKind`]
//! and writes the resulting sections.

pub mod csv;
pub mod discover;
pub mod docx;
pub mod pdf;
pub mod sheet;
pub mod text;
