//! Configuration types for batch conversion.
//!
//! All conversion behaviour is controlled through [`ConversionConfig`],
//! built via its [`ConversionConfigBuilder`]. Keeping every knob in one
//! struct makes it trivial to share a config across a run, serialise it
//! for logging, and diff two runs to understand why their outputs differ.

use crate::error::Doc2MdError;
use crate::progress::BatchProgressCallback;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Default maximum length of a sanitized filename component.
pub const DEFAULT_SLUG_MAX_LEN: usize = 120;

/// The closed set of input kinds doc2md converts.
///
/// Dispatch is a plain enum match — no open extensibility is needed for
/// five formats, and an enum keeps the extension table, the extractor
/// routing, and the CLI `--only` filter in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    /// Excel workbooks (`.xlsx`, `.xls`), read via calamine.
    Spreadsheet,
    /// Comma-separated values (`.csv`).
    Csv,
    /// Plain text (`.txt`), lossily decoded as UTF-8.
    Text,
    /// Word documents (`.docx`), read via docx-rs.
    WordDocument,
    /// PDF text layer (`.pdf`), read via pdf-extract. No OCR.
    Pdf,
}

impl FileKind {
    /// All kinds, in dispatch order.
    pub const ALL: [FileKind; 5] = [
        FileKind::Spreadsheet,
        FileKind::Csv,
        FileKind::Text,
        FileKind::WordDocument,
        FileKind::Pdf,
    ];

    /// Lower-case extensions (without the dot) this kind claims.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            FileKind::Spreadsheet => &["xlsx", "xls"],
            FileKind::Csv => &["csv"],
            FileKind::Text => &["txt"],
            FileKind::WordDocument => &["docx"],
            FileKind::Pdf => &["pdf"],
        }
    }

    /// Classify a path by its extension, case-insensitively.
    ///
    /// Returns `None` for unknown extensions and extension-less paths.
    pub fn from_path(path: &Path) -> Option<FileKind> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        FileKind::ALL
            .into_iter()
            .find(|kind| kind.extensions().contains(&ext.as_str()))
    }

    /// Short lower-case name used in logs and the CLI.
    pub fn name(self) -> &'static str {
        match self {
            FileKind::Spreadsheet => "spreadsheet",
            FileKind::Csv => "csv",
            FileKind::Text => "text",
            FileKind::WordDocument => "word",
            FileKind::Pdf => "pdf",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which input kinds a run converts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub enum KindFilter {
    /// Convert every supported kind (default).
    #[default]
    All,
    /// Convert only the listed kinds; everything else is skipped during
    /// discovery as if its extension were unsupported.
    Only(Vec<FileKind>),
}

impl KindFilter {
    /// Whether this filter admits the given kind.
    pub fn matches(&self, kind: FileKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Only(kinds) => kinds.contains(&kind),
        }
    }
}

/// Configuration for a batch conversion.
///
/// Built via [`ConversionConfig::builder()`] or
/// [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use doc2md::{ConversionConfig, FileKind, KindFilter};
///
/// let config = ConversionConfig::builder()
///     .slug_max_len(64)
///     .kinds(KindFilter::Only(vec![FileKind::Csv, FileKind::Text]))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct ConversionConfig {
    /// Maximum length (in characters) of a sanitized filename component.
    /// Default: 120.
    ///
    /// 120 keeps the deepest output path (`<out>/<stem>/<sheet>.md`) well
    /// under the 255-byte component limit common to Linux, macOS, and
    /// Windows file systems, even for multi-byte slugs.
    pub slug_max_len: usize,

    /// Which input kinds to convert. Default: all five.
    pub kinds: KindFilter,

    /// Optional per-file progress callback. Default: none.
    pub progress_callback: Option<Arc<dyn BatchProgressCallback>>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            slug_max_len: DEFAULT_SLUG_MAX_LEN,
            kinds: KindFilter::All,
            progress_callback: None,
        }
    }
}

impl fmt::Debug for ConversionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionConfig")
            .field("slug_max_len", &self.slug_max_len)
            .field("kinds", &self.kinds)
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<dyn BatchProgressCallback>"),
            )
            .finish()
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn slug_max_len(mut self, len: usize) -> Self {
        self.config.slug_max_len = len;
        self
    }

    pub fn kinds(mut self, filter: KindFilter) -> Self {
        self.config.kinds = filter;
        self
    }

    pub fn progress_callback(mut self, cb: Arc<dyn BatchProgressCallback>) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, Doc2MdError> {
        let c = &self.config;
        if c.slug_max_len == 0 {
            return Err(Doc2MdError::InvalidConfig(
                "slug_max_len must be ≥ 1".into(),
            ));
        }
        if let KindFilter::Only(kinds) = &c.kinds {
            if kinds.is_empty() {
                return Err(Doc2MdError::InvalidConfig(
                    "kind filter must name at least one kind".into(),
                ));
            }
        }
        Ok(self.config)
    }
}
