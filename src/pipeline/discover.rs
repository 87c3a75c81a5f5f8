//! File discovery: enumerate convertible files under the input root.
//!
//! The walk is recursive to any depth; non-matching files, directories,
//! and symlinked directories' contents are silently skipped. Results are
//! collected and then sorted lexicographically by full path, so a run
//! over the same tree always processes (and overwrites) files in the same
//! order — which is what makes the last-write-wins collision policy
//! deterministic.

use crate::config::{ConversionConfig, FileKind};
use crate::error::Doc2MdError;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// A discovered input file with its dispatch kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    pub path: PathBuf,
    pub kind: FileKind,
}

/// Recursively enumerate supported files under `input_root`, sorted
/// lexicographically by path.
///
/// Fails fast when the root is missing or not a directory. Unreadable
/// entries below the root are logged and skipped rather than failing the
/// run; an error on the root itself is fatal.
pub fn discover_files(
    input_root: &Path,
    config: &ConversionConfig,
) -> Result<Vec<DiscoveredFile>, Doc2MdError> {
    if !input_root.exists() {
        return Err(Doc2MdError::InputDirNotFound {
            path: input_root.to_path_buf(),
        });
    }
    if !input_root.is_dir() {
        return Err(Doc2MdError::InputNotADirectory {
            path: input_root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(input_root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                // Root errors abort; deeper errors only lose that entry.
                if e.path().map(|p| p == input_root).unwrap_or(true) {
                    return Err(Doc2MdError::ScanFailed {
                        path: input_root.to_path_buf(),
                        detail: e.to_string(),
                    });
                }
                warn!("skipping unreadable entry: {e}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(kind) = FileKind::from_path(entry.path()) else {
            continue;
        };
        if !config.kinds.matches(kind) {
            debug!("kind filter skips {}", entry.path().display());
            continue;
        }
        files.push(DiscoveredFile {
            path: entry.path().to_path_buf(),
            kind,
        });
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    debug!(
        "discovered {} convertible file(s) under {}",
        files.len(),
        input_root.display()
    );
    Ok(files)
}
