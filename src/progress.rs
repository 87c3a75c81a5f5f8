//! Progress-callback trait for per-file conversion events.
//!
//! Inject an `Arc<dyn BatchProgressCallback>` via
//! [`crate::config::ConversionConfigBuilder::progress_callback`] to
//! receive events as the dispatcher works through the discovered files.
//!
//! Callbacks are the least-invasive integration point: the CLI forwards
//! events to stdout/stderr as `OK`/`FAIL` lines, a GUI could update a
//! list view, a service could write progress rows to a database — the
//! library does not need to know. Processing is strictly sequential, but
//! the trait is `Send + Sync` so an `Arc` can be shared with other
//! threads of the host application.

use crate::error::FileError;
use std::path::Path;
use std::sync::Arc;

/// Called by the dispatcher as it processes each discovered file.
///
/// All methods have default no-op implementations so callers only
/// override what they care about.
pub trait BatchProgressCallback: Send + Sync {
    /// Called once after discovery, before the first file is converted.
    fn on_batch_start(&self, total_files: usize) {
        let _ = total_files;
    }

    /// Called just before a file's extractor runs.
    fn on_file_start(&self, input: &Path, index: usize, total_files: usize) {
        let _ = (input, index, total_files);
    }

    /// Called when a file converted successfully.
    ///
    /// `written` lists the Markdown files produced for this input
    /// (one for single-section files, several for multi-sheet workbooks).
    fn on_file_complete(&self, input: &Path, written: &[std::path::PathBuf]) {
        let _ = (input, written);
    }

    /// Called when a file failed and was skipped.
    fn on_file_error(&self, input: &Path, error: &FileError) {
        let _ = (input, error);
    }

    /// Called once after the last file has been attempted.
    fn on_batch_complete(&self, total_files: usize, success_count: usize) {
        let _ = (total_files, success_count);
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopProgressCallback;

impl BatchProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in
/// [`crate::config::ConversionConfig`].
pub type ProgressCallback = Arc<dyn BatchProgressCallback>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct TrackingCallback {
        starts: AtomicUsize,
        completes: AtomicUsize,
        errors: AtomicUsize,
        final_success: AtomicUsize,
    }

    impl BatchProgressCallback for TrackingCallback {
        fn on_file_start(&self, _input: &Path, _index: usize, _total: usize) {
            self.starts.fetch_add(1, Ordering::SeqCst);
        }
        fn on_file_complete(&self, _input: &Path, _written: &[PathBuf]) {
            self.completes.fetch_add(1, Ordering::SeqCst);
        }
        fn on_file_error(&self, _input: &Path, _error: &FileError) {
            self.errors.fetch_add(1, Ordering::SeqCst);
        }
        fn on_batch_complete(&self, _total: usize, success_count: usize) {
            self.final_success.store(success_count, Ordering::SeqCst);
        }
    }

    #[test]
    fn noop_callback_does_not_panic() {
        let cb = NoopProgressCallback;
        cb.on_batch_start(2);
        cb.on_file_start(Path::new("a.csv"), 0, 2);
        cb.on_file_complete(Path::new("a.csv"), &[PathBuf::from("out/a.md")]);
        cb.on_file_error(
            Path::new("b.pdf"),
            &FileError::Open {
                path: PathBuf::from("b.pdf"),
                detail: "bad".into(),
            },
        );
        cb.on_batch_complete(2, 1);
    }

    #[test]
    fn tracking_callback_receives_events() {
        let cb = TrackingCallback {
            starts: AtomicUsize::new(0),
            completes: AtomicUsize::new(0),
            errors: AtomicUsize::new(0),
            final_success: AtomicUsize::new(0),
        };
        cb.on_batch_start(2);
        cb.on_file_start(Path::new("a.csv"), 0, 2);
        cb.on_file_complete(Path::new("a.csv"), &[]);
        cb.on_file_start(Path::new("b.pdf"), 1, 2);
        cb.on_file_error(
            Path::new("b.pdf"),
            &FileError::Unsupported {
                path: PathBuf::from("b.pdf"),
            },
        );
        cb.on_batch_complete(2, 1);

        assert_eq!(cb.starts.load(Ordering::SeqCst), 2);
        assert_eq!(cb.completes.load(Ordering::SeqCst), 1);
        assert_eq!(cb.errors.load(Ordering::SeqCst), 1);
        assert_eq!(cb.final_success.load(Ordering::SeqCst), 1);
    }
}
