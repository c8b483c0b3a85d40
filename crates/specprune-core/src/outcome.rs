//! Batch outcome types.

use std::path::{Path, PathBuf};

use crate::FileError;

/// What happened to a single candidate that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Eligible; removed, or would have been in a dry run.
    Removed,
    /// Ineligible; left in place.
    Skipped,
}

/// A candidate whose processing failed.
#[derive(Debug)]
pub struct ErroredPath {
    pub path: PathBuf,
    pub error: FileError,
}

/// Deleted, skipped and errored candidates of one batch.
///
/// Every processed path lands in exactly one of the three lists, in input
/// order.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub deleted: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    pub errored: Vec<ErroredPath>,
}

impl BatchOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the disposition of a processed path.
    pub fn record(&mut self, path: &Path, disposition: Disposition) {
        match disposition {
            Disposition::Removed => self.deleted.push(path.to_path_buf()),
            Disposition::Skipped => self.skipped.push(path.to_path_buf()),
        }
    }

    /// Record a path whose processing failed.
    pub fn record_error(&mut self, path: &Path, error: FileError) {
        self.errored.push(ErroredPath {
            path: path.to_path_buf(),
            error,
        });
    }

    pub fn deleted_count(&self) -> usize {
        self.deleted.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    pub fn error_count(&self) -> usize {
        self.errored.len()
    }

    /// Total number of paths accounted for.
    pub fn total(&self) -> usize {
        self.deleted_count() + self.skipped_count() + self.error_count()
    }

    /// Paths that failed, in input order.
    pub fn errored_paths(&self) -> impl Iterator<Item = &Path> {
        self.errored.iter().map(|e| e.path.as_path())
    }

    /// Summary lines in console order.
    ///
    /// The count block comes first, then the skipped listing and the errored
    /// listing, each introduced by a `"\n"` separator line when non-empty.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "\n~ DELETED: {}\n~ ERROR: {}\n~ SKIPPED: {}",
            self.deleted_count(),
            self.error_count(),
            self.skipped_count()
        )];

        if !self.skipped.is_empty() {
            lines.push("\n".to_string());
            lines.extend(
                self.skipped
                    .iter()
                    .map(|p| format!("~ SKIPPED: {}", p.display())),
            );
        }

        if !self.errored.is_empty() {
            lines.push("\n".to_string());
            lines.extend(self.errored_paths().map(|p| format!("~ ERROR: {}", p.display())));
        }

        lines
    }
}
