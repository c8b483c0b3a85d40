//! Batch classification and removal.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use specprune_core::{BatchOutcome, Disposition, FileError};

use crate::{Classifier, Console, FileReader, Remover, read_or_report};

/// Applies the classifier to candidates one at a time, removing the
/// eligible ones.
#[derive(Debug, Clone)]
pub struct BatchProcessor<R, M> {
    reader: R,
    remover: M,
    classifier: Classifier,
}

impl<R: FileReader, M: Remover> BatchProcessor<R, M> {
    pub fn new(reader: R, remover: M, classifier: Classifier) -> Self {
        Self {
            reader,
            remover,
            classifier,
        }
    }

    /// Classify a single candidate and remove it when eligible.
    ///
    /// A dry run reports the file as removed without touching it. Removal
    /// failures are returned to the caller; nothing is printed for the path
    /// in that case.
    pub fn process_one<C>(
        &self,
        path: &Path,
        dry_run: bool,
        console: &mut C,
    ) -> Result<Disposition, FileError>
    where
        C: Console + ?Sized,
    {
        let content = read_or_report(&self.reader, path, console);

        if self.classifier.is_eligible(path, content.as_deref()) {
            if !dry_run {
                self.remover.remove(path)?;
                debug!(path = %path.display(), "spec removed");
            }

            console.out(&format!("~ REMOVED {}", path.display()));
            return Ok(Disposition::Removed);
        }

        console.out(&format!("~ SKIPPED {}", path.display()));
        Ok(Disposition::Skipped)
    }

    /// Process every candidate in order and print the summary.
    ///
    /// A failure on one path is reported and recorded, and the batch moves
    /// on to the next path.
    pub fn process_all<C>(&self, paths: &[PathBuf], dry_run: bool, console: &mut C) -> BatchOutcome
    where
        C: Console + ?Sized,
    {
        let mut outcome = BatchOutcome::new();

        for path in paths {
            match self.process_one(path, dry_run, console) {
                Ok(disposition) => outcome.record(path, disposition),
                Err(err) => {
                    debug!(error = %err, "spec could not be removed");
                    console.err(&err.diagnostic());
                    outcome.record_error(path, err);
                }
            }
        }

        info!(
            deleted = outcome.deleted_count(),
            errors = outcome.error_count(),
            skipped = outcome.skipped_count(),
            dry_run,
            "batch finished"
        );

        for line in outcome.summary_lines() {
            console.out(&line);
        }

        outcome
    }
}
