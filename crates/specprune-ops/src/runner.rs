//! Run orchestration: narration, abort windows, discovery, batch.

use std::path::Path;
use std::time::Duration;

use tracing::info;

use specprune_core::{BatchOutcome, DelayPolicy, Discover, ScanError};

use crate::{BatchProcessor, Console, FileReader, Remover};

pub const MISSING_PATH_MESSAGE: &str =
    "~ Unexpected missing full path\n\nTry: 'node index.js <path>'";

pub const DRY_RUN_BANNER: &str =
    "~ DRY RUN: Include --real-remove to actually delete unused specs: 'node index.js <path> --real-remove'";

pub const REAL_RUN_BANNER: &str = "~ NOT A DRY RUN - THIS IS FOR REAL FOR REAL";

/// Sequences one prune run.
///
/// The two pauses give an operator time to kill the process: one before
/// scanning, and one sized to the number of files about to be processed.
#[derive(Debug, Clone)]
pub struct Runner<D, R, M> {
    discovery: D,
    processor: BatchProcessor<R, M>,
    delays: DelayPolicy,
}

impl<D, R, M> Runner<D, R, M>
where
    D: Discover,
    R: FileReader,
    M: Remover,
{
    pub fn new(discovery: D, processor: BatchProcessor<R, M>, delays: DelayPolicy) -> Self {
        Self {
            discovery,
            processor,
            delays,
        }
    }

    /// Run against `root`.
    ///
    /// Returns `Ok(None)` after printing the usage error when no root was
    /// given. Discovery failures are returned as-is.
    pub async fn run<C>(
        &self,
        root: Option<&Path>,
        dry_run: bool,
        console: &mut C,
    ) -> Result<Option<BatchOutcome>, ScanError>
    where
        C: Console + ?Sized,
    {
        let Some(root) = root else {
            console.err(MISSING_PATH_MESSAGE);
            return Ok(None);
        };

        console.out(if dry_run { DRY_RUN_BANNER } else { REAL_RUN_BANNER });
        console.out(&format!("~ Will search '{}' for specs...", root.display()));

        pause(self.delays.initial).await;

        let paths = self.discovery.discover(root)?;
        info!(root = %root.display(), count = paths.len(), "spec files discovered");

        console.out("\n~ Files found:");
        for path in &paths {
            console.out(&format!("~   {}", path.display()));
        }

        let window = self.delays.window_for(paths.len());

        console.out(&format!("\n~ Files count: {}", paths.len()));
        console.out(&format!(
            "\n~ will delete 'empty' specs in {}ms",
            window.as_millis()
        ));

        pause(window).await;

        let outcome = self.processor.process_all(&paths, dry_run, console);

        if dry_run {
            console.out(DRY_RUN_BANNER);
        }

        Ok(Some(outcome))
    }
}

async fn pause(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}
