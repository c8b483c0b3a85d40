//! Classification, removal and run orchestration for specprune.
//!
//! Every collaborator the batch touches is injected: candidates come from a
//! [`Discover`] implementation, content from a [`FileReader`], deletions go
//! through a [`Remover`], and all narration is written to a [`Console`].
//! The filesystem-backed defaults are [`FsReader`] and [`FsRemover`].

mod batch;
mod classify;
mod console;
mod reader;
mod remove;
mod runner;

pub use batch::BatchProcessor;
pub use classify::Classifier;
pub use console::{Console, MemoryConsole, StdConsole};
pub use reader::{FileReader, FsReader, read_or_report};
pub use remove::{FsRemover, Remover};
pub use runner::{DRY_RUN_BANNER, MISSING_PATH_MESSAGE, REAL_RUN_BANNER, Runner};

// Re-export core types
pub use specprune_core::{
    BatchOutcome, DelayPolicy, Discover, Disposition, FileError, FileOp, PruneConfig, ScanError,
};
