//! Spec file discovery for specprune.
//!
//! Walks a directory tree with jwalk and keeps every file whose path,
//! relative to the root, matches the configured `**/*.spec.<ext>` glob.
//!
//! # Example
//!
//! ```rust,no_run
//! use specprune_scan::{Discover, PruneConfig, SpecScanner};
//!
//! let scanner = SpecScanner::new(&PruneConfig::default()).unwrap();
//! let paths = scanner.discover("/path/to/project".as_ref()).unwrap();
//!
//! println!("Found {} spec files", paths.len());
//! ```

mod scanner;

pub use scanner::SpecScanner;

// Re-export core types for convenience
pub use specprune_core::{Discover, PruneConfig, ScanError};
