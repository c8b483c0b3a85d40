//! Core types and traits for specprune.
//!
//! This crate provides the data structures shared by the specprune crates:
//! run configuration, error types, batch outcomes, and the discovery trait.

mod config;
mod discover;
mod error;
mod outcome;

pub use config::{
    DEFAULT_EXTENSION, DEFAULT_MARKER, DelayPolicy, PROTECTED_STEM, PruneConfig,
    PruneConfigBuilder,
};
pub use discover::Discover;
pub use error::{FileError, FileOp, NA_ERRNO, ScanError, UNKNOWN_PATH};
pub use outcome::{BatchOutcome, Disposition, ErroredPath};
