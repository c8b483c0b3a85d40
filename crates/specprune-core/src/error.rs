//! Error types for discovery and per-file operations.

use std::io;
use std::path::{Path, PathBuf};

use strum::Display;
use thiserror::Error;

/// Placeholder printed when an error carries no OS error number.
pub const NA_ERRNO: &str = "na";

/// Placeholder printed when an error carries no path.
pub const UNKNOWN_PATH: &str = "unknown path";

/// Errors that abort discovery.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Permission denied for a path.
    #[error("Permission denied: {path}")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Path not found.
    #[error("Path not found: {path}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Root path is not a directory.
    #[error("Root path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// An entry could not be read while walking the tree.
    #[error("Walk failed at {}: {message}", path_or_placeholder(.path.as_deref()))]
    Walk {
        path: Option<PathBuf>,
        message: String,
    },

    /// The spec glob could not be compiled.
    #[error("Invalid spec pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

impl ScanError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            io::ErrorKind::NotFound => Self::NotFound { path, source },
            _ => Self::Io { path, source },
        }
    }
}

/// The per-file operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum FileOp {
    Read,
    Remove,
}

/// A failed read or removal of a single candidate file.
///
/// Both diagnostic fields are optional: an injected reader or remover may
/// produce errors without an OS error number or path, and the diagnostic
/// line falls back to placeholders.
#[derive(Debug, Error)]
#[error("{op} failed for {}: {source}", path_or_placeholder(.path.as_deref()))]
pub struct FileError {
    pub op: FileOp,
    pub path: Option<PathBuf>,
    #[source]
    pub source: io::Error,
}

impl FileError {
    pub fn new(op: FileOp, path: Option<PathBuf>, source: io::Error) -> Self {
        Self { op, path, source }
    }

    /// A read failure at `path`.
    pub fn read(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::new(FileOp::Read, Some(path.as_ref().to_path_buf()), source)
    }

    /// A removal failure at `path`.
    pub fn remove(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::new(FileOp::Remove, Some(path.as_ref().to_path_buf()), source)
    }

    /// Error number of the underlying failure in libuv's negated form
    /// (`-2` for `ENOENT`), if the OS reported one.
    pub fn errno(&self) -> Option<i32> {
        self.source.raw_os_error().map(|code| -code)
    }

    pub fn errno_label(&self) -> String {
        self.errno()
            .map_or_else(|| NA_ERRNO.to_string(), |code| code.to_string())
    }

    pub fn path_label(&self) -> String {
        path_or_placeholder(self.path.as_deref())
    }

    /// Console diagnostic line, e.g. `! READ ERROR -2: - src/a.spec.ts`.
    pub fn diagnostic(&self) -> String {
        format!(
            "! {} ERROR {}: - {}",
            self.op,
            self.errno_label(),
            self.path_label()
        )
    }
}

fn path_or_placeholder(path: Option<&Path>) -> String {
    path.map_or_else(|| UNKNOWN_PATH.to_string(), |p| p.display().to_string())
}
