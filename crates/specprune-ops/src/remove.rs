//! Spec file removal.

use std::fs;
use std::path::Path;

use specprune_core::FileError;

/// Permanently removes a file.
pub trait Remover {
    fn remove(&self, path: &Path) -> Result<(), FileError>;
}

impl<T: Remover + ?Sized> Remover for &T {
    fn remove(&self, path: &Path) -> Result<(), FileError> {
        (**self).remove(path)
    }
}

/// Unlinks files on the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsRemover;

impl Remover for FsRemover {
    fn remove(&self, path: &Path) -> Result<(), FileError> {
        fs::remove_file(path).map_err(|e| FileError::remove(path, e))
    }
}
