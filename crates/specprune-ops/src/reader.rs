//! Spec content reading.

use std::fs;
use std::path::Path;

use tracing::debug;

use specprune_core::FileError;

use crate::Console;

/// Source of spec file content.
pub trait FileReader {
    fn read(&self, path: &Path) -> Result<String, FileError>;
}

impl<T: FileReader + ?Sized> FileReader for &T {
    fn read(&self, path: &Path) -> Result<String, FileError> {
        (**self).read(path)
    }
}

/// Reads from the local filesystem, decoding invalid UTF-8 lossily.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsReader;

impl FileReader for FsReader {
    fn read(&self, path: &Path) -> Result<String, FileError> {
        let bytes = fs::read(path).map_err(|e| FileError::read(path, e))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Read `path`, turning any failure into `None` plus a `READ ERROR`
/// diagnostic so a single unreadable file cannot stop a batch.
pub fn read_or_report<R, C>(reader: &R, path: &Path, console: &mut C) -> Option<String>
where
    R: FileReader + ?Sized,
    C: Console + ?Sized,
{
    match reader.read(path) {
        Ok(content) => Some(content),
        Err(err) => {
            debug!(error = %err, "spec unreadable");
            console.err(&err.diagnostic());
            None
        }
    }
}
