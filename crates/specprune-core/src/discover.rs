//! Candidate discovery seam.

use std::path::{Path, PathBuf};

use crate::ScanError;

/// Produces the candidate spec files below a root directory.
pub trait Discover {
    /// Paths of every matching file, each joined onto `root`, in walk order.
    fn discover(&self, root: &Path) -> Result<Vec<PathBuf>, ScanError>;
}

impl<T: Discover + ?Sized> Discover for &T {
    fn discover(&self, root: &Path) -> Result<Vec<PathBuf>, ScanError> {
        (**self).discover(root)
    }
}
