//! Empty-spec heuristic.

use std::path::Path;

use specprune_core::PruneConfig;

/// Decides whether a spec file is empty enough to delete.
///
/// A spec qualifies when its content was readable, its path is not the
/// protected file, and the marker occurs exactly once. The count is a plain
/// substring count, so occurrences in comments or strings count too.
#[derive(Debug, Clone)]
pub struct Classifier {
    protected_name: String,
    marker: String,
}

impl Classifier {
    pub fn new(protected_name: impl Into<String>, marker: impl Into<String>) -> Self {
        Self {
            protected_name: protected_name.into(),
            marker: marker.into(),
        }
    }

    pub fn from_config(config: &PruneConfig) -> Self {
        Self::new(config.protected_name(), config.marker.clone())
    }

    /// Number of non-overlapping marker occurrences in `content`.
    pub fn marker_count(&self, content: &str) -> usize {
        content.matches(self.marker.as_str()).count()
    }

    pub fn is_protected(&self, path: &Path) -> bool {
        path.to_string_lossy().contains(self.protected_name.as_str())
    }

    pub fn is_eligible(&self, path: &Path, content: Option<&str>) -> bool {
        let Some(content) = content else {
            return false;
        };

        if self.is_protected(path) {
            return false;
        }

        self.marker_count(content) == 1
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::from_config(&PruneConfig::default())
    }
}
