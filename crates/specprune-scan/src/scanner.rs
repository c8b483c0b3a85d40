//! JWalk-based spec file scanner.

use std::path::{Component, Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use jwalk::{Parallelism, WalkDir};
use tracing::debug;

use specprune_core::{Discover, PruneConfig, ScanError};

/// Finds spec files below a root using a serial, sorted jwalk traversal.
#[derive(Debug, Clone)]
pub struct SpecScanner {
    matcher: GlobMatcher,
    include_hidden: bool,
}

impl SpecScanner {
    /// Create a scanner for the config's spec pattern.
    pub fn new(config: &PruneConfig) -> Result<Self, ScanError> {
        let pattern = config.spec_pattern();
        let glob = GlobBuilder::new(&pattern)
            .literal_separator(true)
            .build()
            .map_err(|e| ScanError::InvalidPattern {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;

        Ok(Self {
            matcher: glob.compile_matcher(),
            include_hidden: config.include_hidden,
        })
    }

    /// Check whether a root-relative path is a spec file.
    pub fn is_match(&self, relative: &Path) -> bool {
        self.matcher.is_match(relative)
    }

    /// Walk `root` and collect matching files.
    pub fn scan(&self, root: &Path) -> Result<Vec<PathBuf>, ScanError> {
        let metadata = std::fs::metadata(root).map_err(|e| ScanError::io(root, e))?;
        if !metadata.is_dir() {
            return Err(ScanError::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        let walker = WalkDir::new(root)
            .parallelism(Parallelism::Serial)
            .sort(true)
            .skip_hidden(!self.include_hidden)
            .follow_links(false)
            .min_depth(1);

        let mut paths = Vec::new();

        for entry_result in walker {
            let entry = entry_result.map_err(|err| ScanError::Walk {
                path: err.path().map(Path::to_path_buf),
                message: err.to_string(),
            })?;

            if entry.file_type().is_dir() {
                // jwalk yields unreadable directories as entries and keeps
                // the failure on the entry itself
                if let Some(err) = &entry.read_children_error {
                    return Err(ScanError::Walk {
                        path: Some(entry.path()),
                        message: err.to_string(),
                    });
                }
                continue;
            }

            let path = entry.path();
            let Ok(relative) = path.strip_prefix(root) else {
                continue;
            };

            if self.is_match(relative) {
                let joined = join_normalized(root, relative);
                debug!(path = %joined.display(), "spec file matched");
                paths.push(joined);
            }
        }

        debug!(root = %root.display(), count = paths.len(), "discovery finished");
        Ok(paths)
    }
}

impl Discover for SpecScanner {
    fn discover(&self, root: &Path) -> Result<Vec<PathBuf>, ScanError> {
        self.scan(root)
    }
}

/// Join `relative` onto `root`, dropping `.` components so a root of `.`
/// yields `src/a.spec.ts` rather than `./src/a.spec.ts`.
fn join_normalized(root: &Path, relative: &Path) -> PathBuf {
    let joined: PathBuf = root
        .join(relative)
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();

    if joined.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        joined
    }
}
