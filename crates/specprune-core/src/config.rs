//! Run configuration types.

use std::time::Duration;

use derive_builder::Builder;

/// Extension used in the spec suffix when none is configured.
pub const DEFAULT_EXTENSION: &str = "ts";

/// Marker counted in a spec file's content.
pub const DEFAULT_MARKER: &str = "describe";

/// Stem of the file that is never deleted, completed with `.spec.<ext>`.
pub const PROTECTED_STEM: &str = "app.component";

/// Abort windows the runner waits through before scanning and before removing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayPolicy {
    /// Pause before discovery starts.
    pub initial: Duration,
    /// Removal window contribution per discovered file.
    pub per_file: Duration,
    /// Lower bound of the removal window.
    pub min_window: Duration,
    /// Upper bound of the removal window.
    pub max_window: Duration,
}

impl DelayPolicy {
    /// A policy that never waits.
    pub const fn none() -> Self {
        Self {
            initial: Duration::ZERO,
            per_file: Duration::ZERO,
            min_window: Duration::ZERO,
            max_window: Duration::ZERO,
        }
    }

    /// Removal window for a batch of `file_count` candidates.
    ///
    /// Scales with the batch, capped at `max_window` first and then raised to
    /// at least `min_window`.
    pub fn window_for(&self, file_count: usize) -> Duration {
        let count = u32::try_from(file_count).unwrap_or(u32::MAX);
        self.per_file
            .saturating_mul(count)
            .min(self.max_window)
            .max(self.min_window)
    }
}

impl Default for DelayPolicy {
    fn default() -> Self {
        Self {
            initial: Duration::from_millis(5000),
            per_file: Duration::from_millis(300),
            min_window: Duration::from_millis(5000),
            max_window: Duration::from_millis(10000),
        }
    }
}

/// Configuration for a prune run.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct PruneConfig {
    /// Extension completing the `.spec.<ext>` suffix.
    #[builder(default = "DEFAULT_EXTENSION.to_string()")]
    pub extension: String,

    /// Substring whose single occurrence marks a spec as empty.
    #[builder(default = "DEFAULT_MARKER.to_string()")]
    pub marker: String,

    /// Traverse and match hidden entries (starting with `.`).
    #[builder(default = "false")]
    pub include_hidden: bool,

    /// Abort windows.
    #[builder(default)]
    pub delays: DelayPolicy,
}

impl PruneConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref ext) = self.extension {
            if ext.is_empty() {
                return Err("Extension cannot be empty".to_string());
            }
            if ext.starts_with('.') {
                return Err("Extension must not start with '.'".to_string());
            }
            if ext.contains(['/', '\\']) {
                return Err("Extension cannot contain path separators".to_string());
            }
        }
        if let Some(ref marker) = self.marker {
            if marker.is_empty() {
                return Err("Marker cannot be empty".to_string());
            }
        }
        Ok(())
    }
}

impl PruneConfig {
    /// Create a new config builder.
    pub fn builder() -> PruneConfigBuilder {
        PruneConfigBuilder::default()
    }

    /// Glob matching spec files anywhere below the root.
    pub fn spec_pattern(&self) -> String {
        format!("**/*.spec.{}", self.extension)
    }

    /// File name that is never eligible for deletion.
    pub fn protected_name(&self) -> String {
        format!("{PROTECTED_STEM}.spec.{}", self.extension)
    }
}

impl Default for PruneConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            marker: DEFAULT_MARKER.to_string(),
            include_hidden: false,
            delays: DelayPolicy::default(),
        }
    }
}
