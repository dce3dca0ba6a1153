//! Resolve the editor configuration from file and command line.

use std::path::Path;
use triband_config::{EditorConfig, ReleasePolicy, Variant};

/// Command-line settings that take precedence over the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Overrides {
    /// Editor variant.
    pub variant: Option<Variant>,
    /// Gesture release behavior.
    pub release_policy: Option<ReleasePolicy>,
    /// UI scale factor.
    pub scale: Option<f32>,
}

/// Load `path` (defaults if missing) and apply `overrides`.
///
/// Never fails: an unreadable or invalid file is logged and replaced by
/// defaults, and an invalid override is logged and skipped.
pub fn resolve_config(path: &Path, overrides: &Overrides) -> EditorConfig {
    let mut config = match EditorConfig::load_or_default(path) {
        Ok(config) => {
            tracing::debug!(path = %path.display(), "loaded editor config");
            config
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "config unusable, using defaults");
            EditorConfig::default()
        }
    };

    if let Some(variant) = overrides.variant {
        config.variant = variant;
    }
    if let Some(policy) = overrides.release_policy {
        config.release_policy = policy;
    }
    if let Some(scale) = overrides.scale {
        let candidate = EditorConfig { scale, ..config };
        match candidate.validate() {
            Ok(()) => config = candidate,
            Err(e) => tracing::warn!(error = %e, "ignoring --scale"),
        }
    }

    config
}
