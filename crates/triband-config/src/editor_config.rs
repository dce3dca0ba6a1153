//! Editor settings loaded from `editor.toml`.

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Smallest accepted UI scale factor.
pub const MIN_SCALE: f32 = 0.5;
/// Largest accepted UI scale factor.
pub const MAX_SCALE: f32 = 4.0;
/// Longest accepted interval between host-poll repaints, in milliseconds.
pub const MAX_REPAINT_INTERVAL_MS: u64 = 1000;

/// Which knob surface to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Knob colors follow gain, and the mid-frequency knob follows frequency.
    #[default]
    ThreeQ,
    /// Fixed knob colors.
    Eq,
}

impl Variant {
    /// Setting name as written in config files and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Variant::ThreeQ => "three-q",
            Variant::Eq => "eq",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "three-q" | "3q" => Ok(Variant::ThreeQ),
            "eq" => Ok(Variant::Eq),
            _ => Err(ConfigError::invalid("variant", s, "expected 'three-q' or 'eq'")),
        }
    }
}

/// Which gesture markers to close when a knob is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReleasePolicy {
    /// End the gesture on all four parameters, whichever knob was released.
    #[default]
    AllKnobs,
    /// End the gesture only on the released knob.
    ActiveOnly,
}

impl ReleasePolicy {
    /// Setting name as written in config files and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            ReleasePolicy::AllKnobs => "all-knobs",
            ReleasePolicy::ActiveOnly => "active-only",
        }
    }
}

impl fmt::Display for ReleasePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReleasePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all-knobs" | "all" => Ok(ReleasePolicy::AllKnobs),
            "active-only" | "active" => Ok(ReleasePolicy::ActiveOnly),
            _ => Err(ConfigError::invalid(
                "release_policy",
                s,
                "expected 'all-knobs' or 'active-only'",
            )),
        }
    }
}

/// Editor configuration.
///
/// Every field has a default, so a partial (or empty) file is valid.
///
/// ```rust
/// use triband_config::{EditorConfig, ReleasePolicy, Variant};
///
/// let cfg = EditorConfig::from_toml_str("variant = \"eq\"").unwrap();
/// assert_eq!(cfg.variant, Variant::Eq);
/// assert_eq!(cfg.release_policy, ReleasePolicy::AllKnobs);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Knob surface variant.
    pub variant: Variant,
    /// Gesture-end behavior on knob release.
    pub release_policy: ReleasePolicy,
    /// UI scale factor applied on top of the window's native scale.
    pub scale: f32,
    /// How often to repaint while idle so host-driven changes show up.
    pub repaint_interval_ms: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            release_policy: ReleasePolicy::default(),
            scale: 1.0,
            repaint_interval_ms: 33,
        }
    }
}

impl EditorConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a TOML document.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml_str(&contents)
    }

    /// Load a config file, or return the defaults if the file does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate and write the config, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        self.validate()?;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }
        let contents = self.to_toml_string()?;
        std::fs::write(path, contents).map_err(|e| ConfigError::write_file(path, e))
    }

    /// Check every field against its accepted range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_SCALE..=MAX_SCALE).contains(&self.scale) {
            return Err(ConfigError::invalid(
                "scale",
                self.scale,
                "must be between 0.5 and 4",
            ));
        }
        if self.repaint_interval_ms == 0 || self.repaint_interval_ms > MAX_REPAINT_INTERVAL_MS {
            return Err(ConfigError::invalid(
                "repaint_interval_ms",
                self.repaint_interval_ms,
                "must be between 1 and 1000",
            ));
        }
        Ok(())
    }
}
