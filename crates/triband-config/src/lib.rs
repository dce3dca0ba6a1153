//! Configuration for the Triband EQ editor.
//!
//! The editor reads an optional `editor.toml` from the user config directory
//! (see [`paths`]). Command-line flags override whatever the file sets.
//!
//! # Example
//!
//! ```rust,no_run
//! use triband_config::{EditorConfig, default_config_path};
//!
//! let config = EditorConfig::load_or_default(default_config_path()).unwrap();
//! println!("variant: {}", config.variant);
//! ```

mod editor_config;
mod error;

/// Platform-specific paths for configuration.
pub mod paths;

pub use editor_config::{
    EditorConfig, MAX_REPAINT_INTERVAL_MS, MAX_SCALE, MIN_SCALE, ReleasePolicy, Variant,
};
pub use error::ConfigError;
pub use paths::{default_config_path, user_config_dir};
