//! Platform-specific location of the editor config file.
//!
//! - Linux: `~/.config/triband/editor.toml`
//! - macOS: `~/Library/Application Support/triband/editor.toml`
//! - Windows: `%APPDATA%\triband\editor.toml`

use std::path::PathBuf;

/// Application name used for directory paths.
const APP_NAME: &str = "triband";

/// File name of the editor config.
const CONFIG_FILE: &str = "editor.toml";

/// Returns the user-specific configuration directory.
///
/// Returns a fallback path if the config directory cannot be determined.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Default path of `editor.toml`.
pub fn default_config_path() -> PathBuf {
    user_config_dir().join(CONFIG_FILE)
}
